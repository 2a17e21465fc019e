//! Integration tests for [`HttpPlaceSource`].
//!
//! Each test stands up a `wiremock` server, so no real network traffic is
//! made.

use mytravel_core::{PlaceId, PlaceSource, SourceError, load_snapshot};
use mytravel_data::{HttpPlaceSource, HttpPlaceSourceConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> HttpPlaceSource {
    HttpPlaceSource::with_config(
        HttpPlaceSourceConfig::new(server.uri())
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("mytravel-test/0.1"),
    )
    .expect("failed to build test source")
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "a", "name": "Gedung Sate", "category": "Sejarah", "lat": -6.902, "lng": 107.618},
            {"_id": "b", "name": "Kawah Putih", "category": "Alam", "lat": "-7.166", "lng": "107.402"}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "r1", "place_id": "a", "rating": 5, "comment": "Megah"},
            {"_id": "r2", "place_id": "b", "rating": "4"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_places_decodes_listing() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let places = source_for(&server)
        .fetch_places()
        .await
        .expect("places should load");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Gedung Sate");
    assert!(places[1].location.is_some(), "string coordinates should decode");
}

#[tokio::test]
async fn fetch_reviews_for_place_uses_query_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .and(query_param("place_id", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "r1", "place_id": "a", "rating": 5}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let reviews = source_for(&server)
        .fetch_reviews_for_place(&PlaceId::new("a"))
        .await
        .expect("reviews should load");

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].place_id.as_str(), "a");
}

#[tokio::test]
async fn error_body_becomes_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/places"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "login required"})),
        )
        .mount(&server)
        .await;

    let err = source_for(&server)
        .fetch_places()
        .await
        .expect_err("error body should fail");

    match err {
        SourceError::Service { message, .. } => assert_eq!(message, "login required"),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_becomes_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .fetch_reviews()
        .await
        .expect_err("503 should fail");

    assert!(
        matches!(err, SourceError::Http { status: 503, .. }),
        "expected HTTP 503, got {err:?}"
    );
}

#[tokio::test]
async fn non_json_success_body_becomes_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/places"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = source_for(&server)
        .fetch_places()
        .await
        .expect_err("HTML should not decode");

    assert!(matches!(err, SourceError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/places"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let source = HttpPlaceSource::with_config(
        HttpPlaceSourceConfig::new(server.uri()).with_timeout(Duration::from_secs(1)),
    )
    .expect("failed to build test source");

    let err = source.fetch_places().await.expect_err("request should time out");

    assert_eq!(
        err,
        SourceError::Timeout {
            url: format!("{}/api/places", server.uri()),
            timeout_secs: 1,
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn blocking_snapshot_load_runs_inside_multi_thread_runtime() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let source = source_for(&server);

    let snapshot = load_snapshot(&source).expect("snapshot should load");

    assert_eq!(snapshot.places.len(), 2);
    assert_eq!(snapshot.reviews.len(), 2);
    assert_eq!(snapshot.reviews[1].rating, 4.0);
}

#[tokio::test]
async fn blocking_calls_inside_current_thread_runtime_are_rejected() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let source = source_for(&server);

    let err = source
        .places()
        .expect_err("current_thread runtime cannot block");
    assert!(
        matches!(err, SourceError::Runtime { ref message } if message.contains("fetch_")),
        "expected a runtime error, got {err:?}"
    );

    let places = source.fetch_places().await.expect("async fetch still works");
    assert_eq!(places.len(), 2);
}
