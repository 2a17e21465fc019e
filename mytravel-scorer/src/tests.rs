//! Unit coverage for rating aggregation and ranking.
#![forbid(unsafe_code)]

use geo::Coord;
use mytravel_core::{Place, RatedPlace, Review};
use rstest::{fixture, rstest};

use crate::rank::Recommender;
use crate::{
    DEFAULT_LIMIT, RecommendationWeights, UNKNOWN_DISTANCE_KM, aggregate_ratings, recommend,
};

const TOLERANCE: f64 = 1e-9;

fn at(id: &str, lon: f64, lat: f64) -> Place {
    Place::new(id, id.to_uppercase(), Some(Coord { x: lon, y: lat }))
}

fn rated(id: &str, rating: f64, review_count: usize) -> RatedPlace {
    RatedPlace {
        place: Place::new(id, id, None),
        review_count,
        rating,
    }
}

#[fixture]
fn two_places() -> Vec<Place> {
    vec![at("a", 0.0, 0.0), at("b", 1.0, 0.0)]
}

#[rstest]
fn aggregates_count_and_mean(two_places: Vec<Place>) {
    let reviews = vec![
        Review::new("r1", "a", 5.0),
        Review::new("r2", "a", 3.0),
        Review::new("r3", "b", 2.0),
    ];

    let rated = aggregate_ratings(&two_places, &reviews);

    assert_eq!(rated.len(), 2);
    assert_eq!(rated[0].review_count, 2);
    assert!((rated[0].rating - 4.0).abs() < TOLERANCE);
    assert_eq!(rated[1].review_count, 1);
    assert!((rated[1].rating - 2.0).abs() < TOLERANCE);
}

#[rstest]
fn unreviewed_places_rate_exactly_zero(two_places: Vec<Place>) {
    let rated = aggregate_ratings(&two_places, &[]);

    assert!(rated.iter().all(|entry| entry.review_count == 0));
    assert!(rated.iter().all(|entry| entry.rating == 0.0));
}

#[rstest]
fn ignores_reviews_for_unknown_places(two_places: Vec<Place>) {
    let reviews = vec![Review::new("r1", "ghost", 5.0), Review::new("r2", "b", 4.0)];

    let rated = aggregate_ratings(&two_places, &reviews);

    assert_eq!(rated[0].review_count, 0);
    assert_eq!(rated[1].review_count, 1);
}

#[rstest]
fn aggregation_preserves_input_order_and_inputs(two_places: Vec<Place>) {
    let before = two_places.clone();
    let rated = aggregate_ratings(&two_places, &[Review::new("r1", "b", 5.0)]);

    let ids: Vec<&str> = rated.iter().map(|entry| entry.place.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(two_places, before);
}

#[rstest]
fn worked_example_ranks_reviewed_nearby_place_first(two_places: Vec<Place>) {
    let reviews = vec![Review::new("r1", "a", 5.0), Review::new("r2", "a", 3.0)];

    let ranked = recommend(&two_places, &reviews, Some(Coord { x: 0.0, y: 0.0 }), 2);

    assert_eq!(ranked.len(), 2);
    let first = &ranked[0];
    assert_eq!(first.place.id.as_str(), "a");
    assert_eq!(first.review_count, 2);
    assert!((first.rating - 4.0).abs() < TOLERANCE);
    assert_eq!(first.distance_km, 0.0);
    assert!((first.score - 110.0).abs() < TOLERANCE);

    let second = &ranked[1];
    assert_eq!(second.place.id.as_str(), "b");
    assert!((second.distance_km - 111.195).abs() < 0.001);
    assert!((second.score - -11.195).abs() < 0.001);
}

#[rstest]
fn missing_reference_uses_sentinel_distance(two_places: Vec<Place>) {
    let reviews = vec![Review::new("r1", "b", 5.0)];

    let ranked = recommend(&two_places, &reviews, None, DEFAULT_LIMIT);

    assert!(ranked.iter().all(|entry| entry.distance_km == UNKNOWN_DISTANCE_KM));
    assert_eq!(ranked[0].place.id.as_str(), "b");
    assert!((ranked[0].score - (10.0 + 1.0 - 899.0)).abs() < TOLERANCE);
    assert!((ranked[1].score - -899.0).abs() < TOLERANCE);
}

#[rstest]
fn place_without_location_uses_sentinel_even_with_reference() {
    let place = Place::new("x", "Nowhere", None);
    let recommender = Recommender::default();

    let distance = recommender.distance_km(&place, Some(Coord { x: 0.0, y: 0.0 }));

    assert_eq!(distance, UNKNOWN_DISTANCE_KM);
}

#[rstest]
#[case(0, 0)]
#[case(2, 2)]
#[case(6, 3)]
#[case(usize::MAX, 3)]
fn output_length_is_min_of_limit_and_input(#[case] limit: usize, #[case] expected: usize) {
    let input = vec![rated("a", 1.0, 1), rated("b", 2.0, 1), rated("c", 3.0, 1)];

    let ranked = Recommender::default().recommend(input, None, limit);

    assert_eq!(ranked.len(), expected);
}

#[rstest]
fn empty_input_yields_empty_output() {
    let ranked = recommend(&[], &[], Some(Coord { x: 107.6, y: -6.9 }), DEFAULT_LIMIT);
    assert!(ranked.is_empty());
}

#[rstest]
fn equal_scores_keep_input_order() {
    let input = vec![
        rated("first", 3.0, 2),
        rated("best", 5.0, 2),
        rated("second", 3.0, 2),
        rated("third", 3.0, 2),
    ];

    let ranked = Recommender::default().recommend(input, None, DEFAULT_LIMIT);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.place.id.as_str()).collect();
    assert_eq!(ids, vec!["best", "first", "second", "third"]);
}

#[rstest]
fn nan_scores_rank_last_in_input_order() {
    let input = vec![
        rated("nan-1", f64::NAN, 1),
        rated("low", 1.0, 0),
        rated("nan-2", f64::NAN, 1),
        rated("high", 5.0, 0),
    ];

    let ranked = Recommender::default().recommend(input, None, DEFAULT_LIMIT);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.place.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "low", "nan-1", "nan-2"]);
}

#[rstest]
fn custom_weights_change_the_ranking() {
    let weights = RecommendationWeights {
        rating_weight: 0.0,
        review_count_weight: 10.0,
        ..RecommendationWeights::default()
    };
    let input = vec![rated("loved", 5.0, 1), rated("popular", 2.0, 3)];

    let ranked = Recommender::new(weights).recommend(input, None, DEFAULT_LIMIT);

    assert_eq!(ranked[0].place.id.as_str(), "popular");
    assert_eq!(Recommender::new(weights).weights().review_count_weight, 10.0);
}

#[rstest]
fn score_all_keeps_input_order() {
    let input = vec![rated("low", 1.0, 0), rated("high", 5.0, 0)];

    let scored = Recommender::default().score_all(input, None);

    assert_eq!(scored[0].place.id.as_str(), "low");
    assert_eq!(scored[1].place.id.as_str(), "high");
}

#[rstest]
fn scored_place_serialises_to_json() {
    let ranked = Recommender::default().recommend(vec![rated("a", 4.0, 2)], None, 1);

    let json = serde_json::to_value(&ranked).expect("serialise ranking");

    assert_eq!(json[0]["review_count"], 2);
    assert_eq!(json[0]["distance_km"], UNKNOWN_DISTANCE_KM);
    assert_eq!(json[0]["place"]["id"], "a");
}
