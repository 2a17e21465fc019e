//! Unit tests for output rendering.

use crate::render::{OutputFormat, star_bar, write_recommendations};
use mytravel_core::Place;
use mytravel_scorer::{ScoredPlace, UNKNOWN_DISTANCE_KM};
use rstest::rstest;

#[rstest]
#[case(0.0, "☆☆☆☆☆")]
#[case(1.0, "★☆☆☆☆")]
#[case(3.4, "★★★☆☆")]
#[case(3.5, "★★★½☆")]
#[case(4.99, "★★★★½")]
#[case(5.0, "★★★★★")]
#[case(7.0, "★★★★★")]
#[case(-1.0, "☆☆☆☆☆")]
#[case(f64::NAN, "☆☆☆☆☆")]
fn star_bar_fills_five_slots(#[case] rating: f64, #[case] expected: &str) {
    assert_eq!(star_bar(rating), expected);
}

#[rstest]
fn empty_ranking_prints_a_notice() {
    let mut buffer: Vec<u8> = Vec::new();
    write_recommendations(&mut buffer, &[], OutputFormat::Text, true).expect("write");
    assert_eq!(String::from_utf8(buffer).expect("utf-8"), "No recommendations.\n");
}

#[rstest]
fn empty_ranking_is_an_empty_json_array() {
    let mut buffer: Vec<u8> = Vec::new();
    write_recommendations(&mut buffer, &[], OutputFormat::Json, false).expect("write");
    assert_eq!(String::from_utf8(buffer).expect("utf-8"), "[]\n");
}

#[rstest]
fn single_review_uses_singular_label_and_omits_blank_category() {
    let ranked = vec![ScoredPlace {
        place: Place::new("x", "Kiara Artha", None),
        review_count: 1,
        rating: 4.5,
        distance_km: UNKNOWN_DISTANCE_KM,
        score: -886.0,
    }];
    let mut buffer: Vec<u8> = Vec::new();

    write_recommendations(&mut buffer, &ranked, OutputFormat::Text, false).expect("write");

    assert_eq!(
        String::from_utf8(buffer).expect("utf-8"),
        "1. Kiara Artha\n   ★★★★½ 4.5 (1 review)\n"
    );
}
