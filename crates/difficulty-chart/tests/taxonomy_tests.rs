//! Tests for the difficulty taxonomy.

use difficulty_chart::taxonomy::{self, parse_hex_color, LEVEL_COUNT};
use difficulty_chart::Rgb;

#[test]
fn test_level_order() {
    let names: Vec<&str> = taxonomy::levels().iter().map(|l| l.name).collect();
    assert_eq!(names.len(), LEVEL_COUNT);
    assert_eq!(names[0], "Easy -");
    assert_eq!(names[4], "Medium");
    assert_eq!(names[15], "Hell");
}

#[test]
fn test_lookups_by_name() {
    assert_eq!(taxonomy::index_of("Hard +"), Some(8));
    assert_eq!(taxonomy::midpoint("Extreme"), Some(8.53));
    assert_eq!(taxonomy::color("Hell"), Some(Rgb::new(0x99, 0, 0)));
    assert!(taxonomy::index_of("Nightmare").is_none());
    // Lookups are case-sensitive.
    assert!(taxonomy::index_of("hell").is_none());
}

#[test]
fn test_midpoints_increase() {
    for pair in taxonomy::levels().windows(2) {
        assert!(pair[0].midpoint < pair[1].midpoint);
    }
}

#[test]
fn test_hell_range_includes_ten() {
    let hell = taxonomy::range("Hell").unwrap();
    assert!(hell.contains(10.0));

    let extreme_plus = taxonomy::range("Extreme +").unwrap();
    assert!(!extreme_plus.contains(9.41));
    assert!(extreme_plus.contains(8.82));
}

#[test]
fn test_parse_hex_color_is_tolerant() {
    assert_eq!(parse_hex_color("#ff9900"), Rgb::new(255, 153, 0));
    assert_eq!(parse_hex_color("ff9900"), Rgb::BLACK);
    assert_eq!(parse_hex_color("#fff"), Rgb::BLACK);
    assert_eq!(parse_hex_color("#zz9900"), Rgb::new(0, 153, 0));
}
