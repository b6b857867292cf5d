//! Tests for the Rgb color type and its hex representation.

use dotlight::model::color::Rgb;
use dotlight::model::constants::{DEFAULT_FILL, DEFAULT_RING};

#[test]
fn parse_hex_with_hash() {
    assert_eq!(Rgb::parse_hex("#FF0080"), Some(Rgb::new(255, 0, 128)));
}

#[test]
fn parse_hex_without_hash() {
    assert_eq!(Rgb::parse_hex("00ffff"), Some(Rgb::new(0, 255, 255)));
}

#[test]
fn parse_hex_is_case_insensitive_and_trims() {
    assert_eq!(Rgb::parse_hex("  #aAbBcC  "), Some(Rgb::new(170, 187, 204)));
}

#[test]
fn parse_hex_rejects_bad_lengths() {
    assert_eq!(Rgb::parse_hex("#FFF"), None);
    assert_eq!(Rgb::parse_hex("#FF0080AA"), None);
    assert_eq!(Rgb::parse_hex(""), None);
}

#[test]
fn parse_hex_rejects_non_hex_digits() {
    assert_eq!(Rgb::parse_hex("#GG0000"), None);
}

#[test]
fn to_hex_formats_uppercase() {
    assert_eq!(Rgb::new(255, 0, 128).to_hex(), "#FF0080");
}

#[test]
fn display_matches_to_hex() {
    let color = Rgb::new(18, 52, 86);
    assert_eq!(format!("{}", color), color.to_hex());
}

#[test]
fn hex_round_trip() {
    let color = Rgb::new(1, 2, 3);
    assert_eq!(Rgb::parse_hex(&color.to_hex()), Some(color));
}

#[test]
fn default_colors_are_aqua_and_red() {
    assert_eq!(DEFAULT_FILL.to_hex(), "#00FFFF");
    assert_eq!(DEFAULT_RING.to_hex(), "#FF0000");
}
