//! Tests for hex color validation, normalization, and serialization.

use matisse_core::{format_rgb, normalize_hex, parse_hex};
use matisse_error::{ColorErrorKind, MatisseError, MatisseErrorKind};

fn color_kind(err: &MatisseError) -> &ColorErrorKind {
    match err.kind() {
        MatisseErrorKind::Color(color) => &color.kind,
        other => panic!("expected color error, got {other}"),
    }
}

#[test]
fn test_six_digit_identity() {
    for hex in ["#000000", "#ffffff", "#A1b2C3", "#112233"] {
        assert_eq!(normalize_hex(hex).unwrap(), hex);
    }
}

#[test]
fn test_three_digit_expansion() {
    assert_eq!(normalize_hex("#abc").unwrap(), "#aabbcc");
    assert_eq!(normalize_hex("#fff").unwrap(), "#ffffff");
    assert_eq!(normalize_hex("#F0a").unwrap(), "#FF00aa");
}

#[test]
fn test_malformed_colors_rejected() {
    for hex in ["", "fff", "ffffff", "#ff", "#ffff", "#fffff", "#fffffff", "#ggg", "#12345g", "red"] {
        let err = normalize_hex(hex).unwrap_err();
        assert!(
            matches!(color_kind(&err), ColorErrorKind::InvalidHex(input) if input == hex),
            "expected InvalidHex for {hex:?}"
        );
    }
}

#[test]
fn test_rejection_code() {
    let err = normalize_hex("not-a-color").unwrap_err();
    assert!(format!("{err}").starts_with("[color-palette]"));
    assert_eq!(MatisseError::code(), "[color-palette]");
}

#[test]
fn test_parse_hex() {
    assert_eq!(parse_hex("#112233").unwrap(), 0x112233);
    assert_eq!(parse_hex("#FFFFFF").unwrap(), 0xFFFFFF);
    assert_eq!(parse_hex("#000000").unwrap(), 0);
}

#[test]
fn test_parse_hex_rejects() {
    for hex in ["#fff", "112233", "#11223g", "#1122334"] {
        let err = parse_hex(hex).unwrap_err();
        assert!(
            matches!(color_kind(&err), ColorErrorKind::Unparseable(input) if input == hex),
            "expected Unparseable for {hex:?}"
        );
    }
}

#[test]
fn test_format_rgb_masks_and_pads() {
    assert_eq!(format_rgb(0xFF00FF), "#FF00FF");
    assert_eq!(format_rgb(0x1FF00FF), "#FF00FF");
    assert_eq!(format_rgb(0xFF112233), "#112233");
    assert_eq!(format_rgb(0x0000AB), "#0000AB");
    assert_eq!(format_rgb(0), "#000000");
}

#[test]
fn test_normalize_then_parse() {
    let normalized = normalize_hex("#abc").unwrap();
    assert_eq!(parse_hex(&normalized).unwrap(), 0xAABBCC);
}
