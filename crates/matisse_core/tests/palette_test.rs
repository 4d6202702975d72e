//! Tests for the palette and swatch model.

use matisse_core::{Palette, Swatch, SwatchKind};
use strum::IntoEnumIterator;

#[test]
fn test_swatch_accessors() {
    let swatch = Swatch::new(0x112233, 0xFFFFFF, 0xCCCCCC);
    assert_eq!(swatch.rgb(), 0x112233);
    assert_eq!(swatch.title_text_color(), 0xFFFFFF);
    assert_eq!(swatch.body_text_color(), 0xCCCCCC);
}

#[test]
fn test_empty_palette_fallback() {
    let palette = Palette::new();
    assert!(palette.dominant().is_none());
    for kind in SwatchKind::iter() {
        assert_eq!(palette.color(kind, 0xABCDEF), 0xABCDEF);
    }
}

#[test]
fn test_populated_categories() {
    let mut palette = Palette::new();
    for (i, kind) in SwatchKind::iter().enumerate() {
        palette = palette.with_swatch(kind, Swatch::new(i as u32 + 1, 0, 0));
    }
    for (i, kind) in SwatchKind::iter().enumerate() {
        assert_eq!(palette.color(kind, 0xABCDEF), i as u32 + 1);
        assert!(palette.swatch(kind).is_some());
    }
}

#[test]
fn test_dominant_independent() {
    let palette = Palette::new().with_dominant(Swatch::new(0x445566, 0xFFFFFF, 0xEEEEEE));
    assert_eq!(palette.dominant().unwrap().rgb(), 0x445566);
    assert_eq!(palette.color(SwatchKind::Vibrant, 0x010203), 0x010203);
}

#[test]
fn test_swatch_kind_display() {
    let names: Vec<String> = SwatchKind::iter().map(|k| k.to_string()).collect();
    assert_eq!(
        names,
        [
            "vibrant",
            "darkVibrant",
            "lightVibrant",
            "muted",
            "darkMuted",
            "lightMuted"
        ]
    );
}
