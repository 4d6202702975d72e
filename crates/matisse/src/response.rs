//! Palette response construction.

use matisse_core::{ColorMap, Palette, SwatchKind, format_rgb};
use strum::IntoEnumIterator;
use tracing::debug;

/// Shape a generator result into the flat color map.
///
/// With a palette, the six swatch fields come from the per-category
/// accessor (serialized, with `fallback_rgb` filling absent categories) and
/// the dominant trio comes from the dominant swatch or the raw fallback
/// strings. Without a palette, the swatch fields carry `fallback` verbatim
/// and the dominant trio stays unset.
///
/// # Examples
///
/// ```
/// use matisse::{Palette, Swatch, build_color_map};
///
/// let palette = Palette::new().with_dominant(Swatch::new(0x112233, 0xFFFFFF, 0xCCCCCC));
/// let map = build_color_map(Some(&palette), "#aabbcc", "#000000", 0xAABBCC);
///
/// assert_eq!(map.dominant.as_deref(), Some("#112233"));
/// assert_eq!(map.vibrant, "#AABBCC");
/// ```
pub fn build_color_map(
    palette: Option<&Palette>,
    fallback: &str,
    fallback_text: &str,
    fallback_rgb: u32,
) -> ColorMap {
    let mut map = ColorMap::default();

    match palette {
        Some(palette) => {
            match palette.dominant() {
                Some(dominant) => {
                    map.dominant = Some(format_rgb(dominant.rgb()));
                    map.title_text_color = Some(format_rgb(dominant.title_text_color()));
                    map.body_text_color = Some(format_rgb(dominant.body_text_color()));
                }
                None => {
                    map.dominant = Some(fallback.to_string());
                    map.title_text_color = Some(fallback_text.to_string());
                    map.body_text_color = Some(fallback_text.to_string());
                }
            }

            for kind in SwatchKind::iter() {
                map.set_swatch(kind, format_rgb(palette.color(kind, fallback_rgb)));
            }
        }
        None => {
            debug!("No palette extracted, filling swatches from fallback");
            // The dominant trio is left unset on this branch; the swatch
            // fields carry the fallback string verbatim, not re-serialized.
            for kind in SwatchKind::iter() {
                map.set_swatch(kind, fallback.to_string());
            }
        }
    }

    map
}
