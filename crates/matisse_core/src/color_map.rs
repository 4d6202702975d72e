//! The flat color map returned to callers.

use crate::SwatchKind;
use serde::{Deserialize, Serialize};

/// The fixed-shape palette response.
///
/// The six swatch fields are always populated. The dominant trio is only
/// populated when a palette was produced at all: when extraction yields
/// nothing, the swatch fields carry the fallback color verbatim and
/// `dominant`/`titleTextColor`/`bodyTextColor` are omitted from the
/// serialized map. Callers relying on those three keys must be prepared for
/// their absence.
///
/// # Examples
///
/// ```
/// use matisse_core::{ColorMap, SwatchKind};
///
/// let mut map = ColorMap::default();
/// map.set_swatch(SwatchKind::Vibrant, "#FF0040".to_string());
/// assert_eq!(map.vibrant, "#FF0040");
///
/// let json = serde_json::to_value(&map).unwrap();
/// assert!(json.get("dominant").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMap {
    /// Color of the dominant swatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<String>,
    /// Title-weight text color readable over `dominant`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text_color: Option<String>,
    /// Body-weight text color readable over `dominant`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text_color: Option<String>,
    /// Vibrant swatch color
    pub vibrant: String,
    /// Dark vibrant swatch color
    pub dark_vibrant: String,
    /// Light vibrant swatch color
    pub light_vibrant: String,
    /// Muted swatch color
    pub muted: String,
    /// Dark muted swatch color
    pub dark_muted: String,
    /// Light muted swatch color
    pub light_muted: String,
}

impl ColorMap {
    /// Set the field for a swatch category.
    pub fn set_swatch(&mut self, kind: SwatchKind, color: String) {
        match kind {
            SwatchKind::Vibrant => self.vibrant = color,
            SwatchKind::DarkVibrant => self.dark_vibrant = color,
            SwatchKind::LightVibrant => self.light_vibrant = color,
            SwatchKind::Muted => self.muted = color,
            SwatchKind::DarkMuted => self.dark_muted = color,
            SwatchKind::LightMuted => self.light_muted = color,
        }
    }

    /// Get the field for a swatch category.
    pub fn swatch(&self, kind: SwatchKind) -> &str {
        match kind {
            SwatchKind::Vibrant => &self.vibrant,
            SwatchKind::DarkVibrant => &self.dark_vibrant,
            SwatchKind::LightVibrant => &self.light_vibrant,
            SwatchKind::Muted => &self.muted,
            SwatchKind::DarkMuted => &self.dark_muted,
            SwatchKind::LightMuted => &self.light_muted,
        }
    }
}
