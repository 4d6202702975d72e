//! Palette and swatch model produced by generation collaborators.

use derive_new::new;

/// A single representative color with contrast-safe text colors.
///
/// # Examples
///
/// ```
/// use matisse_core::Swatch;
///
/// let swatch = Swatch::new(0x112233, 0xFFFFFF, 0xEEEEEE);
/// assert_eq!(swatch.rgb(), 0x112233);
/// assert_eq!(swatch.title_text_color(), 0xFFFFFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Swatch {
    rgb: u32,
    title_text_color: u32,
    body_text_color: u32,
}

impl Swatch {
    /// Packed RGB of the swatch color.
    pub fn rgb(self) -> u32 {
        self.rgb
    }

    /// Packed RGB of a title-weight text color readable over the swatch.
    pub fn title_text_color(self) -> u32 {
        self.title_text_color
    }

    /// Packed RGB of a body-weight text color readable over the swatch.
    pub fn body_text_color(self) -> u32 {
        self.body_text_color
    }
}

/// The six named swatch categories a palette may populate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum SwatchKind {
    /// Saturated, mid-luminance
    #[display("vibrant")]
    Vibrant,
    /// Saturated, dark
    #[display("darkVibrant")]
    DarkVibrant,
    /// Saturated, light
    #[display("lightVibrant")]
    LightVibrant,
    /// Desaturated, mid-luminance
    #[display("muted")]
    Muted,
    /// Desaturated, dark
    #[display("darkMuted")]
    DarkMuted,
    /// Desaturated, light
    #[display("lightMuted")]
    LightMuted,
}

/// The output of a palette generation collaborator.
///
/// Any subset of slots may be populated; extraction over degenerate input
/// commonly leaves most of them empty. The per-kind accessor mirrors the
/// collaborator contract: ask for a category, supply the value to use when
/// that category is absent.
///
/// # Examples
///
/// ```
/// use matisse_core::{Palette, Swatch, SwatchKind};
///
/// let palette = Palette::new()
///     .with_dominant(Swatch::new(0x112233, 0xFFFFFF, 0xDDDDDD))
///     .with_swatch(SwatchKind::Vibrant, Swatch::new(0xFF0040, 0, 0));
///
/// assert_eq!(palette.color(SwatchKind::Vibrant, 0xABCDEF), 0xFF0040);
/// assert_eq!(palette.color(SwatchKind::Muted, 0xABCDEF), 0xABCDEF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    dominant: Option<Swatch>,
    vibrant: Option<Swatch>,
    dark_vibrant: Option<Swatch>,
    light_vibrant: Option<Swatch>,
    muted: Option<Swatch>,
    dark_muted: Option<Swatch>,
    light_muted: Option<Swatch>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dominant swatch.
    pub fn with_dominant(mut self, swatch: Swatch) -> Self {
        self.dominant = Some(swatch);
        self
    }

    /// Set the swatch for a category.
    pub fn with_swatch(mut self, kind: SwatchKind, swatch: Swatch) -> Self {
        *self.slot_mut(kind) = Some(swatch);
        self
    }

    /// The swatch judged most visually prominent, if any.
    pub fn dominant(&self) -> Option<&Swatch> {
        self.dominant.as_ref()
    }

    /// The swatch for a category, if populated.
    pub fn swatch(&self, kind: SwatchKind) -> Option<&Swatch> {
        self.slot(kind).as_ref()
    }

    /// The color for a category, or `fallback_rgb` when absent.
    pub fn color(&self, kind: SwatchKind, fallback_rgb: u32) -> u32 {
        self.swatch(kind).map(|s| s.rgb()).unwrap_or(fallback_rgb)
    }

    fn slot(&self, kind: SwatchKind) -> &Option<Swatch> {
        match kind {
            SwatchKind::Vibrant => &self.vibrant,
            SwatchKind::DarkVibrant => &self.dark_vibrant,
            SwatchKind::LightVibrant => &self.light_vibrant,
            SwatchKind::Muted => &self.muted,
            SwatchKind::DarkMuted => &self.dark_muted,
            SwatchKind::LightMuted => &self.light_muted,
        }
    }

    fn slot_mut(&mut self, kind: SwatchKind) -> &mut Option<Swatch> {
        match kind {
            SwatchKind::Vibrant => &mut self.vibrant,
            SwatchKind::DarkVibrant => &mut self.dark_vibrant,
            SwatchKind::LightVibrant => &mut self.light_vibrant,
            SwatchKind::Muted => &mut self.muted,
            SwatchKind::DarkMuted => &mut self.dark_muted,
            SwatchKind::LightMuted => &mut self.light_muted,
        }
    }
}
