//! Image color-palette extraction.
//!
//! `matisse` turns an image reference (embedded resource id, `data:image`
//! URI, local file path, or remote URL) into a flat map of palette colors:
//! the dominant color with contrast-safe text colors, plus the six
//! vibrant/muted swatch categories. The actual color quantization is
//! delegated to a [`PaletteGenerator`] capability supplied by the caller;
//! this crate owns reference resolution, fallback-color handling, and
//! response shaping.
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use image::DynamicImage;
//! use matisse::{
//!     FallbackConfig, MatisseResult, Palette, PaletteGenerator, PalettePicker,
//! };
//! use std::sync::Arc;
//!
//! struct Quantizer;
//!
//! #[async_trait]
//! impl PaletteGenerator for Quantizer {
//!     async fn generate(&self, _image: &DynamicImage) -> MatisseResult<Option<Palette>> {
//!         Ok(None)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "quantizer"
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> MatisseResult<()> {
//! let picker = PalettePicker::new(Arc::new(Quantizer));
//! let colors = picker
//!     .get_palette("https://example.com/cover.png", &FallbackConfig::default())
//!     .await?;
//! println!("vibrant: {}", colors.vibrant);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod picker;
mod resolver;
mod resources;
mod response;

pub use picker::{PalettePicker, PalettePickerBuilder};
pub use resolver::ImageResolver;
pub use resources::StaticResources;
pub use response::build_color_map;

pub use matisse_core::{
    ColorMap, FallbackConfig, FallbackConfigBuilder, ImageRequest, ImageSource, Palette,
    PickerOptions, PickerOptionsBuilder, Swatch, SwatchKind, format_rgb, normalize_hex, parse_hex,
};
pub use matisse_error::{
    ColorError, ColorErrorKind, ERROR_CODE, GeneratorError, GeneratorErrorKind, ImageError,
    ImageErrorKind, MatisseError, MatisseErrorKind, MatisseResult,
};
pub use matisse_interface::{PaletteGenerator, ResourceStore};
