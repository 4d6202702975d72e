//! Trait definitions for palette generation and resource lookup.

use async_trait::async_trait;
use image::DynamicImage;
use matisse_core::Palette;
use matisse_error::MatisseResult;

/// Core trait every palette generation collaborator must implement.
///
/// Generation is single-shot: it completes exactly once per call, there is
/// no retry and no cancellation beyond dropping the future. `Ok(None)`
/// means extraction ran but produced nothing usable (a degenerate 1×1 or
/// fully transparent image, for instance) and is not an error.
#[async_trait]
pub trait PaletteGenerator: Send + Sync {
    /// Extract a palette from a decoded image.
    async fn generate(&self, image: &DynamicImage) -> MatisseResult<Option<Palette>>;

    /// Generator name, for diagnostics (e.g. "median-cut", "quantizer").
    fn name(&self) -> &'static str;
}

/// Lookup for images bundled with the application package.
///
/// Stores hold already-encoded image bytes addressed by a platform-assigned
/// integer id. Id zero is reserved to mean "no resource".
pub trait ResourceStore: Send + Sync {
    /// The encoded bytes for a resource id, if the store knows it.
    fn load(&self, id: u32) -> Option<Vec<u8>>;
}
