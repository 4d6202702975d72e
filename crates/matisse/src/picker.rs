//! The caller-facing palette service.

use crate::resolver::ImageResolver;
use crate::response::build_color_map;
use image::DynamicImage;
use matisse_core::{
    ColorMap, FallbackConfig, ImageRequest, Palette, PickerOptions, normalize_hex, parse_hex,
};
use matisse_error::{GeneratorError, GeneratorErrorKind, MatisseResult};
use matisse_interface::{PaletteGenerator, ResourceStore};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, instrument};

/// Extracts color palettes from image references.
///
/// A picker is cheap to share behind an [`Arc`] and holds no per-call
/// state; each [`get_palette`](Self::get_palette) invocation is
/// independent.
pub struct PalettePicker {
    generator: Arc<dyn PaletteGenerator>,
    resolver: ImageResolver,
    options: PickerOptions,
}

impl PalettePicker {
    /// Create a picker with default options and no resource store.
    pub fn new(generator: Arc<dyn PaletteGenerator>) -> Self {
        Self::builder(generator).build()
    }

    /// Start building a picker around a generation capability.
    pub fn builder(generator: Arc<dyn PaletteGenerator>) -> PalettePickerBuilder {
        PalettePickerBuilder {
            generator,
            resources: None,
            options: PickerOptions::default(),
        }
    }

    /// Extract the palette of the referenced image.
    ///
    /// The fallback color is validated and normalized first, then the
    /// reference is resolved to a bitmap, the generator is awaited once
    /// under its deadline, and the result is shaped into a [`ColorMap`].
    /// Every failure surfaces as a single rejection shape whose display
    /// starts with the `[color-palette]` code.
    #[instrument(skip(self, request, config), fields(generator = self.generator.name()))]
    pub async fn get_palette(
        &self,
        request: impl Into<ImageRequest>,
        config: &FallbackConfig,
    ) -> MatisseResult<ColorMap> {
        let request = request.into();
        let fallback = normalize_hex(&config.fallback)?;
        let fallback_rgb = parse_hex(&fallback)?;

        let image = self.resolver.resolve(&request).await?;
        let palette = self.generate(&image).await?;

        debug!(extracted = palette.is_some(), "Building color map");
        Ok(build_color_map(
            palette.as_ref(),
            &fallback,
            &config.fallback_text_color,
            fallback_rgb,
        ))
    }

    /// Await the generator once, bounded by the configured deadline.
    async fn generate(&self, image: &DynamicImage) -> MatisseResult<Option<Palette>> {
        let deadline = self.options.generate_deadline;
        match timeout(deadline, self.generator.generate(image)).await {
            Ok(result) => result,
            Err(_) => Err(GeneratorError::new(GeneratorErrorKind::Deadline(
                deadline.as_millis() as u64,
            ))
            .into()),
        }
    }
}

/// Builder wiring a [`PalettePicker`]'s collaborators and options.
pub struct PalettePickerBuilder {
    generator: Arc<dyn PaletteGenerator>,
    resources: Option<Arc<dyn ResourceStore>>,
    options: PickerOptions,
}

impl PalettePickerBuilder {
    /// Attach an embedded-resource store.
    pub fn resources(mut self, store: Arc<dyn ResourceStore>) -> Self {
        self.resources = Some(store);
        self
    }

    /// Override the fetch and generation deadlines.
    pub fn options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the picker.
    pub fn build(self) -> PalettePicker {
        PalettePicker {
            resolver: ImageResolver::new(self.resources, &self.options),
            generator: self.generator,
            options: self.options,
        }
    }
}
