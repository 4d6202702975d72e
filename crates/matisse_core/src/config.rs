//! Caller-facing configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Colors substituted when extraction cannot produce a swatch.
///
/// `fallback` must be a `#fff` or `#ffffff` style hex color and is validated
/// at call time; `fallback_text_color` passes through unvalidated.
///
/// # Examples
///
/// ```
/// use matisse_core::{FallbackConfig, FallbackConfigBuilder};
///
/// let config = FallbackConfig::default();
/// assert_eq!(config.fallback, "#000000");
/// assert_eq!(config.fallback_text_color, "#ffffff");
///
/// let config = FallbackConfigBuilder::default()
///     .fallback("#abc")
///     .build()
///     .unwrap();
/// assert_eq!(config.fallback, "#abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct FallbackConfig {
    /// Color used when extraction cannot produce a given swatch
    #[builder(default = "String::from(\"#000000\")")]
    pub fallback: String,
    /// Text color used when the dominant swatch is missing
    #[builder(default = "String::from(\"#ffffff\")")]
    pub fallback_text_color: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            fallback: String::from("#000000"),
            fallback_text_color: String::from("#ffffff"),
        }
    }
}

/// Deadlines bounding the two awaits of a palette request.
///
/// Both the remote fetch and the generator call are single-shot and cannot
/// be retried; these deadlines are the only way a hung collaborator or
/// remote host surfaces as an error instead of a forever-pending call.
///
/// # Examples
///
/// ```
/// use matisse_core::PickerOptionsBuilder;
/// use std::time::Duration;
///
/// let options = PickerOptionsBuilder::default()
///     .generate_deadline(Duration::from_millis(500))
///     .build()
///     .unwrap();
/// assert_eq!(options.fetch_timeout, Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_builder::Builder)]
pub struct PickerOptions {
    /// Deadline for fetching a remote image
    #[builder(default = "Duration::from_secs(30)")]
    pub fetch_timeout: Duration,
    /// Deadline for the palette generator to complete
    #[builder(default = "Duration::from_secs(10)")]
    pub generate_deadline: Duration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(30),
            generate_deadline: Duration::from_secs(10),
        }
    }
}
