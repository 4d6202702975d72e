//! Core data types for the Matisse palette extraction library.
//!
//! This crate provides the foundation data types shared across the Matisse
//! workspace: image reference classification, fallback configuration, hex
//! color handling, the palette/swatch model, and the flat color map returned
//! to callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color_map;
mod config;
mod hex;
mod palette;
mod source;

pub use color_map::ColorMap;
pub use config::{FallbackConfig, FallbackConfigBuilder, PickerOptions, PickerOptionsBuilder};
pub use hex::{format_rgb, normalize_hex, parse_hex};
pub use palette::{Palette, Swatch, SwatchKind};
pub use source::{ImageRequest, ImageSource};
