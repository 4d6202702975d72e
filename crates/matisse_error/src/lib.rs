//! Error types for the Matisse palette extraction library.
//!
//! This crate provides the foundation error types used throughout the Matisse
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The top-level [`MatisseError`] carries the fixed rejection code
//! `[color-palette]` in its display output, so a caller always observes the
//! same rejection shape regardless of which stage failed.
//!
//! # Examples
//!
//! ```
//! use matisse_error::{ColorError, ColorErrorKind, MatisseResult};
//!
//! fn check_color() -> MatisseResult<()> {
//!     Err(ColorError::new(ColorErrorKind::InvalidHex("red".to_string())))?
//! }
//!
//! match check_color() {
//!     Ok(()) => println!("valid"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color;
mod error;
mod generator;
mod image;

pub use color::{ColorError, ColorErrorKind};
pub use error::{ERROR_CODE, MatisseError, MatisseErrorKind, MatisseResult};
pub use generator::{GeneratorError, GeneratorErrorKind};
pub use image::{ImageError, ImageErrorKind};
