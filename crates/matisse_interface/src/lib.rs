//! Capability traits for the Matisse palette extraction library.
//!
//! This crate defines the seams between the palette service and its
//! collaborators: the palette generation capability and the embedded
//! resource store. Implementations live elsewhere; the facade crate only
//! ever talks to these traits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{PaletteGenerator, ResourceStore};
