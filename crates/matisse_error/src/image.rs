//! Image resolution and decoding error types.

/// Image-specific error conditions.
///
/// `NoSource` keeps the exact message historically observed by callers when
/// a reference matches no resolution rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageErrorKind {
    /// Reference matched no resolution rule
    #[display("Failed to get image")]
    NoSource,
    /// Embedded resource id is unknown to the configured store
    #[display("No embedded resource with id {}", _0)]
    Resource(u32),
    /// Base64 payload of a data URI could not be decoded
    #[display("Base64 decode error: {}", _0)]
    Base64(String),
    /// Local file could not be read
    #[display("Failed to read image file: {}", _0)]
    Io(String),
    /// Network fetch failed before a response arrived
    #[display("Image fetch failed: {}", _0)]
    Fetch(String),
    /// Network fetch returned a non-success status
    #[display("Image fetch returned HTTP {}", status)]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },
    /// Bytes were obtained but could not be decoded as an image
    #[display("Failed to decode image: {}", _0)]
    Decode(String),
}

/// Image error with source location tracking.
///
/// # Examples
///
/// ```
/// use matisse_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::NoSource);
/// assert!(format!("{}", err).contains("Failed to get image"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
