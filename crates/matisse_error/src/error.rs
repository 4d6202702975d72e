//! Top-level error wrapper types.

use crate::{ColorError, GeneratorError, ImageError};

/// The rejection code observed by callers for every failure.
pub const ERROR_CODE: &str = "[color-palette]";

/// Discriminated union of every failure the library can surface.
///
/// # Examples
///
/// ```
/// use matisse_error::{ImageError, ImageErrorKind, MatisseError};
///
/// let img_err = ImageError::new(ImageErrorKind::NoSource);
/// let err: MatisseError = img_err.into();
/// assert!(format!("{}", err).contains("Failed to get image"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MatisseErrorKind {
    /// Fallback color validation or parsing error
    #[from(ColorError)]
    Color(ColorError),
    /// Image resolution or decoding error
    #[from(ImageError)]
    Image(ImageError),
    /// Palette generator error
    #[from(GeneratorError)]
    Generator(GeneratorError),
}

/// Matisse error with kind discrimination.
///
/// Bad input and I/O failure deliberately collapse into this single
/// rejection shape; callers that care can inspect [`MatisseError::kind`].
///
/// # Examples
///
/// ```
/// use matisse_error::{ColorError, ColorErrorKind, MatisseError, MatisseResult};
///
/// fn might_fail() -> MatisseResult<()> {
///     Err(ColorError::new(ColorErrorKind::Unparseable("#12345".to_string())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(format!("{}", err).starts_with(MatisseError::code()));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("[color-palette] {}", _0)]
pub struct MatisseError(Box<MatisseErrorKind>);

impl MatisseError {
    /// Create a new error from a kind.
    pub fn new(kind: MatisseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MatisseErrorKind {
        &self.0
    }

    /// The constant rejection code carried by every error.
    pub fn code() -> &'static str {
        ERROR_CODE
    }
}

// Generic From implementation for any type that converts to MatisseErrorKind
impl<T> From<T> for MatisseError
where
    T: Into<MatisseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Matisse operations.
///
/// # Examples
///
/// ```
/// use matisse_error::{ImageError, ImageErrorKind, MatisseResult};
///
/// fn resolve() -> MatisseResult<Vec<u8>> {
///     Err(ImageError::new(ImageErrorKind::Resource(42)))?
/// }
/// ```
pub type MatisseResult<T> = std::result::Result<T, MatisseError>;
