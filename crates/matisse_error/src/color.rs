//! Color validation error types.

/// Color-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ColorErrorKind {
    /// Fallback color failed the hex pattern check
    #[display("Invalid fallback hex color: {}. Must be in the format #ffffff or #fff", _0)]
    InvalidHex(String),
    /// Color string could not be parsed into an RGB value
    #[display("Unparseable color string: {}", _0)]
    Unparseable(String),
}

/// Color error with source location tracking.
///
/// # Examples
///
/// ```
/// use matisse_error::{ColorError, ColorErrorKind};
///
/// let err = ColorError::new(ColorErrorKind::InvalidHex("#zzz".to_string()));
/// assert!(format!("{}", err).contains("Invalid fallback hex color"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Color Error: {} at line {} in {}", kind, line, file)]
pub struct ColorError {
    /// The kind of error that occurred
    pub kind: ColorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ColorError {
    /// Create a new ColorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ColorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
