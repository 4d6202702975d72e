//! Palette generator error types.

/// Generator-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeneratorErrorKind {
    /// Generation did not complete within the configured deadline
    #[display("Palette generation exceeded the {}ms deadline", _0)]
    Deadline(u64),
    /// The generator reported a failure of its own
    #[display("Palette generation failed: {}", _0)]
    Failed(String),
}

/// Generator error with source location tracking.
///
/// # Examples
///
/// ```
/// use matisse_error::{GeneratorError, GeneratorErrorKind};
///
/// let err = GeneratorError::new(GeneratorErrorKind::Deadline(10_000));
/// assert!(format!("{}", err).contains("10000ms"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generator Error: {} at line {} in {}", kind, line, file)]
pub struct GeneratorError {
    /// The kind of error that occurred
    pub kind: GeneratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeneratorError {
    /// Create a new GeneratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeneratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
