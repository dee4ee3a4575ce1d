//! Library misuse error types.

/// Library misuse error with source location.
///
/// Raised when the library is used outside its contract, such as limiter
/// settings out of range or a base URL that does not parse.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("SDK Error: {} at line {} in {}", message, line, file)]
pub struct SdkError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SdkError {
    /// Create a new SdkError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use congress_error::SdkError;
    ///
    /// let err = SdkError::new("safety margin must be within [0, 1]");
    /// assert!(err.message.contains("safety margin"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
