//! Error types for value construction
//!
//! This module defines the error type used by the lo-val crate. All
//! fallible constructors return [`ValResult<T>`], which is a type alias
//! for `Result<T, ValError>`.

use thiserror::Error;

/// Error type for value construction
///
/// Operations in this crate are total by design; the only fallible
/// surface is range construction, which rejects a step of zero because
/// such a range could never advance.
///
/// # Examples
///
/// ```rust
/// use lo_val::ValError;
///
/// let err = ValError::ZeroStep;
/// assert_eq!(err.to_string(), "range step must not be zero");
/// ```
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ValError {
    /// Range construction with a step of zero
    #[error("range step must not be zero")]
    ZeroStep,
}

/// Result type for value construction
///
/// This is a type alias for `Result<T, ValError>` used by the fallible
/// constructors in this crate.
///
/// # Examples
///
/// ```rust
/// use lo_val::{range_step, ValResult, Range};
///
/// fn countdown() -> ValResult<Range> {
///     range_step(10, 0, -1)
/// }
/// ```
///
/// # See Also
///
/// - [`ValError`] - The error type
/// - [`range_step`](crate::range_step) - The fallible range constructor
pub type ValResult<T> = Result<T, ValError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step_error() {
        let err = ValError::ZeroStep;
        assert_eq!(err.to_string(), "range step must not be zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ValError::ZeroStep, ValError::ZeroStep);
    }

    #[test]
    fn test_valresult_err() {
        let result: ValResult<i32> = Err(ValError::ZeroStep);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "range step must not be zero"
        );
    }
}
