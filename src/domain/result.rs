//! Result type alias for leadflow
//!
//! This module provides a convenient Result type alias that uses LeadflowError
//! as the error type.

use super::errors::LeadflowError;

/// Result type alias for leadflow operations
///
/// # Examples
///
/// ```
/// use leadflow::domain::result::Result;
/// use leadflow::domain::errors::LeadflowError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LeadflowError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LeadflowError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LeadflowError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(LeadflowError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
