//! Core traits for the validation system
//!
//! This module defines the trait every validator in the crate implements.

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over their input type and return
/// `Result<(), ValidationError>`. Multi-rule validators such as
/// [`Username`](crate::validators::Username) report every failing rule as a
/// nested error of the returned `ValidationError`.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::new("min_length", "too short"))
///         }
///     }
/// }
///
/// assert!(MinLength { min: 3 }.validate("abc").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// A single validator accepts `&str`, `String`, `Cow<str>` and
    /// `serde_json::Value`. Non-text JSON values are rejected with a
    /// `type_mismatch` error before the validator runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::credit_card;
    /// use serde_json::json;
    ///
    /// let card = credit_card();
    /// assert!(card.validate_any(&String::from("4111 1111 1111 1111")).is_ok());
    /// assert!(card.validate_any(&json!("4111 1111 1111 1111")).is_ok());
    /// assert!(card.validate_any(&json!(4111111111111111_u64)).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use serde_json::json;

    struct NonEmpty;

    impl Validate for NonEmpty {
        type Input = str;

        fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::new("empty", "empty"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(NonEmpty.validate("test").is_ok());
        assert!(NonEmpty.is_valid("test"));
        assert!(!NonEmpty.is_valid(""));
    }

    #[test]
    fn test_validate_any_accepts_owned_and_json() {
        assert!(NonEmpty.validate_any(&String::from("x")).is_ok());
        assert!(NonEmpty.validate_any(&json!("x")).is_ok());

        let err = NonEmpty.validate_any(&json!(null)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
    }
}
