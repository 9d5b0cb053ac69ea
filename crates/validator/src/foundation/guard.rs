//! String-type guard for dynamically typed input.
//!
//! Validators that accept arbitrary JSON input call the guard first. A
//! non-text value is reported as a failed [`ValidationResult`] instead of a
//! panic, so callers can short-circuit and still hand a value back.

use serde_json::Value;

use crate::foundation::validatable::json_type_name;
use crate::foundation::{ValidationError, ValidationResult};

/// Field name used when the caller does not supply one.
pub const DEFAULT_FIELD: &str = "Input";

/// Borrows the text out of `input`, or describes why it is not text.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::guard::as_text;
/// use serde_json::json;
///
/// assert_eq!(as_text(&json!("bob"), "Username").unwrap(), "bob");
///
/// let err = as_text(&json!(123), "Username").unwrap_err();
/// assert_eq!(err.message, "Username must be a string, but received number.");
/// ```
pub fn as_text<'a>(input: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match input {
        Value::String(text) => Ok(text),
        other => Err(ValidationError::not_a_string(
            field.to_owned(),
            json_type_name(other),
        )),
    }
}

/// Returns `Some(failure)` if `input` is not text, `None` otherwise.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::guard::check_string;
/// use serde_json::json;
///
/// assert!(check_string(&json!("text"), "Input").is_none());
///
/// let failed = check_string(&json!(false), "Input").unwrap();
/// assert!(!failed.is_valid());
/// assert_eq!(failed.errors(), ["Input must be a string, but received boolean."]);
/// ```
pub fn check_string(input: &Value, field: &str) -> Option<ValidationResult> {
    as_text(input, field)
        .err()
        .map(|error| ValidationResult::failure(&error))
}
