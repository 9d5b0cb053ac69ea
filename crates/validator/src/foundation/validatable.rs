//! AsValidatable trait with GAT for universal type conversion
//!
//! This module provides the `AsValidatable` trait that lets a `str` validator
//! accept owned strings, borrowed strings and dynamically typed JSON values.

use std::borrow::{Borrow, Cow};

use crate::foundation::ValidationError;
use crate::foundation::guard::DEFAULT_FIELD;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// STRING CONVERSIONS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Box<str> {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
#[must_use]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(s.as_str()),
            other => Err(ValidationError::not_a_string(
                DEFAULT_FIELD,
                json_type_name(other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_conversions() {
        let owned = String::from("abc");
        assert_eq!(owned.as_validatable().unwrap(), "abc");

        let boxed: Box<str> = "abc".into();
        assert_eq!(boxed.as_validatable().unwrap(), "abc");

        let cow: Cow<'_, str> = Cow::Borrowed("abc");
        assert_eq!(cow.as_validatable().unwrap(), "abc");
    }

    #[test]
    fn test_json_string_passes_through() {
        let value = json!("hello");
        let text: &str = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_json_type_mismatch() {
        for (value, name) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(42), "number"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            let err = AsValidatable::<str>::as_validatable(&value).unwrap_err();
            assert_eq!(err.code, "type_mismatch");
            assert_eq!(err.param("actual"), Some(name));
            assert_eq!(json_type_name(&value), name);
        }
    }
}
