//! Aggregate pass/fail report returned by the validator entry points.

use serde::{Deserialize, Serialize};

use crate::foundation::{ValidationError, ValidationErrors};

/// Outcome of one validation call.
///
/// `valid` is always equal to `errors.is_empty()`: the fields are private and
/// every constructor derives one from the other. Messages keep the order in
/// which the rules reported them and contain no duplicates.
///
/// Serializes as `{"valid": bool, "errors": [..]}`.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationResult;
///
/// let ok = ValidationResult::ok();
/// assert!(ok.is_valid());
/// assert!(ok.errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawResult")]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Builds a result from messages, dropping repeats while keeping
    /// first-occurrence order.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut errors: Vec<String> = Vec::new();
        for message in messages {
            let message = message.into();
            if !errors.contains(&message) {
                errors.push(message);
            }
        }
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A failing result carrying a single error.
    pub fn failure(error: &ValidationError) -> Self {
        Self::from_messages([error.message.as_ref()])
    }

    /// Whether every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The failure messages, in rule order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the result and returns its messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl From<&ValidationErrors> for ValidationResult {
    fn from(errors: &ValidationErrors) -> Self {
        Self::from_messages(errors.messages())
    }
}

impl From<ValidationErrors> for ValidationResult {
    fn from(errors: ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

// Deserialization recomputes `valid` so a hand-written payload cannot break
// the invariant.
#[derive(Deserialize)]
struct RawResult {
    #[serde(default)]
    errors: Vec<String>,
}

impl From<RawResult> for ValidationResult {
    fn from(raw: RawResult) -> Self {
        Self::from_messages(raw.errors)
    }
}
