//! Phone number validator backed by libphonenumber metadata.
//!
//! International numbers (`+` prefix) are resolved from their calling code.
//! National numbers need a country hint, given as an ISO 3166-1 alpha-2 code.

use std::str::FromStr;

use phonenumber::country;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Any,
    Known(country::Id),
    Unknown,
}

/// Validates phone numbers against per-country numbering plans.
///
/// Spaces, dashes, dots, and balanced parentheses are allowed as formatting.
/// A `+` may only appear first. With a country set, international numbers
/// must also belong to that country.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::Phone;
///
/// assert!(Phone::new().validate("+1 (415) 555-2671").is_ok());
/// assert!(Phone::new().validate("4155552671").is_err()); // needs a country
///
/// let ua = Phone::in_country("UA");
/// assert!(ua.validate("096 123 45 67").is_ok());
/// assert!(ua.validate("+14155552671").is_err()); // not a Ukrainian number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    region: Region,
}

impl Phone {
    /// Accepts international numbers from any country.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            region: Region::Any,
        }
    }

    /// Accepts numbers belonging to the country with ISO code `iso`.
    ///
    /// The code is case-insensitive. An unrecognised code produces a
    /// validator that rejects everything.
    #[must_use]
    pub fn in_country(iso: &str) -> Self {
        let region = match country::Id::from_str(&iso.to_ascii_uppercase()) {
            Ok(id) => Region::Known(id),
            Err(_) => {
                tracing::debug!(country = iso, "unknown phone country");
                Region::Unknown
            }
        };
        Self { region }
    }

    /// The country numbers are checked against, if restricted to one.
    #[must_use]
    pub fn country(&self) -> Option<country::Id> {
        match self.region {
            Region::Known(id) => Some(id),
            Region::Any | Region::Unknown => None,
        }
    }

    /// Rejects characters that are neither digits nor formatting.
    fn check_format(input: &str) -> Result<(), ValidationError> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');
        if !input.chars().all(allowed) {
            return Err(ValidationError::new(
                "phone_invalid_chars",
                "Phone number contains invalid characters",
            ));
        }

        if input.rfind('+').is_some_and(|pos| pos != 0) {
            return Err(ValidationError::new(
                "phone_plus_position",
                "'+' can only appear at the start of the phone number",
            ));
        }

        let open = input.chars().filter(|&c| c == '(').count();
        let close = input.chars().filter(|&c| c == ')').count();
        if open != close {
            return Err(ValidationError::new(
                "phone_unbalanced_parens",
                "Phone number has unbalanced parentheses",
            ));
        }

        Ok(())
    }

    fn invalid_number() -> ValidationError {
        ValidationError::new(
            "phone_invalid_number",
            "Phone number does not match the numbering plan",
        )
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_phone",
                "Phone number cannot be empty",
            ));
        }
        let hint = match self.region {
            Region::Any => None,
            Region::Known(id) => Some(id),
            Region::Unknown => {
                return Err(ValidationError::new(
                    "phone_unknown_country",
                    "Unknown country for phone number",
                ));
            }
        };

        Self::check_format(input)?;
        if hint.is_none() && !input.starts_with('+') {
            return Err(ValidationError::new(
                "phone_missing_country_code",
                "Phone number must include country code (start with '+')",
            ));
        }

        let number = phonenumber::parse(hint, input).map_err(|error| {
            tracing::trace!(input, %error, "phone number did not parse");
            Self::invalid_number().with_param("reason", error.to_string())
        })?;

        if !number.is_valid() {
            tracing::trace!(input, "phone number matches no numbering plan");
            return Err(Self::invalid_number());
        }
        if hint.is_some_and(|id| number.country().id() != Some(id)) {
            return Err(ValidationError::new(
                "phone_country_mismatch",
                "Phone number belongs to a different country",
            ));
        }

        Ok(())
    }
}

/// Returns `true` if `input` is a valid phone number.
///
/// Without `country`, only `+`-prefixed international numbers pass.
#[must_use]
pub fn is_phone(input: &str, country: Option<&str>) -> bool {
    country
        .map_or_else(Phone::new, Phone::in_country)
        .is_valid(input)
}

// ============================================================================
// TESTS
// ============================================================================
