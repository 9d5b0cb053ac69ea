//! String content validators
//!
//! Email address, URL, and exact-match checks.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

/// Local part of RFC 5322 atext plus dots; domain of hyphenated labels with a
/// top-level label of at least two letters.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$",
    )
    .expect("email pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// The domain needs at least one dot, so `test@com` is rejected.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

/// Returns `true` if `input` looks like an email address.
#[must_use]
pub fn is_email(input: &str) -> bool {
    email().is_valid(input)
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates absolute URLs of any scheme using the WHATWG parser.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::url;
    ///
    /// assert!(url().validate("ftp://ftp.example.com").is_ok());
    /// assert!(url().validate("http://localhost:3000").is_ok());
    /// assert!(url().validate("not-a-url").is_err());
    /// ```
    pub Url for str;
    rule(input) { url::Url::parse(input).is_ok() }
    error(input) { ValidationError::invalid_format("url") }
    fn url();
}

/// Returns `true` if `input` parses as an absolute URL.
#[must_use]
pub fn is_url(input: &str) -> bool {
    url().is_valid(input)
}

// ============================================================================
// EQUALITY VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the input equals an expected string exactly.
    #[derive(PartialEq, Eq)]
    pub Equals { expected: String } for str;
    rule(self, input) { input == self.expected }
    error(self, input) {
        ValidationError::new("not_equal", "Values do not match.")
            .with_param("expected", self.expected.clone())
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equals(expected: impl Into<String>);
}

/// Returns `true` if `input` and `comparison` are the same string.
#[must_use]
pub fn is_equal(input: &str, comparison: &str) -> bool {
    input == comparison
}

// ============================================================================
// TESTS
// ============================================================================
