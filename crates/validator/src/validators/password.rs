//! Password strength validator.
//!
//! A password passes when it meets a minimum length and minimum counts of
//! uppercase letters, lowercase letters, digits and special characters. All
//! quotas are checked; failures are reported in that fixed order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{Rule, RuleSet};
use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::options::{self, OptionsError};

/// Characters that count towards the special-character quota.
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>', '_', '-', '\\', '[', ']',
];

// ============================================================================
// OPTIONS
// ============================================================================

/// Password quotas. Every quota defaults to 1, the length to 8.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::PasswordOptions;
/// use serde_json::json;
///
/// let options = PasswordOptions::from_json(&json!({ "minSpecialChars": 2 })).unwrap();
/// assert_eq!(options, PasswordOptions::default().min_special_chars(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordOptions {
    min_length: usize,
    min_uppercase: usize,
    min_lowercase: usize,
    min_numbers: usize,
    min_special_chars: usize,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_uppercase: 1,
            min_lowercase: 1,
            min_numbers: 1,
            min_special_chars: 1,
        }
    }
}

impl PasswordOptions {
    /// Options with every quota set to zero.
    #[must_use]
    pub fn none() -> Self {
        Self {
            min_length: 0,
            min_uppercase: 0,
            min_lowercase: 0,
            min_numbers: 0,
            min_special_chars: 0,
        }
    }

    /// Decodes options from JSON, merging present keys over the defaults.
    pub fn from_json(value: &Value) -> Result<Self, OptionsError> {
        options::decode("password", value)
    }

    /// Minimum length, in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    /// Minimum number of `A-Z`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_uppercase(mut self, n: usize) -> Self {
        self.min_uppercase = n;
        self
    }

    /// Minimum number of `a-z`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_lowercase(mut self, n: usize) -> Self {
        self.min_lowercase = n;
        self
    }

    /// Minimum number of `0-9`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_numbers(mut self, n: usize) -> Self {
        self.min_numbers = n;
        self
    }

    /// Minimum number of [`SPECIAL_CHARS`].
    #[must_use = "builder methods must be chained or built"]
    pub fn min_special_chars(mut self, n: usize) -> Self {
        self.min_special_chars = n;
        self
    }
}

// ============================================================================
// CHARACTER TALLY
// ============================================================================

/// Per-class character counts of a password, computed in one pass.
///
/// Letter and digit classes are ASCII only.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::CharTally;
///
/// let tally = CharTally::of("Pa$$w0rd");
/// assert_eq!(tally.length, 8);
/// assert_eq!(tally.uppercase, 1);
/// assert_eq!(tally.special, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharTally {
    /// Characters in total.
    pub length: usize,
    /// `A-Z`.
    pub uppercase: usize,
    /// `a-z`.
    pub lowercase: usize,
    /// `0-9`.
    pub digits: usize,
    /// Members of [`SPECIAL_CHARS`].
    pub special: usize,
}

impl CharTally {
    /// Counts the characters of `password`.
    #[must_use]
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut tally, c| {
            tally.length += 1;
            if c.is_ascii_uppercase() {
                tally.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                tally.lowercase += 1;
            } else if c.is_ascii_digit() {
                tally.digits += 1;
            } else if SPECIAL_CHARS.contains(&c) {
                tally.special += 1;
            }
            tally
        })
    }
}

// ============================================================================
// RULES
// ============================================================================

fn quota(
    code: &'static str,
    message: String,
    required: usize,
    actual: usize,
) -> Option<ValidationError> {
    (actual < required).then(|| {
        ValidationError::new(code, message)
            .with_field("password")
            .with_param("min", required.to_string())
            .with_param("actual", actual.to_string())
    })
}

fn length(t: &CharTally, o: &PasswordOptions) -> Option<ValidationError> {
    quota(
        "min_length",
        format!("Password must be at least {} characters long.", o.min_length),
        o.min_length,
        t.length,
    )
}

fn uppercase(t: &CharTally, o: &PasswordOptions) -> Option<ValidationError> {
    quota(
        "min_uppercase",
        format!(
            "Password must contain at least {} uppercase letter(s).",
            o.min_uppercase
        ),
        o.min_uppercase,
        t.uppercase,
    )
}

fn lowercase(t: &CharTally, o: &PasswordOptions) -> Option<ValidationError> {
    quota(
        "min_lowercase",
        format!(
            "Password must contain at least {} lowercase letter(s).",
            o.min_lowercase
        ),
        o.min_lowercase,
        t.lowercase,
    )
}

fn numbers(t: &CharTally, o: &PasswordOptions) -> Option<ValidationError> {
    quota(
        "min_numbers",
        format!("Password must contain at least {} number(s).", o.min_numbers),
        o.min_numbers,
        t.digits,
    )
}

fn special(t: &CharTally, o: &PasswordOptions) -> Option<ValidationError> {
    quota(
        "min_special_chars",
        format!(
            "Password must contain at least {} special character(s).",
            o.min_special_chars
        ),
        o.min_special_chars,
        t.special,
    )
}

const RULES: [Rule<CharTally, PasswordOptions>; 5] = [
    Rule::new("length", length),
    Rule::new("uppercase", uppercase),
    Rule::new("lowercase", lowercase),
    Rule::new("numbers", numbers),
    Rule::new("special", special),
];

const RULE_SET: RuleSet<'static, CharTally, PasswordOptions> = RuleSet::new("password", &RULES);

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates password strength against [`PasswordOptions`].
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::{PasswordOptions, StrongPassword};
///
/// let v = StrongPassword::new(PasswordOptions::default());
/// assert!(v.validate("StrongP@ss1").is_ok());
/// assert!(v.validate("weak").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrongPassword {
    options: PasswordOptions,
}

impl StrongPassword {
    /// Creates a validator with the given quotas.
    #[must_use]
    pub fn new(options: PasswordOptions) -> Self {
        Self { options }
    }

    /// The quotas in force.
    #[must_use]
    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    /// Runs every quota rule.
    pub fn check(&self, password: &str) -> ValidationResult {
        RULE_SET.check(&CharTally::of(password), &self.options)
    }
}

impl Validate for StrongPassword {
    type Input = str;

    fn validate(&self, password: &str) -> Result<(), ValidationError> {
        RULE_SET.validate(&CharTally::of(password), &self.options)
    }
}

/// Checks a password against the given quotas.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{PasswordOptions, is_strong_password};
///
/// let result = is_strong_password("weak", &PasswordOptions::default());
/// assert_eq!(
///     result.errors(),
///     [
///         "Password must be at least 8 characters long.",
///         "Password must contain at least 1 uppercase letter(s).",
///         "Password must contain at least 1 number(s).",
///         "Password must contain at least 1 special character(s).",
///     ]
/// );
/// ```
pub fn is_strong_password(password: &str, options: &PasswordOptions) -> ValidationResult {
    RULE_SET.check(&CharTally::of(password), options)
}

// ============================================================================
// TESTS
// ============================================================================
