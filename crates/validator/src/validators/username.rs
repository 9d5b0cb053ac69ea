//! Username policy validator.
//!
//! Checks a username against a configurable policy: length bounds, which
//! structural characters (`-`, `_`, `.`, space) are allowed, whether they may
//! lead, trail or repeat, and a case-insensitive reserved-name list. Every
//! rule runs; each distinct failure message is reported once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::engine::{Rule, RuleSet};
use crate::foundation::{Validate, ValidationError, ValidationResult, guard};
use crate::options::{self, OptionsError};

/// Field name reported by the type guard.
const FIELD: &str = "Username";

/// Message used when the input is not text at all.
pub const NOT_A_STRING: &str = "Must be a string.";

// ============================================================================
// OPTIONS
// ============================================================================

/// Username policy.
///
/// Defaults: length 3..=30, dashes, underscores and periods allowed, spaces
/// rejected, no leading/trailing or consecutive structural characters, empty
/// blacklist.
///
/// Decodes from camelCase JSON (`minLength`, `allowSpaces`,
/// `noLeadingTrailingSpecialChars`, ...) with missing keys taking defaults.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::UsernameOptions;
/// use serde_json::json;
///
/// let built = UsernameOptions::default().allow_spaces(true).max_length(20);
/// let decoded =
///     UsernameOptions::from_json(&json!({ "allowSpaces": true, "maxLength": 20 })).unwrap();
/// assert_eq!(built, decoded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct UsernameOptions {
    min_length: usize,
    max_length: usize,
    allow_spaces: bool,
    allow_dashes: bool,
    allow_underscores: bool,
    allow_periods: bool,
    no_leading_trailing_special_chars: bool,
    no_consecutive_special_chars: bool,
    blacklist: Vec<String>,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 30,
            allow_spaces: false,
            allow_dashes: true,
            allow_underscores: true,
            allow_periods: true,
            no_leading_trailing_special_chars: true,
            no_consecutive_special_chars: true,
            blacklist: Vec::new(),
        }
    }
}

impl UsernameOptions {
    /// Decodes options from JSON, merging present keys over the defaults.
    pub fn from_json(value: &Value) -> Result<Self, OptionsError> {
        options::decode("username", value)
    }

    /// Minimum length of the trimmed username, in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Maximum length of the trimmed username, in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Allow spaces inside the username.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_spaces(mut self, allow: bool) -> Self {
        self.allow_spaces = allow;
        self
    }

    /// Allow `-`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_dashes(mut self, allow: bool) -> Self {
        self.allow_dashes = allow;
        self
    }

    /// Allow `_`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_underscores(mut self, allow: bool) -> Self {
        self.allow_underscores = allow;
        self
    }

    /// Allow `.`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_periods(mut self, allow: bool) -> Self {
        self.allow_periods = allow;
        self
    }

    /// Reject usernames that start or end with a structural character.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_leading_trailing_special_chars(mut self, enabled: bool) -> Self {
        self.no_leading_trailing_special_chars = enabled;
        self
    }

    /// Reject runs of two or more of `-`, `_`, `.`.
    #[must_use = "builder methods must be chained or built"]
    pub fn no_consecutive_special_chars(mut self, enabled: bool) -> Self {
        self.no_consecutive_special_chars = enabled;
        self
    }

    /// Reserved names, matched case-insensitively against the trimmed input.
    #[must_use = "builder methods must be chained or built"]
    pub fn blacklist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = names.into_iter().map(Into::into).collect();
        self
    }

    /// The character set these options permit.
    #[must_use]
    pub fn allowed_chars(&self) -> AllowedChars {
        let mut extras = SmallVec::new();
        if self.allow_dashes {
            extras.push('-');
        }
        if self.allow_underscores {
            extras.push('_');
        }
        if self.allow_periods {
            extras.push('.');
        }
        if self.allow_spaces {
            extras.push(' ');
        }
        AllowedChars { extras }
    }
}

// ============================================================================
// ALLOWED CHARACTERS
// ============================================================================

/// ASCII letters and digits plus the structural characters enabled in
/// [`UsernameOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedChars {
    extras: SmallVec<[char; 4]>,
}

impl AllowedChars {
    /// Whether `c` may appear in a username.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.extras.contains(&c)
    }

    /// The enabled characters beyond ASCII alphanumerics.
    #[must_use]
    pub fn extras(&self) -> &[char] {
        &self.extras
    }
}

/// `-`, `_` or `.`.
fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

// ============================================================================
// RULES
// ============================================================================

/// The raw input alongside its trimmed form.
struct Candidate<'a> {
    raw: &'a str,
    trimmed: &'a str,
}

impl<'a> Candidate<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            trimmed: raw.trim(),
        }
    }

    fn len(&self) -> usize {
        self.trimmed.chars().count()
    }
}

fn too_short(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    let len = c.len();
    (len < o.min_length).then(|| {
        ValidationError::new(
            "min_length",
            format!("Must be at least {} characters long.", o.min_length),
        )
        .with_field(FIELD)
        .with_param("min", o.min_length.to_string())
        .with_param("actual", len.to_string())
    })
}

fn too_long(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    let len = c.len();
    (len > o.max_length).then(|| {
        ValidationError::new(
            "max_length",
            format!("Cannot exceed {} characters.", o.max_length),
        )
        .with_field(FIELD)
        .with_param("max", o.max_length.to_string())
        .with_param("actual", len.to_string())
    })
}

fn empty(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    (c.trimmed.is_empty() && o.min_length > 0)
        .then(|| ValidationError::new("empty", "Cannot be empty.").with_field(FIELD))
}

/// Looks at the untrimmed input: padding spaces count too.
fn has_forbidden_space(c: &Candidate<'_>, o: &UsernameOptions) -> bool {
    !o.allow_spaces && c.raw.contains(' ')
}

fn spaces(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    has_forbidden_space(c, o)
        .then(|| ValidationError::new("spaces", "Cannot contain spaces.").with_field(FIELD))
}

// Silent when the spaces rule already fired for this input.
fn disallowed_chars(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    if has_forbidden_space(c, o) {
        return None;
    }
    let allowed = o.allowed_chars();
    c.trimmed
        .chars()
        .find(|&ch| !allowed.contains(ch))
        .map(|ch| {
            ValidationError::new("disallowed_chars", "Contains disallowed characters.")
                .with_field(FIELD)
                .with_param("char", ch.to_string())
        })
}

fn leading_trailing(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    if !o.no_leading_trailing_special_chars {
        return None;
    }
    let structural = |ch: char| ch.is_whitespace() || is_separator(ch);
    let starts = c.trimmed.chars().next().is_some_and(structural);
    let ends = c.trimmed.chars().next_back().is_some_and(structural);
    (starts || ends).then(|| {
        ValidationError::new(
            "leading_trailing_special",
            "Cannot start or end with a special character or space.",
        )
        .with_field(FIELD)
    })
}

fn consecutive(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    if !o.no_consecutive_special_chars {
        return None;
    }
    let mut previous = false;
    let repeated = c.trimmed.chars().any(|ch| {
        let current = is_separator(ch);
        let run = previous && current;
        previous = current;
        run
    });
    repeated.then(|| {
        ValidationError::new(
            "consecutive_special",
            "Cannot contain consecutive special characters.",
        )
        .with_field(FIELD)
    })
}

fn reserved(c: &Candidate<'_>, o: &UsernameOptions) -> Option<ValidationError> {
    if o.blacklist.is_empty() {
        return None;
    }
    let lowered = c.trimmed.to_lowercase();
    o.blacklist
        .iter()
        .any(|name| name.to_lowercase() == lowered)
        .then(|| ValidationError::new("reserved", "Is reserved or not allowed.").with_field(FIELD))
}

fn rules<'a>() -> [Rule<Candidate<'a>, UsernameOptions>; 8] {
    [
        Rule::new("min_length", too_short),
        Rule::new("max_length", too_long),
        Rule::new("empty", empty),
        Rule::new("spaces", spaces),
        Rule::new("disallowed_chars", disallowed_chars),
        Rule::new("leading_trailing", leading_trailing),
        Rule::new("consecutive", consecutive),
        Rule::new("reserved", reserved),
    ]
}

// ============================================================================
// USERNAME VALIDATOR
// ============================================================================

/// Validates usernames against a [`UsernameOptions`] policy.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{Username, UsernameOptions};
///
/// let v = Username::new(UsernameOptions::default());
/// assert!(v.check("john_doe123").is_valid());
///
/// let result = v.check("user--name");
/// assert!(result
///     .errors()
///     .iter()
///     .any(|e| e == "Cannot contain consecutive special characters."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Username {
    options: UsernameOptions,
}

impl Username {
    /// Creates a validator for the given policy.
    #[must_use]
    pub fn new(options: UsernameOptions) -> Self {
        Self { options }
    }

    /// The policy in force.
    #[must_use]
    pub fn options(&self) -> &UsernameOptions {
        &self.options
    }

    /// Runs every rule against `input`.
    pub fn check(&self, input: &str) -> ValidationResult {
        validate_username(input, &self.options)
    }

    /// Runs the type guard, then every rule.
    ///
    /// Non-text input fails with the single message [`NOT_A_STRING`].
    pub fn check_value(&self, input: &Value) -> ValidationResult {
        is_username(input, &self.options)
    }
}

impl Validate for Username {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let rules = rules();
        RuleSet::new("username", &rules).validate(&Candidate::new(input), &self.options)
    }
}

/// Validates a dynamically typed username.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{UsernameOptions, is_username};
/// use serde_json::json;
///
/// let options = UsernameOptions::default().blacklist(["admin"]);
/// let result = is_username(&json!("Admin"), &options);
/// assert_eq!(result.errors(), ["Is reserved or not allowed."]);
///
/// let result = is_username(&json!(123), &UsernameOptions::default());
/// assert_eq!(result.errors(), ["Must be a string."]);
/// ```
pub fn is_username(input: &Value, options: &UsernameOptions) -> ValidationResult {
    match guard::as_text(input, FIELD) {
        Ok(text) => validate_username(text, options),
        Err(error) => {
            tracing::debug!(
                validator = "username",
                actual = error.param("actual").unwrap_or_default(),
                "non-text username"
            );
            ValidationResult::from_messages([NOT_A_STRING])
        }
    }
}

/// Validates a username that is already known to be text.
pub fn validate_username(input: &str, options: &UsernameOptions) -> ValidationResult {
    let rules = rules();
    RuleSet::new("username", &rules).check(&Candidate::new(input), options)
}

// ============================================================================
// TESTS
// ============================================================================
