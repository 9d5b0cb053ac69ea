//! Rule engine shared by the policy validators.
//!
//! A [`RuleSet`] is an ordered list of named, pure predicates over an input
//! and a configuration. Evaluation runs every rule (no short-circuit),
//! collects the error of each failing rule, and drops errors whose message
//! was already reported. Rule order decides message order, never validity.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::engine::{Rule, RuleSet};
//! use formcheck_validator::foundation::ValidationError;
//!
//! struct Limits {
//!     max: usize,
//! }
//!
//! fn not_blank(input: &str, _: &Limits) -> Option<ValidationError> {
//!     input.trim().is_empty().then(|| ValidationError::new("blank", "Cannot be blank."))
//! }
//!
//! fn short_enough(input: &str, limits: &Limits) -> Option<ValidationError> {
//!     (input.len() > limits.max).then(|| ValidationError::new("too_long", "Too long."))
//! }
//!
//! let rules: [Rule<str, Limits>; 2] = [
//!     Rule::new("not_blank", not_blank),
//!     Rule::new("short_enough", short_enough),
//! ];
//! let set = RuleSet::new("comment", &rules);
//!
//! let result = set.check("   ", &Limits { max: 2 });
//! assert_eq!(result.errors(), ["Cannot be blank.", "Too long."]);
//! ```

use std::fmt;

use crate::foundation::{ValidationError, ValidationErrors, ValidationResult};

// ============================================================================
// RULE
// ============================================================================

/// A named, stateless predicate contributing at most one error.
///
/// The predicate returns `None` when the rule holds.
pub struct Rule<I: ?Sized, C> {
    name: &'static str,
    check: fn(&I, &C) -> Option<ValidationError>,
}

impl<I: ?Sized, C> Rule<I, C> {
    /// Creates a rule from a name and a predicate.
    pub const fn new(name: &'static str, check: fn(&I, &C) -> Option<ValidationError>) -> Self {
        Self { name, check }
    }

    /// The rule's name, used in logs.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the predicate.
    #[inline]
    pub fn check(&self, input: &I, config: &C) -> Option<ValidationError> {
        (self.check)(input, config)
    }
}

impl<I: ?Sized, C> Clone for Rule<I, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, C> Copy for Rule<I, C> {}

impl<I: ?Sized, C> fmt::Debug for Rule<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered list of rules evaluated together.
pub struct RuleSet<'r, I: ?Sized, C> {
    validator: &'static str,
    rules: &'r [Rule<I, C>],
}

impl<'r, I: ?Sized, C> RuleSet<'r, I, C> {
    /// Creates a rule set. `validator` names the set in logs.
    pub const fn new(validator: &'static str, rules: &'r [Rule<I, C>]) -> Self {
        Self { validator, rules }
    }

    /// Number of rules in the set.
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule and returns the distinct errors in rule order.
    pub fn evaluate(&self, input: &I, config: &C) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for rule in self.rules {
            if let Some(error) = rule.check(input, config) {
                tracing::trace!(
                    validator = self.validator,
                    rule = rule.name(),
                    code = %error.code,
                    "rule failed"
                );
                errors.push_unique(error);
            }
        }

        tracing::debug!(
            validator = self.validator,
            rules = self.rules.len(),
            errors = errors.len(),
            "rules evaluated"
        );

        errors
    }

    /// Runs every rule and reports the outcome as a [`ValidationResult`].
    pub fn check(&self, input: &I, config: &C) -> ValidationResult {
        ValidationResult::from(self.evaluate(input, config))
    }

    /// Runs every rule and folds failures into one error with nested causes.
    pub fn validate(&self, input: &I, config: &C) -> Result<(), ValidationError> {
        let errors = self.evaluate(input, config);
        if errors.is_empty() {
            return Ok(());
        }
        let count = errors.len();
        Err(errors.into_single_error(
            self.validator,
            format!("{} failed {count} rule(s)", self.validator),
        ))
    }
}

impl<I: ?Sized, C> fmt::Debug for RuleSet<'_, I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("validator", &self.validator)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Config {
        min: usize,
    }

    fn too_short(input: &str, config: &Config) -> Option<ValidationError> {
        (input.len() < config.min).then(|| ValidationError::new("too_short", "Too short."))
    }

    fn has_digit(input: &str, _: &Config) -> Option<ValidationError> {
        input
            .chars()
            .any(|c| c.is_ascii_digit())
            .then(|| ValidationError::new("digit", "No digits."))
    }

    fn also_too_short(input: &str, config: &Config) -> Option<ValidationError> {
        (input.len() < config.min).then(|| ValidationError::new("again", "Too short."))
    }

    const RULES: [Rule<str, Config>; 3] = [
        Rule::new("too_short", too_short),
        Rule::new("has_digit", has_digit),
        Rule::new("also_too_short", also_too_short),
    ];

    #[test]
    fn test_all_rules_run_in_order() {
        let set = RuleSet::new("test", &RULES[..2]);
        let errors = set.evaluate("a1", &Config { min: 5 });
        let messages: Vec<_> = errors.messages().collect();
        assert_eq!(messages, ["Too short.", "No digits."]);
    }

    #[test]
    fn test_duplicate_messages_collapse() {
        let set = RuleSet::new("test", &RULES);
        let result = set.check("a", &Config { min: 5 });
        assert_eq!(result.errors(), ["Too short."]);
    }

    #[test]
    fn test_passing_input() {
        let set = RuleSet::new("test", &RULES);
        assert!(set.check("abcdef", &Config { min: 3 }).is_valid());
        assert!(set.validate("abcdef", &Config { min: 3 }).is_ok());
    }

    #[test]
    fn test_validate_nests_failures() {
        let set = RuleSet::new("test", &RULES);
        let err = set.validate("a1", &Config { min: 5 }).unwrap_err();
        assert_eq!(err.code, "test");
        assert_eq!(err.nested.len(), 2);
        assert_eq!(err.nested[0].code, "too_short");
        assert_eq!(err.nested[1].code, "digit");
    }

    #[test]
    fn test_empty_set_always_passes() {
        let set: RuleSet<'_, str, Config> = RuleSet::new("empty", &[]);
        assert!(set.is_empty());
        assert!(set.check("", &Config { min: 10 }).is_valid());
    }
}
