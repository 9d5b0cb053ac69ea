//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck_validator::prelude::*;` import that brings
//! in the traits, result types, and every built-in validator.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let options = PasswordOptions::default().min_special_chars(0);
//! assert!(is_strong_password("Password123", &options).is_valid());
//! assert!(is_phone("+14155552671", None));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, results
// ============================================================================

pub use crate::foundation::{
    AsValidatable, Validate, ValidationError, ValidationErrors, ValidationResult,
};

// ============================================================================
// ENGINE AND OPTIONS
// ============================================================================

pub use crate::engine::{Rule, RuleSet};
pub use crate::options::OptionsError;

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
