//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Results**: [`ValidationResult`], the `{ valid, errors }` report
//! - **Guard**: [`guard`], the string-type check for dynamically typed input
//! - **Conversion**: [`AsValidatable`], letting one validator accept
//!   `&str`, `String`, `Cow<str>` and `serde_json::Value`
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::foundation::{Validate, ValidationError};
//!
//! struct NoDigits;
//!
//! impl Validate for NoDigits {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.chars().any(|c| c.is_ascii_digit()) {
//!             Err(ValidationError::new("digits", "Must not contain digits."))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NoDigits.validate("abc").is_ok());
//! assert!(NoDigits.validate("a1").is_err());
//! ```

pub mod error;
pub mod guard;
pub mod result;
pub mod traits;
pub mod validatable;

pub use error::{ValidationError, ValidationErrors};
pub use result::ValidationResult;
pub use traits::Validate;
pub use validatable::{AsValidatable, json_type_name};
