//! # formcheck-validator
//!
//! Validators for user-supplied form strings: usernames, passwords, dates,
//! and common formats.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let report = is_username(&json!("user--name"), &UsernameOptions::default());
//! assert!(!report.is_valid());
//! assert_eq!(report.errors(), ["Cannot contain consecutive special characters."]);
//!
//! assert!(is_date("12-25-2020"));
//! assert!(credit_card().validate("4111 1111 1111 1111").is_ok());
//! ```
//!
//! ## Two Result Shapes
//!
//! Rule sets ([`Username`](validators::Username),
//! [`StrongPassword`](validators::StrongPassword)) run every rule and return
//! a [`ValidationResult`](foundation::ValidationResult) listing each distinct
//! message once. Single-purpose validators implement
//! [`Validate`](foundation::Validate) and stop at the first
//! [`ValidationError`](foundation::ValidationError). Rule sets implement
//! `Validate` too, folding their messages into one error.
//!
//! ## Dynamically Typed Input
//!
//! Every validator accepts `serde_json::Value` through
//! [`Validate::validate_any`](foundation::Validate::validate_any). Anything
//! other than a JSON string is rejected with a `type_mismatch` error instead
//! of a panic.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or the
//! [`engine`] module for rule sets that accumulate errors.

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod engine;
pub mod foundation;
mod macros;
pub mod options;
pub mod prelude;
pub mod validators;
