//! Integration tests for formcheck-validator.
//!
//! Each module drives the public API the way a form handler would, mostly
//! through `serde_json::Value` input and JSON-decoded options.

mod date;
mod formats;
mod password;
mod username;
