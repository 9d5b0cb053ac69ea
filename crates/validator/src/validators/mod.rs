//! Built-in validators
//!
//! # Categories
//!
//! - **Rule sets**: [`Username`], [`StrongPassword`], which report every
//!   failed rule as a [`ValidationResult`](crate::foundation::ValidationResult)
//! - **Dates**: [`Date`], with separator-driven field-order disambiguation
//! - **Formats**: [`CreditCard`], [`Email`], [`Url`], [`Phone`], [`Equals`]
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validators::{
//!     PasswordOptions, is_date, is_email, is_strong_password,
//! };
//!
//! assert!(is_date("25/12/2020"));
//! assert!(is_email("test@example.com"));
//!
//! let report = is_strong_password("weak", &PasswordOptions::default());
//! assert_eq!(report.errors().len(), 4);
//! ```

// Rule sets
pub mod password;
pub mod username;

// Dates
pub mod date;

// Formats
pub mod content;
pub mod credit_card;
pub mod phone;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use password::{
    CharTally, PasswordOptions, SPECIAL_CHARS, StrongPassword, is_strong_password,
};
pub use username::{
    AllowedChars, NOT_A_STRING, Username, UsernameOptions, is_username, validate_username,
};

pub use date::{Date, DateError, DateOrder, DateParts, Separator, date, is_date};

pub use content::{Email, Equals, Url, email, equals, is_email, is_equal, is_url, url};
pub use credit_card::{CreditCard, credit_card, is_credit_card};
pub use phone::{Phone, is_phone};
