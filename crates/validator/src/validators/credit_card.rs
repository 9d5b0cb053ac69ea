//! Payment card number validator.
//!
//! Issuer prefix, issuer length, and the Luhn checksum are checked by
//! `card-validate`.

use crate::foundation::{Validate, ValidationError};

const CARD_DIGITS: std::ops::RangeInclusive<usize> = 13..=19;

/// Digits of a card number with whitespace and dashes removed.
///
/// Returns `None` if anything other than ASCII digits, whitespace, or dashes
/// occurs, or if the digit count is outside 13..=19.
fn card_digits(input: &str) -> Option<String> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    (digits.bytes().all(|b| b.is_ascii_digit()) && CARD_DIGITS.contains(&digits.len()))
        .then_some(digits)
}

fn is_known_card(digits: &str) -> bool {
    card_validate::Validate::from(digits).is_ok()
}

crate::validator! {
    /// Validates payment card numbers.
    ///
    /// Whitespace and dashes are ignored. The remaining 13 to 19 characters
    /// must be digits forming a number of a recognised issuer that passes the
    /// Luhn checksum.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::Validate;
    /// use formcheck_validator::validators::credit_card;
    ///
    /// assert!(credit_card().validate("4111 1111 1111 1111").is_ok());
    /// assert!(credit_card().validate("4111 1111 1111 1112").is_err());
    /// ```
    pub CreditCard for str;
    rule(input) { card_digits(input).is_some_and(|digits| is_known_card(&digits)) }
    error(input) { ValidationError::invalid_format("credit card") }
    fn credit_card();
}

/// Returns `true` if `input` is a valid payment card number.
#[must_use]
pub fn is_credit_card(input: &str) -> bool {
    credit_card().is_valid(input)
}
