use formcheck_validator::prelude::*;
use serde_json::json;

#[test]
fn credit_cards() {
    assert!(is_credit_card("4111 1111 1111 1111"));
    assert!(is_credit_card("5500-0000-0000-0004"));
    assert!(!is_credit_card("4111 1111 1111 1112"));
    assert!(!is_credit_card("0000 0000 0000 0"));
    assert!(credit_card().validate_any(&json!(null)).is_err());
}

#[test]
fn emails() {
    assert!(is_email("test@example.com"));
    assert!(!is_email("test@com"));
}

#[test]
fn urls() {
    assert!(is_url("ftp://ftp.example.com"));
    assert!(!is_url("not-a-url"));
    assert!(url().validate_any(&json!(123)).is_err());
}

#[test]
fn phones() {
    assert!(is_phone("+14155552671", None));
    assert!(is_phone("0961234567", Some("UA")));
    assert!(!is_phone("+123", None));
    assert!(!is_phone("12345", None));
}

#[test]
fn phones_follow_real_numbering_plans() {
    assert!(is_phone("+6591234567", None));
    assert!(is_phone("+81 3-1234-5678", None));
    assert!(!is_phone("+10000000000", None));
    assert!(!is_phone("+11111111111", None));
}

#[test]
fn equality() {
    assert!(is_equal("test", "test"));
    assert!(!is_equal("hello", "world"));
    assert!(equals("test").validate_any(&json!("test")).is_ok());
    assert!(equals("test").validate_any(&json!(1)).is_err());
}

#[test]
fn errors_display_their_message() {
    let err = email().validate("nope").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid_format: Invalid email format (params: [expected=email])"
    );
}
