use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn weak_password_lists_every_failure_in_order() {
    let result = is_strong_password("weak", &PasswordOptions::default());
    assert_eq!(
        result.errors(),
        [
            "Password must be at least 8 characters long.",
            "Password must contain at least 1 uppercase letter(s).",
            "Password must contain at least 1 number(s).",
            "Password must contain at least 1 special character(s).",
        ]
    );
}

#[test]
fn strong_password_passes() {
    let result = is_strong_password("StrongP@ss1", &PasswordOptions::default());
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn options_decode_from_json() {
    let options = PasswordOptions::from_json(&json!({ "minLength": 12, "minSpecialChars": 0 }))
        .unwrap();
    let result = is_strong_password("Password1234", &options);
    assert!(result.is_valid(), "{:?}", result.errors());

    let result = is_strong_password("Password1", &options);
    assert_eq!(result.errors(), ["Password must be at least 12 characters long."]);
}

#[test]
fn validator_rejects_non_text() {
    let err = StrongPassword::default().validate_any(&json!(12_345_678)).unwrap_err();
    assert_eq!(err.code, "type_mismatch");
}
