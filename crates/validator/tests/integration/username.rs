use formcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn check(input: serde_json::Value, options: serde_json::Value) -> ValidationResult {
    let options = UsernameOptions::from_json(&options).unwrap();
    is_username(&input, &options)
}

#[test]
fn defaults_accept_plain_names() {
    for name in ["john_doe", "jane.doe", "user-123", "abc"] {
        let result = check(json!(name), json!(null));
        assert!(result.is_valid(), "{name}: {:?}", result.errors());
    }
}

#[test]
fn leading_special_respects_flag() {
    let result = check(json!("_username"), json!({ "noLeadingTrailingSpecialChars": false }));
    assert!(result.is_valid());

    let result = check(json!("_username"), json!({}));
    assert_eq!(
        result.errors(),
        ["Cannot start or end with a special character or space."]
    );
}

#[test]
fn consecutive_specials_are_reported() {
    let result = check(json!("user--name"), json!(null));
    assert!(
        result
            .errors()
            .contains(&"Cannot contain consecutive special characters.".to_owned())
    );
}

#[test]
fn blacklist_is_case_insensitive() {
    let result = check(json!("Admin"), json!({ "blacklist": ["admin", "root"] }));
    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["Is reserved or not allowed."]);
}

#[test]
fn non_text_input_is_a_single_message() {
    for value in [json!(123), json!(null), json!(["a"]), json!({ "name": "x" })] {
        let result = check(value, json!(null));
        assert_eq!(result.errors(), [NOT_A_STRING]);
    }
}

#[test]
fn spaces_suppress_disallowed_chars() {
    let result = check(json!("john doe"), json!(null));
    assert_eq!(result.errors(), ["Cannot contain spaces."]);
}

#[test]
fn unknown_option_key_is_rejected() {
    let err = UsernameOptions::from_json(&json!({ "maxLenght": 5 })).unwrap_err();
    assert_eq!(err.validator(), "username");
}

#[test]
fn result_serializes_to_report_shape() {
    let result = check(json!("ab"), json!(null));
    let report = serde_json::to_value(&result).unwrap();
    assert_eq!(
        report,
        json!({ "valid": false, "errors": ["Must be at least 3 characters long."] })
    );
}

#[test]
fn validate_any_folds_errors() {
    let username = Username::default();
    assert!(username.validate_any(&json!("alice")).is_ok());
    let err = username.validate_any(&json!("a")).unwrap_err();
    assert_eq!(err.code, "username");
    let err = username.validate_any(&json!(1)).unwrap_err();
    assert_eq!(err.code, "type_mismatch");
}
