//! Property-based tests for formcheck-validator.

use formcheck_validator::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn username_options() -> impl Strategy<Value = UsernameOptions> {
    (
        0usize..8,
        0usize..40,
        any::<[bool; 6]>(),
        prop::collection::vec("[a-z]{1,6}", 0..3),
    )
        .prop_map(|(min, extra, flags, blacklist)| {
            UsernameOptions::default()
                .min_length(min)
                .max_length(min + extra)
                .allow_spaces(flags[0])
                .allow_dashes(flags[1])
                .allow_underscores(flags[2])
                .allow_periods(flags[3])
                .no_leading_trailing_special_chars(flags[4])
                .no_consecutive_special_chars(flags[5])
                .blacklist(blacklist)
        })
}

fn password_options() -> impl Strategy<Value = PasswordOptions> {
    (0usize..16, 0usize..4, 0usize..4, 0usize..4, 0usize..4).prop_map(
        |(length, upper, lower, numbers, special)| {
            PasswordOptions::none()
                .min_length(length)
                .min_uppercase(upper)
                .min_lowercase(lower)
                .min_numbers(numbers)
                .min_special_chars(special)
        },
    )
}

// ============================================================================
// VALIDITY: valid == errors.is_empty()
// ============================================================================

proptest! {
    #[test]
    fn username_valid_iff_no_errors(s in "[ -~]{0,40}", options in username_options()) {
        let result = validate_username(&s, &options);
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn password_valid_iff_no_errors(s in "\\PC{0,24}", options in password_options()) {
        let result = is_strong_password(&s, &options);
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn username_messages_are_distinct(s in "[ -~]{0,40}", options in username_options()) {
        let result = validate_username(&s, &options);
        let mut seen = std::collections::HashSet::new();
        for message in result.errors() {
            prop_assert!(seen.insert(message.clone()), "duplicate: {}", message);
        }
    }
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x)
// ============================================================================

proptest! {
    #[test]
    fn username_idempotent(s in ".*", options in username_options()) {
        prop_assert_eq!(validate_username(&s, &options), validate_username(&s, &options));
    }

    #[test]
    fn password_idempotent(s in ".*", options in password_options()) {
        prop_assert_eq!(is_strong_password(&s, &options), is_strong_password(&s, &options));
    }

    #[test]
    fn date_idempotent(s in "[0-9/.-]{0,12}") {
        prop_assert_eq!(DateParts::try_parse(&s), DateParts::try_parse(&s));
    }
}

// ============================================================================
// TOTALITY: arbitrary input never panics
// ============================================================================

proptest! {
    #[test]
    fn date_never_panics(s in "\\PC*") {
        let _ = is_date(&s);
    }

    #[test]
    fn date_never_panics_on_numeric_triples(a in any::<i64>(), b in any::<i64>(), c in any::<i64>(), sep in "[/.-]") {
        let _ = is_date(&format!("{a}{sep}{b}{sep}{c}"));
    }

    #[test]
    fn accepted_dates_round_trip_through_iso(y in 1000i32..=9999, m in 1u32..=12, d in 1u32..=28) {
        let input = format!("{d:02}/{m:02}/{y}");
        let parts = DateParts::try_parse(&input).unwrap();
        prop_assert_eq!(parts.to_string(), format!("{y:04}-{m:02}-{d:02}"));
        prop_assert!(is_date(&parts.to_string()));
    }

    #[test]
    fn non_text_json_always_fails(n in any::<i64>(), b in any::<bool>()) {
        for value in [json!(n), json!(b), json!(null), json!([n])] {
            prop_assert!(!is_username(&value, &UsernameOptions::default()).is_valid());
            prop_assert!(date().validate_any(&value).is_err());
            prop_assert!(credit_card().validate_any(&value).is_err());
        }
    }

    #[test]
    fn formats_never_panic(s in "\\PC{0,40}") {
        let _ = is_credit_card(&s);
        let _ = is_email(&s);
        let _ = is_url(&s);
        let _ = is_phone(&s, None);
        let _ = is_phone(&s, Some("US"));
    }
}
