use formcheck_validator::prelude::*;
use serde_json::json;

#[test]
fn accepts_each_supported_shape() {
    for input in ["25/12/2020", "12-25-2020", "2020-12-25", "2020.12.25", "02.07.2025"] {
        assert!(is_date(input), "{input}");
    }
}

#[test]
fn rejects_impossible_or_malformed_dates() {
    for input in ["31/02/2020", "2020/12.25", "25/12", "", "25/13/2020", "32/01/2020", "2020/25/12"] {
        assert!(!is_date(input), "{input}");
    }
}

#[test]
fn padded_fields_are_trimmed() {
    for input in [" 25/12/2020", "25 / 12 / 2020", "2020-12-25 "] {
        assert!(is_date(input), "{input}");
    }
    assert!(!is_date("25/ /2020"));
}

#[test]
fn leap_years() {
    assert!(is_date("2020-02-29"));
    assert!(!is_date("2021-02-29"));
}

#[test]
fn dash_order_follows_magnitude() {
    let mdy: DateParts = "12-25-2020".parse().unwrap();
    assert_eq!(mdy.order(), DateOrder::Mdy);
    let ymd: DateParts = "2020-12-25".parse().unwrap();
    assert_eq!(ymd.order(), DateOrder::Ymd);
    assert_eq!(mdy.to_naive_date(), ymd.to_naive_date());
}

#[test]
fn json_input_goes_through_the_guard() {
    assert!(date().validate_any(&json!("25/12/2020")).is_ok());
    assert!(date().validate_any(&json!(20_201_225)).is_err());
    assert_eq!(
        DateParts::try_from_value(&json!(true)),
        Err(DateError::NotText { actual: "boolean" })
    );
}
