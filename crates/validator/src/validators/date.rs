//! Calendar date validator with separator-driven field-order disambiguation.
//!
//! Accepted shapes:
//!
//! | separator | order                                                     |
//! |-----------|-----------------------------------------------------------|
//! | `/`       | `DD/MM/YYYY`                                              |
//! | `-`       | `YYYY-MM-DD` when the first field exceeds 31, else `MM-DD-YYYY` |
//! | `.`       | `YYYY.MM.DD` when the first field exceeds 999, else `DD.MM.YYYY` |
//!
//! Exactly one kind of separator may appear. After the order is decided the
//! year must lie in 1000..=9999 and the triple must name a real day of the
//! proleptic Gregorian calendar, so `29/02/2021` fails while `29/02/2020`
//! passes.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::foundation::{Validate, ValidationError, json_type_name};

const YEARS: std::ops::RangeInclusive<i64> = 1000..=9999;
const MONTHS: std::ops::RangeInclusive<i64> = 1..=12;
const DAYS: std::ops::RangeInclusive<i64> = 1..=31;

// ============================================================================
// SEPARATOR AND ORDER
// ============================================================================

/// The character splitting the three date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`
    Slash,
    /// `-`
    Dash,
    /// `.`
    Dot,
}

impl Separator {
    /// Every recognised separator.
    pub const ALL: [Self; 3] = [Self::Slash, Self::Dash, Self::Dot];

    /// The separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Dash => '-',
            Self::Dot => '.',
        }
    }

    /// Finds the single separator used in `text`.
    fn sole_in(text: &str) -> Result<Self, DateError> {
        let mut present = Self::ALL
            .into_iter()
            .filter(|sep| text.contains(sep.as_char()));
        match (present.next(), present.next()) {
            (Some(sep), None) => Ok(sep),
            (None, _) => Err(DateError::MissingSeparator),
            (Some(_), Some(_)) => Err(DateError::MixedSeparators),
        }
    }
}

/// The field order a date string was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrder {
    /// Day, month, year.
    Dmy,
    /// Month, day, year.
    Mdy,
    /// Year, month, day.
    Ymd,
}

impl DateOrder {
    /// Picks the order for three numeric fields split on `separator`.
    fn resolve(separator: Separator, first: i64, second: i64, third: i64) -> Result<Self, DateError> {
        match separator {
            Separator::Slash => Ok(Self::Dmy),
            Separator::Dash => {
                if first > 31 && MONTHS.contains(&second) && DAYS.contains(&third) {
                    Ok(Self::Ymd)
                } else if MONTHS.contains(&first) && DAYS.contains(&second) && YEARS.contains(&third)
                {
                    Ok(Self::Mdy)
                } else {
                    Err(DateError::UnknownOrder {
                        first,
                        second,
                        third,
                    })
                }
            }
            Separator::Dot => Ok(if first > 999 { Self::Ymd } else { Self::Dmy }),
        }
    }

    /// Rearranges fields into `(year, month, day)`.
    fn arrange(self, first: i64, second: i64, third: i64) -> (i64, i64, i64) {
        match self {
            Self::Dmy => (third, second, first),
            Self::Mdy => (third, first, second),
            Self::Ymd => (first, second, third),
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Why a string was not accepted as a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The input was not text.
    #[error("date must be a string, but received {actual}")]
    NotText {
        /// JSON type name of the input.
        actual: &'static str,
    },

    /// None of `/`, `-`, `.` occurs.
    #[error("no date separator ('/', '-' or '.') found")]
    MissingSeparator,

    /// More than one kind of separator occurs.
    #[error("date mixes separators")]
    MixedSeparators,

    /// Splitting did not yield three fields.
    #[error("expected 3 date fields, found {found}")]
    FieldCount {
        /// How many fields the split produced.
        found: usize,
    },

    /// A field is not an integer.
    #[error("date field '{field}' is not an integer")]
    NotAnInteger {
        /// The offending field.
        field: String,
    },

    /// A dash-separated date fits neither `YYYY-MM-DD` nor `MM-DD-YYYY`.
    #[error("cannot determine the field order of {first}-{second}-{third}")]
    UnknownOrder {
        /// First field.
        first: i64,
        /// Second field.
        second: i64,
        /// Third field.
        third: i64,
    },

    /// Year outside 1000..=9999.
    #[error("year {0} is outside 1000..=9999")]
    YearOutOfRange(i64),

    /// Month outside 1..=12.
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(i64),

    /// Day below 1.
    #[error("day {0} is below 1")]
    DayOutOfRange(i64),

    /// The day does not exist in that month and year.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NotOnCalendar {
        /// Year.
        year: i64,
        /// Month.
        month: i64,
        /// Day.
        day: i64,
    },
}

impl DateError {
    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotText { .. } => "type_mismatch",
            Self::MissingSeparator => "missing_separator",
            Self::MixedSeparators => "mixed_separators",
            Self::FieldCount { .. } => "field_count",
            Self::NotAnInteger { .. } => "not_an_integer",
            Self::UnknownOrder { .. } => "unknown_order",
            Self::YearOutOfRange(_) => "year_out_of_range",
            Self::MonthOutOfRange(_) => "month_out_of_range",
            Self::DayOutOfRange(_) => "day_out_of_range",
            Self::NotOnCalendar { .. } => "not_on_calendar",
        }
    }
}

impl From<DateError> for ValidationError {
    fn from(error: DateError) -> Self {
        ValidationError::new("invalid_date", error.to_string()).with_param("reason", error.code())
    }
}

// ============================================================================
// DATE PARTS
// ============================================================================

/// A date that passed disambiguation and calendar checks.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::{DateOrder, DateParts};
///
/// let parts: DateParts = "12-25-2020".parse().unwrap();
/// assert_eq!(parts.order(), DateOrder::Mdy);
/// assert_eq!((parts.year(), parts.month(), parts.day()), (2020, 12, 25));
/// assert_eq!(parts.to_string(), "2020-12-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    date: NaiveDate,
    order: DateOrder,
}

impl DateParts {
    /// Parses `text`, returning `None` on any failure.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::try_parse(text).ok()
    }

    /// Parses `text`, reporting which check rejected it.
    pub fn try_parse(text: &str) -> Result<Self, DateError> {
        disambiguate(text).inspect_err(|error| {
            tracing::trace!(input = text, code = error.code(), %error, "date rejected");
        })
    }

    /// Parses a dynamically typed value; non-text input is rejected.
    pub fn try_from_value(value: &Value) -> Result<Self, DateError> {
        match value {
            Value::String(text) => Self::try_parse(text),
            other => Err(DateError::NotText {
                actual: json_type_name(other),
            }),
        }
    }

    /// Four-digit year.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.date.year() as u16
    }

    /// Month, 1..=12.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.date.month() as u8
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date.day() as u8
    }

    /// The field order the input was read in.
    #[must_use]
    pub fn order(&self) -> DateOrder {
        self.order
    }

    /// The date as a `chrono` value.
    #[must_use]
    pub fn to_naive_date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for DateParts {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// Surrounding whitespace is ignored; an empty field is not an integer.
fn parse_field(field: &str) -> Result<i64, DateError> {
    field.trim().parse().map_err(|_| DateError::NotAnInteger {
        field: field.to_owned(),
    })
}

fn disambiguate(text: &str) -> Result<DateParts, DateError> {
    let separator = Separator::sole_in(text)?;

    let mut fields = text.split(separator.as_char());
    let (Some(first), Some(second), Some(third), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(DateError::FieldCount {
            found: text.split(separator.as_char()).count(),
        });
    };
    let (first, second, third) = (parse_field(first)?, parse_field(second)?, parse_field(third)?);

    let order = DateOrder::resolve(separator, first, second, third)?;
    let (year, month, day) = order.arrange(first, second, third);

    if !YEARS.contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    if !MONTHS.contains(&month) {
        return Err(DateError::MonthOutOfRange(month));
    }
    if day < 1 {
        return Err(DateError::DayOutOfRange(day));
    }

    u32::try_from(day)
        .ok()
        .and_then(|d| NaiveDate::from_ymd_opt(year as i32, month as u32, d))
        .map(|date| DateParts { date, order })
        .ok_or(DateError::NotOnCalendar { year, month, day })
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates date strings; see the module docs for accepted shapes.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::Validate;
/// use formcheck_validator::validators::date;
/// use serde_json::json;
///
/// assert!(date().validate("25/12/2020").is_ok());
/// assert!(date().validate("31/02/2020").is_err());
/// assert!(date().validate_any(&json!(12345)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date;

impl Validate for Date {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        DateParts::try_parse(input)
            .map(drop)
            .map_err(ValidationError::from)
    }
}

/// Creates a [`Date`] validator.
#[must_use]
pub const fn date() -> Date {
    Date
}

/// Returns `true` if `input` is a valid date in one of the accepted shapes.
///
/// # Examples
///
/// ```
/// use formcheck_validator::validators::is_date;
///
/// assert!(is_date("2020-02-29"));
/// assert!(!is_date("2021-02-29"));
/// assert!(!is_date("2020/12.25"));
/// ```
#[must_use]
pub fn is_date(input: &str) -> bool {
    DateParts::parse(input).is_some()
}

// ============================================================================
// TESTS
// ============================================================================
