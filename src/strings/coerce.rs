use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use rust_decimal::Decimal;

use super::clean::clean_number_string;
use crate::config::CoercionConfig;

lazy_static! {
    static ref DEFAULT_COERCION: CoercionConfig = CoercionConfig::default();
}

/// `true`/`false` in any case, or the byte values `1`/`0`.
///
/// Blank input, other bytes (`"9"`) and anything unparseable give `None`.
pub fn to_boolean(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match trimmed.parse::<u8>() {
        Ok(0) => Some(false),
        Ok(1) => Some(true),
        _ => None,
    }
}

/// Plain `i32` parse. Currency formatting is not removed, so `"1,000"` gives `None`.
pub fn to_integer(value: &str) -> Option<i32> {
    if value.is_empty() {
        return None;
    }
    value.trim().parse().ok()
}

/// Parses after [`clean_number_string`], so `"$1,000.25"` gives `1000.25`.
pub fn to_decimal(value: &str) -> Option<Decimal> {
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(&clean_number_string(value)).ok()
}

pub fn to_date_time(value: &str) -> Option<NaiveDateTime> {
    to_date_time_with(value, &DEFAULT_COERCION)
}

/// RFC 3339 first, then each configured date-time format, then each date-only
/// format at midnight. Offsets in RFC 3339 input are dropped, keeping the wall clock.
pub fn to_date_time_with(value: &str, config: &CoercionConfig) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    config
        .date_time_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            config
                .date_formats
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
