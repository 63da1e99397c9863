use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use super::text::to_safe_string;

lazy_static! {
    static ref NUMBER_NOISE: Regex = Regex::new(r"[,$% ]").unwrap();
    static ref NUMERIC: Regex = Regex::new(r"^\d+\.?\d*$").unwrap();
}

/// Removes commas, dollar signs, percent signs and spaces.
///
/// Blank input gives an empty string.
pub fn clean_number_string(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }
    NUMBER_NOISE.replace_all(value, "").into_owned()
}

/// Digits with at most one decimal point. `None` is not numeric.
pub fn is_numeric<T: Display + ?Sized>(value: Option<&T>) -> bool {
    NUMERIC.is_match(&to_safe_string(value, None))
}
