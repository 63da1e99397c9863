use std::fmt::Display;

pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

pub fn is_null_or_whitespace(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Returns `default` when `value` is missing or empty. With `whitespace_is_empty`
/// a whitespace-only value counts as empty too.
pub fn default_if_empty<'a>(
    value: Option<&'a str>,
    default: &'a str,
    whitespace_is_empty: bool,
) -> &'a str {
    let empty = if whitespace_is_empty {
        is_null_or_whitespace(value)
    } else {
        is_null_or_empty(value)
    };
    match value {
        Some(v) if !empty => v,
        _ => default,
    }
}

/// Splits on the literal `separator`, dropping empty segments.
///
/// A blank value or blank separator gives `None` rather than an empty list.
pub fn to_list(value: Option<&str>, separator: &str) -> Option<Vec<String>> {
    if is_null_or_whitespace(Some(separator)) || is_null_or_whitespace(value) {
        return None;
    }
    let value = value?;
    Some(
        value
            .split(separator)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Null-safe `to_string`. Missing values, and values whose text is empty, give
/// `default` (or `""` when no default is supplied).
pub fn to_safe_string<T: Display + ?Sized>(value: Option<&T>, default: Option<&str>) -> String {
    match value.map(ToString::to_string) {
        Some(text) if !text.is_empty() => text,
        _ => default.unwrap_or_default().to_string(),
    }
}
