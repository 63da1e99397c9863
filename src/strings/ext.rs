use std::fmt::Display;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::{clean, coerce, text};

/// Method-call sugar over the free functions in [`crate::strings`].
pub trait StrExt {
    fn to_boolean(&self) -> Option<bool>;
    fn to_integer(&self) -> Option<i32>;
    fn to_decimal(&self) -> Option<Decimal>;
    fn to_date_time(&self) -> Option<NaiveDateTime>;
    fn clean_number_string(&self) -> String;
    fn to_list(&self, separator: &str) -> Option<Vec<String>>;
    fn is_blank(&self) -> bool;
    fn is_numeric(&self) -> bool;
    fn default_if_empty<'a>(&'a self, default: &'a str, whitespace_is_empty: bool) -> &'a str;
}

impl StrExt for str {
    fn to_boolean(&self) -> Option<bool> {
        coerce::to_boolean(self)
    }

    fn to_integer(&self) -> Option<i32> {
        coerce::to_integer(self)
    }

    fn to_decimal(&self) -> Option<Decimal> {
        coerce::to_decimal(self)
    }

    fn to_date_time(&self) -> Option<NaiveDateTime> {
        coerce::to_date_time(self)
    }

    fn clean_number_string(&self) -> String {
        clean::clean_number_string(self)
    }

    fn to_list(&self, separator: &str) -> Option<Vec<String>> {
        text::to_list(Some(self), separator)
    }

    fn is_blank(&self) -> bool {
        text::is_null_or_whitespace(Some(self))
    }

    fn is_numeric(&self) -> bool {
        clean::is_numeric(Some(self))
    }

    fn default_if_empty<'a>(&'a self, default: &'a str, whitespace_is_empty: bool) -> &'a str {
        text::default_if_empty(Some(self), default, whitespace_is_empty)
    }
}

/// Null-safe stringification for optional values.
pub trait SafeString {
    fn to_safe_string(&self) -> String;
    fn to_safe_string_or(&self, default: &str) -> String;
}

impl<T: Display> SafeString for Option<T> {
    fn to_safe_string(&self) -> String {
        text::to_safe_string(self.as_ref(), None)
    }

    fn to_safe_string_or(&self, default: &str) -> String {
        text::to_safe_string(self.as_ref(), Some(default))
    }
}
