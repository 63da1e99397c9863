//! Best-effort string helpers: coercion to richer types, numeric cleanup,
//! blank checks, splitting and null-safe stringification.
//!
//! Coercions never fail; invalid input yields `None`.

pub mod clean;
pub mod coerce;
pub mod ext;
pub mod text;

pub use clean::{clean_number_string, is_numeric};
pub use coerce::{to_boolean, to_date_time, to_date_time_with, to_decimal, to_integer};
pub use ext::{SafeString, StrExt};
pub use text::{default_if_empty, is_null_or_empty, is_null_or_whitespace, to_list, to_safe_string};
