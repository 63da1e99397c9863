//! Human-readable labels for enum variants.
//!
//! Labels are declared next to the enum with `strum` message attributes:
//!
//! ```
//! use extkit::describe::Describe;
//!
//! #[derive(strum::EnumMessage, strum::AsRefStr)]
//! enum Shipping {
//!     #[strum(message = "Next business day")]
//!     Express,
//!     Ground,
//! }
//!
//! assert_eq!(Shipping::Express.description(), "Next business day");
//! assert_eq!(Shipping::Ground.description(), "Ground");
//! ```

use strum::{EnumMessage, IntoEnumIterator};

pub trait Describe {
    /// The variant's message, or its symbolic name when it has none.
    fn description(&self) -> String;
}

impl<T: EnumMessage + AsRef<str>> Describe for T {
    fn description(&self) -> String {
        self.get_message()
            .map(str::to_string)
            .unwrap_or_else(|| self.as_ref().to_string())
    }
}

/// Every variant of `T` paired with its description, in declaration order.
pub fn descriptions<T: IntoEnumIterator + Describe>() -> Vec<(T, String)> {
    T::iter()
        .map(|variant| {
            let label = variant.description();
            (variant, label)
        })
        .collect()
}

/// First variant whose description equals `label`.
pub fn from_description<T: IntoEnumIterator + Describe>(label: &str) -> Option<T> {
    T::iter().find(|variant| variant.description() == label)
}
