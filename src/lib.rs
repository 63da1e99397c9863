//! # extkit: small, stateless runtime helpers
//!
//! - Argument tokenizing ([`args`]): `-key=value`, `/key`, `?` into an [`ArgumentTable`]
//! - String coercion ([`strings`]): best-effort `bool`/`i32`/decimal/date parsing and cleanup
//! - Enum labels ([`describe`]): `strum` messages with a variant-name fallback
//! - Error chains ([`error_chain`]): flattening nested `source()` links
//! - Property paths ([`reflect`]): `"A.B.C"` lookup over serializable values
//!
//! Configuration lives in [`config`] and the crate-wide error type in [`error`].
//!
//! ```
//! let table = extkit::args::parse(["-i=500", "-t", "?"]).unwrap();
//! assert_eq!(table.get_integer("i"), Some(500));
//! assert!(table.is_help_requested());
//! ```

pub mod args;
pub mod config;
pub mod describe;
pub mod error;
pub mod error_chain;
pub mod reflect;
pub mod strings;

// Re-exports
pub use args::{ArgsError, ArgumentParser, ArgumentTable, DuplicateKeyPolicy};
pub use describe::Describe;
pub use error::*;
pub use reflect::{Reflect, ReflectError};
pub use strings::{SafeString, StrExt};
