//! # Argument Tokenizer
//!
//! Turns flat command-line tokens into an [`ArgumentTable`]:
//!
//! ```text
//! -i=500 -email="a@b.com" /userName=BBrowske -t ?
//! ```
//!
//! | Token           | Key        | Value      |
//! |-----------------|------------|------------|
//! | `-key=value`    | `key`      | `value` (quotes stripped) |
//! | `/key=value`    | `key`      | `value`    |
//! | `-key`          | `key`      | `"true"`   |
//! | `?`, `-?`, `/?` | `?`        | `"true"`   |
//!
//! Any other token fails with [`ArgsError::InvalidArgumentFormat`].

pub mod parser;
pub mod table;
pub mod token;

pub use parser::{ArgumentParser, DuplicateKeyPolicy};
pub use table::ArgumentTable;
pub use token::{classify, TokenShape, FLAG_VALUE, HELP_KEY};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error(
        "Supplied argument '{token}' is invalid. Please use '-?' to see available parameters and syntax."
    )]
    InvalidArgumentFormat { token: String },
    #[error("Argument '{key}' was supplied more than once")]
    DuplicateKey { key: String },
}

pub type ArgsResult<T> = Result<T, ArgsError>;

/// Parses tokens with the default parser (duplicates overwrite).
pub fn parse<I, S>(tokens: I) -> ArgsResult<ArgumentTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ArgumentParser::default().parse(tokens)
}

/// Parses the current process arguments, skipping the program name.
pub fn parse_env() -> ArgsResult<ArgumentTable> {
    parse(std::env::args().skip(1))
}
