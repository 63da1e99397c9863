use thiserror::Error;

use crate::args::ArgsError;
use crate::reflect::ReflectError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Argument error: {0}")]
    Args(#[from] ArgsError),
    #[error("Reflection error: {0}")]
    Reflect(#[from] ReflectError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
