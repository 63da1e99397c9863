//! Walks nested errors through [`std::error::Error::source`], outermost first.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

/// Iterator over an error and each of its sources.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

pub fn count(err: &(dyn StdError + 'static)) -> usize {
    chain(err).count()
}

/// The `Debug` form of every link.
pub fn all_as_strings(err: &(dyn StdError + 'static)) -> Vec<String> {
    chain(err).map(|e| format!("{:?}", e)).collect()
}

/// The outer message followed by `Inner Exception {n}: {message}` for each
/// source, numbered from 1.
pub fn all_messages(err: &(dyn StdError + 'static)) -> String {
    let mut result = String::new();
    for (i, e) in chain(err).enumerate() {
        if i == 0 {
            result.push_str(&format!("{}\n", e));
        } else {
            result.push_str(&format!("\nInner Exception {}: {}\n", i, e));
        }
    }
    result
}

/// Same layout as [`all_messages`] but with stack traces. Only [`TracedError`]
/// links carry one; other links contribute an empty trace.
pub fn all_stack_messages(err: &(dyn StdError + 'static)) -> String {
    let mut result = String::new();
    for (i, e) in chain(err).enumerate() {
        if i == 0 {
            result.push_str(&format!("{}\n", stack_trace(e)));
        } else {
            result.push_str(&format!("Inner Stack Trace {}: {}\n", i, stack_trace(e)));
        }
    }
    result
}

/// The captured trace of a [`TracedError`] link, or an empty string.
pub fn stack_trace(err: &(dyn StdError + 'static)) -> String {
    match err.downcast_ref::<TracedError>() {
        Some(traced) if traced.backtrace().status() == BacktraceStatus::Captured => {
            traced.backtrace().to_string()
        }
        _ => String::new(),
    }
}

/// An error that records where it was created.
///
/// The backtrace is captured with [`Backtrace::capture`], so it is only
/// resolved when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` is set.
#[derive(Debug)]
pub struct TracedError {
    message: String,
    backtrace: Backtrace,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TracedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            backtrace: Backtrace::capture(),
            source: None,
        }
    }

    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            source: Some(source.into()),
            ..Self::new(message)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for TracedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}
