use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{classify, ArgsError, ArgsResult, ArgumentTable};
use crate::config::ParserConfig;

/// What to do when a flag name appears more than once.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DuplicateKeyPolicy {
    /// The later token replaces the earlier value.
    #[default]
    Overwrite,
    /// Parsing fails with [`ArgsError::DuplicateKey`].
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    config: ParserConfig,
}

impl ArgumentParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn with_duplicate_policy(policy: DuplicateKeyPolicy) -> Self {
        Self::new(ParserConfig {
            duplicate_policy: policy,
        })
    }

    pub fn duplicate_policy(&self) -> DuplicateKeyPolicy {
        self.config.duplicate_policy
    }

    /// Parses tokens such as `-d=2010-09-10 -t -n="Brent Brown" /?` into a table.
    ///
    /// Either the whole sequence parses or nothing is returned.
    #[tracing::instrument(level = "debug", skip(self, tokens), err)]
    pub fn parse<I, S>(&self, tokens: I) -> ArgsResult<ArgumentTable>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = ArgumentTable::new();

        for token in tokens {
            let token = token.as_ref();
            let shape = classify(token)?;
            debug!(token, ?shape, "classified argument");

            let (key, value) = shape.into_entry();
            if table.contains_key(&key) {
                match self.config.duplicate_policy {
                    DuplicateKeyPolicy::Reject => return Err(ArgsError::DuplicateKey { key }),
                    DuplicateKeyPolicy::Overwrite => {
                        warn!(key = %key, "duplicate argument, keeping the later value")
                    }
                }
            }
            table.insert(key, value);
        }

        Ok(table)
    }
}
