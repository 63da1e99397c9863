use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{args::DuplicateKeyPolicy, Error, InternalResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtConfig {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub coercion: CoercionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicateKeyPolicy,
}

/// Formats tried, in order, by the date coercion. Patterns are chrono `strftime` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoercionConfig {
    #[serde(default = "default_date_time_formats")]
    pub date_time_formats: Vec<String>,

    /// Date-only patterns; a match resolves to midnight.
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            date_time_formats: default_date_time_formats(),
            date_formats: default_date_formats(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Internal(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_date_time_formats() -> Vec<String> {
    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %I:%M:%S %p",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %I:%M %p",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%m-%d-%Y",
        "%B %d, %Y",
        "%b %d, %Y",
        "%d %B %Y",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: ExtConfig = from_str("{}").unwrap();
        assert_eq!(config.parser.duplicate_policy, DuplicateKeyPolicy::Overwrite);
        assert_eq!(config.coercion, CoercionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config: ExtConfig = from_str(
            r#"{ "parser": { "duplicate_policy": "reject" }, "coercion": { "date_formats": ["%d.%m.%Y"] } }"#,
        )
        .unwrap();
        assert_eq!(config.parser.duplicate_policy, DuplicateKeyPolicy::Reject);
        assert_eq!(config.coercion.date_formats, vec!["%d.%m.%Y".to_string()]);
        assert_eq!(
            config.coercion.date_time_formats,
            default_date_time_formats()
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "parser": {{ "duplicate_policy": "reject" }} }}"#).unwrap();
        let config: ExtConfig = from_file(file.path()).unwrap();
        assert_eq!(config.parser.duplicate_policy, DuplicateKeyPolicy::Reject);
    }

    #[test]
    fn test_from_file_missing() {
        let result: InternalResult<ExtConfig> = from_file("/nonexistent/extkit.json");
        assert!(matches!(result, Err(Error::Internal(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result: InternalResult<ExtConfig> = from_str("{ not json");
        assert!(matches!(result, Err(Error::Internal(_))));
    }
}
