use nom::{
    bytes::complete::take_till,
    character::complete::{char, one_of},
    combinator::{opt, rest},
    sequence::{pair, preceded},
    IResult,
};

use super::{ArgsError, ArgsResult};

/// Key recorded for a help request (`?`, `-?`, `/?`).
pub const HELP_KEY: &str = "?";

/// Value recorded for flags given without `=value`.
pub const FLAG_VALUE: &str = "true";

const QUOTES: [char; 2] = ['"', '\''];

/// The recognized shape of a single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenShape {
    /// `-key` or `/key`
    Flag { key: String },
    /// `-key=value` or `/key=value`
    KeyValue { key: String, value: String },
    /// any token carrying `?` that is not a flag
    Help,
}

impl TokenShape {
    pub fn key(&self) -> &str {
        match self {
            TokenShape::Flag { key } | TokenShape::KeyValue { key, .. } => key,
            TokenShape::Help => HELP_KEY,
        }
    }

    /// Converts the shape into the entry stored in the argument table.
    pub fn into_entry(self) -> (String, String) {
        match self {
            TokenShape::Flag { key } => (key, FLAG_VALUE.to_string()),
            TokenShape::KeyValue { key, value } => (key, value),
            TokenShape::Help => (HELP_KEY.to_string(), FLAG_VALUE.to_string()),
        }
    }
}

// Parser for the leading `-` or `/`
fn flag_prefix(input: &str) -> IResult<&str, char> {
    one_of("-/")(input)
}

// Parser for `key` with an optional `=value`; the value keeps any further `=`
fn flag_body(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(take_till(|c: char| c == '='), opt(preceded(char('='), rest)))(input)
}

fn flag(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    preceded(flag_prefix, flag_body)(input)
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(&QUOTES[..])
}

/// Classifies a single token.
///
/// Flags are tried first, but only when the first two characters hold no `?`,
/// so `-?` and `/?` land on [`TokenShape::Help`] like a bare `?` does.
pub fn classify(token: &str) -> ArgsResult<TokenShape> {
    let help_in_prefix = token.chars().take(2).any(|c| c == '?');

    if !help_in_prefix {
        // an empty key is only allowed when a value follows (`-=x`)
        match flag(token) {
            Ok((_, (key, None))) if !key.is_empty() => {
                return Ok(TokenShape::Flag {
                    key: key.to_string(),
                })
            }
            Ok((_, (key, Some(raw)))) => {
                return Ok(TokenShape::KeyValue {
                    key: key.to_string(),
                    value: strip_quotes(raw).to_string(),
                })
            }
            _ => {}
        }
    }

    if token.contains('?') {
        return Ok(TokenShape::Help);
    }

    Err(ArgsError::InvalidArgumentFormat {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kv(key: &str, value: &str) -> TokenShape {
        TokenShape::KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_classify_key_value() {
        assert_eq!(classify("-i=500").unwrap(), kv("i", "500"));
        assert_eq!(classify("/userName=BBrowske").unwrap(), kv("userName", "BBrowske"));
    }

    #[test]
    fn test_classify_flag() {
        assert_eq!(
            classify("-t").unwrap(),
            TokenShape::Flag {
                key: "t".to_string()
            }
        );
    }

    #[test]
    fn test_classify_strips_quotes() {
        assert_eq!(classify("-email=\"a@b.com\"").unwrap(), kv("email", "a@b.com"));
        assert_eq!(classify("-name='Brent Brown'").unwrap(), kv("name", "Brent Brown"));
        // not just matching pairs
        assert_eq!(classify("-x=\"'mixed\"").unwrap(), kv("x", "mixed"));
    }

    #[test]
    fn test_classify_keeps_value_after_first_equals() {
        assert_eq!(classify("-url=a=b=c").unwrap(), kv("url", "a=b=c"));
        assert_eq!(classify("-empty=").unwrap(), kv("empty", ""));
    }

    #[test]
    fn test_classify_help() {
        assert_eq!(classify("?").unwrap(), TokenShape::Help);
        assert_eq!(classify("-?").unwrap(), TokenShape::Help);
        assert_eq!(classify("/?").unwrap(), TokenShape::Help);
        assert_eq!(classify("help?").unwrap(), TokenShape::Help);
    }

    #[test]
    fn test_question_mark_after_prefix_is_part_of_key() {
        assert_eq!(
            classify("-a?").unwrap(),
            TokenShape::Flag {
                key: "a?".to_string()
            }
        );
    }

    #[test]
    fn test_classify_invalid() {
        for token in ["t", "", "-", "/"] {
            match classify(token) {
                Err(ArgsError::InvalidArgumentFormat { token: t }) => assert_eq!(t, token),
                other => panic!("expected invalid format for {:?}, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_classify_empty_key_with_value() {
        assert_eq!(classify("-=x").unwrap(), kv("", "x"));
        assert_eq!(classify("/=x").unwrap(), kv("", "x"));
        assert_eq!(classify("-=").unwrap(), kv("", ""));
    }

    #[test]
    fn test_into_entry() {
        assert_eq!(
            TokenShape::Help.into_entry(),
            ("?".to_string(), "true".to_string())
        );
        assert_eq!(kv("i", "5").key(), "i");
    }
}
