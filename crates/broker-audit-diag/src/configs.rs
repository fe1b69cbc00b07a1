//! `kafka-configs` describe and alter output.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Topic configuration key limiting record batch size.
pub const MAX_MESSAGE_BYTES: &str = "max.message.bytes";

/// SCRAM mechanism a user's credentials are stored under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScramMechanism {
    /// `SCRAM-SHA-256`
    #[serde(rename = "SCRAM-SHA-256")]
    Sha256,

    /// `SCRAM-SHA-512`
    #[default]
    #[serde(rename = "SCRAM-SHA-512")]
    Sha512,
}

impl ScramMechanism {
    /// Returns the mechanism name as printed by `kafka-configs`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScramMechanism::Sha256 => "SCRAM-SHA-256",
            ScramMechanism::Sha512 => "SCRAM-SHA-512",
        }
    }
}

impl FromStr for ScramMechanism {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCRAM-SHA-256" => Ok(ScramMechanism::Sha256),
            "SCRAM-SHA-512" => Ok(ScramMechanism::Sha512),
            _ => Err(Error::UnknownMechanism(s.to_string())),
        }
    }
}

impl fmt::Display for ScramMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether `describe --entity-type users` output lists credentials
/// for `mechanism`.
pub fn has_scram_credentials(text: &str, mechanism: ScramMechanism) -> bool {
    text.contains(mechanism.as_str())
}

/// Returns whether `--alter` output confirms the update of `topic`.
pub fn alter_succeeded(text: &str, topic: &str) -> bool {
    text.contains(&format!("Completed updating config for topic {topic}."))
}

/// Topic configuration parsed from `describe --entity-type topics` output.
///
/// ```text
/// Dynamic configs for topic orders are:
///   max.message.bytes=123123 sensitive=false synonyms={DYNAMIC_TOPIC_CONFIG:max.message.bytes=123123, DEFAULT_CONFIG:message.max.bytes=1048588}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicConfig {
    entries: BTreeMap<String, String>,
}

impl TopicConfig {
    /// Parses describe output.
    ///
    /// On each line the first whitespace-separated token containing `=` is
    /// split on its first `=`. Lines without such a token are ignored.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| line.split_whitespace().find(|token| token.contains('=')))
            .filter_map(|token| token.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Self { entries }
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `max.message.bytes`, if set and numeric.
    pub fn max_message_bytes(&self) -> Option<u64> {
        self.get(MAX_MESSAGE_BYTES)?.parse().ok()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no entry was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIBE: &str = "\
Dynamic configs for topic topic-abcd are:
  max.message.bytes=123123 sensitive=false synonyms={DYNAMIC_TOPIC_CONFIG:max.message.bytes=123123, DEFAULT_CONFIG:message.max.bytes=1048588}
  cleanup.policy=compact sensitive=false synonyms={DYNAMIC_TOPIC_CONFIG:cleanup.policy=compact, DEFAULT_CONFIG:log.cleanup.policy=delete}
";

    #[test]
    fn test_parse_describe() {
        let config = TopicConfig::parse(DESCRIBE);

        assert_eq!(config.len(), 2);
        assert_eq!(config.get("cleanup.policy"), Some("compact"));
        assert_eq!(config.max_message_bytes(), Some(123_123));
        assert_eq!(config.get("sensitive"), None);
    }

    #[test]
    fn test_parse_empty_describe() {
        let config = TopicConfig::parse("Dynamic configs for topic t are:\n");
        assert!(config.is_empty());
        assert_eq!(config.max_message_bytes(), None);
    }

    #[test]
    fn test_non_numeric_max_message_bytes() {
        let config = TopicConfig::parse("  max.message.bytes=lots sensitive=false");
        assert_eq!(config.get(MAX_MESSAGE_BYTES), Some("lots"));
        assert_eq!(config.max_message_bytes(), None);
    }

    #[test]
    fn test_alter_succeeded() {
        let output = "Completed updating config for topic topic-abcd.\n";

        assert!(alter_succeeded(output, "topic-abcd"));
        assert!(!alter_succeeded(output, "topic-abc"));
        assert!(!alter_succeeded("Error while executing config command", "topic-abcd"));
    }

    #[test]
    fn test_scram_credentials() {
        let output = "SCRAM credential configs for user-principal 'relation-7' are SCRAM-SHA-512=iterations=4096";

        assert!(has_scram_credentials(output, ScramMechanism::Sha512));
        assert!(!has_scram_credentials(output, ScramMechanism::Sha256));
        assert!(!has_scram_credentials("", ScramMechanism::default()));
    }

    #[test]
    fn test_mechanism_parsing() {
        assert_eq!(
            "scram-sha-256".parse::<ScramMechanism>().unwrap(),
            ScramMechanism::Sha256
        );
        assert_eq!(
            "SCRAM-SHA-512".parse::<ScramMechanism>().unwrap(),
            ScramMechanism::Sha512
        );
        assert!(matches!(
            "PLAIN".parse::<ScramMechanism>(),
            Err(Error::UnknownMechanism(_))
        ));
    }
}
