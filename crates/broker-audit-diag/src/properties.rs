//! Java properties files.

use std::collections::HashMap;

/// Key whose value lists the broker's super users.
pub const SUPER_USERS_KEY: &str = "super.users";

/// A parsed properties file.
///
/// Keeps every non-comment line in file order so flag lines such as
/// `sslQuorum=true` can be matched exactly, plus a key index for lookups.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    lines: Vec<String>,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Properties {
    /// Parses properties text.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. A line
    /// splits on its first `=`; key and value are trimmed. Later keys
    /// override earlier ones for [`Properties::get`].
    pub fn parse(text: &str) -> Self {
        let mut props = Self::default();

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            props.lines.push(line.to_string());

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                props.index.insert(key.clone(), props.entries.len());
                props.entries.push((key, value.trim().to_string()));
            }
        }

        props
    }

    /// Returns the last value assigned to `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Returns whether some line equals `line` after trimming.
    pub fn contains_line(&self, line: &str) -> bool {
        let line = line.trim();
        self.lines.iter().any(|l| l == line)
    }

    /// Iterates key/value pairs in file order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no key/value pair was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts the super users from `server.properties` text.
///
/// Uses the first line that contains `super.users` anywhere. The value is
/// the text between the first and second `=` of that line, split on `;`.
/// Entries keep their `User:` prefix.
pub fn super_users(text: &str) -> Vec<String> {
    super_users_for(text, SUPER_USERS_KEY)
}

/// Like [`super_users`], keyed on `key` instead of `super.users`.
pub fn super_users_for(text: &str, key: &str) -> Vec<String> {
    text.lines()
        .find(|line| line.contains(key))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.split(';').map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER_PROPERTIES: &str = "\
# generated by the charm
broker.id=0
super.users=User:admin;User:sync
listeners=SASL_PLAINTEXT://:19092,SASL_SSL://:9093
log.dirs = /var/lib/kafka/data

ssl.client.auth=none
broker.id=1
";

    #[test]
    fn test_parse_entries() {
        let props = Properties::parse(SERVER_PROPERTIES);

        assert_eq!(props.len(), 6);
        assert_eq!(props.get("log.dirs"), Some("/var/lib/kafka/data"));
        assert_eq!(
            props.get("listeners"),
            Some("SASL_PLAINTEXT://:19092,SASL_SSL://:9093")
        );
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_later_keys_override() {
        let props = Properties::parse(SERVER_PROPERTIES);
        assert_eq!(props.get("broker.id"), Some("1"));

        let ids: Vec<&str> = props
            .iter()
            .filter(|(k, _)| *k == "broker.id")
            .map(|(_, v)| v)
            .collect();
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let props = Properties::parse("# a=b\n! c=d\n\n   \n");
        assert!(props.is_empty());
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let props = Properties::parse("sasl.jaas.config=module required user=\"a\";");
        assert_eq!(
            props.get("sasl.jaas.config"),
            Some("module required user=\"a\";")
        );
    }

    #[test]
    fn test_contains_line() {
        let props = Properties::parse("dataDir=/data\nsslQuorum=true\n4lw.commands.whitelist=*\n");

        assert!(props.contains_line("sslQuorum=true"));
        assert!(props.contains_line("  sslQuorum=true "));
        assert!(!props.contains_line("sslQuorum=false"));
    }

    #[test]
    fn test_super_users() {
        assert_eq!(
            super_users(SERVER_PROPERTIES),
            vec!["User:admin".to_string(), "User:sync".to_string()]
        );
    }

    #[test]
    fn test_super_users_missing() {
        assert!(super_users("broker.id=0\n").is_empty());
        assert!(super_users("").is_empty());
    }

    #[test]
    fn test_super_users_value_stops_at_second_equals() {
        assert_eq!(super_users("super.users=User:a;User:b=c"), vec!["User:a", "User:b"]);
    }

    #[test]
    fn test_super_users_custom_key() {
        let text = "authorizer.super.principals=User:ops\n";
        assert_eq!(super_users_for(text, "super.principals"), vec!["User:ops"]);
    }

    #[test]
    fn test_super_users_without_value() {
        // Line mentions the key but carries no assignment.
        assert!(super_users("# super.users is managed elsewhere").is_empty());
    }
}
