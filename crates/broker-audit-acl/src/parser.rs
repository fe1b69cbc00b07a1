//! Line-oriented parser for ACL listing output.
//!
//! Each line is searched independently for four `key=value,` fragments.
//! A value is the text after the key up to the next comma, and the comma
//! must be present. Matched values are remembered across lines, and an
//! entry is emitted on every line that carries an `operation=` fragment
//! once all four fields have been seen.
//!
//! Remembered values are never cleared within a call. A listing that omits
//! a field for a new resource block therefore pairs the previous block's
//! value with the new operation line. [`ParsedAcls::carried_forward`]
//! counts the emissions that depended on such remembered values.

use crate::entry::{AclEntry, AclSet};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static RESOURCE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"resourceType=([^,]+),").expect("resource type pattern is valid")
});

static RESOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name=([^,]+),").expect("resource name pattern is valid"));

static PRINCIPAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"principal=User:([^,]+),").expect("principal pattern is valid")
});

static OPERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"operation=([^,]+),").expect("operation pattern is valid"));

/// Parser for `kafka-acls --list` style output.
///
/// The parser is stateless between calls; every call starts with empty
/// field slots.
pub struct AclTextParser;

impl AclTextParser {
    /// Parses raw listing text into a set of ACL entries.
    ///
    /// Never fails. Empty or unrecognised input yields an empty set.
    pub fn parse(text: &str) -> AclSet {
        Self::parse_detailed(text).entries
    }

    /// Parses raw listing text and reports how the entries were assembled.
    pub fn parse_detailed(text: &str) -> ParsedAcls {
        let mut pending = PendingFields::default();
        let mut parsed = ParsedAcls::default();

        for (index, line) in split_lines(text).into_iter().enumerate() {
            let seen = pending.observe(line);
            if !seen.operation {
                continue;
            }

            match pending.to_entry() {
                Some(entry) => {
                    if !seen.all() {
                        parsed.carried_forward += 1;
                    }
                    trace!(line = index + 1, entry = %entry, "ACL entry parsed");
                    parsed.entries.insert(entry);
                }
                None => parsed.incomplete_lines.push(index + 1),
            }
        }

        parsed
    }
}

/// Result of [`AclTextParser::parse_detailed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAcls {
    /// Deduplicated entries, identical to what [`AclTextParser::parse`] returns.
    pub entries: AclSet,

    /// Operation lines that emitted an entry using at least one field
    /// matched on an earlier line.
    pub carried_forward: usize,

    /// 1-based numbers of operation lines skipped because some field had
    /// never been seen.
    pub incomplete_lines: Vec<usize>,
}

/// Last seen value of each field, borrowed from the input text.
#[derive(Default)]
struct PendingFields<'a> {
    resource_type: Option<&'a str>,
    resource_name: Option<&'a str>,
    username: Option<&'a str>,
    operation: Option<&'a str>,
}

/// Which fields matched on the current line.
#[derive(Clone, Copy)]
struct LineMatches {
    resource_type: bool,
    resource_name: bool,
    username: bool,
    operation: bool,
}

impl LineMatches {
    fn all(self) -> bool {
        self.resource_type && self.resource_name && self.username && self.operation
    }
}

impl<'a> PendingFields<'a> {
    /// Overwrites every slot whose pattern matches `line`.
    fn observe(&mut self, line: &'a str) -> LineMatches {
        LineMatches {
            resource_type: update(&mut self.resource_type, &RESOURCE_TYPE, line),
            resource_name: update(&mut self.resource_name, &RESOURCE_NAME, line),
            username: update(&mut self.username, &PRINCIPAL, line),
            operation: update(&mut self.operation, &OPERATION, line),
        }
    }

    fn to_entry(&self) -> Option<AclEntry> {
        Some(AclEntry::new(
            self.resource_type?,
            self.resource_name?,
            self.username?,
            self.operation?,
        ))
    }
}

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits `text` on every [`LINE_BREAKS`] character.
///
/// A trailing break does not produce an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }

        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn update<'a>(slot: &mut Option<&'a str>, pattern: &Regex, line: &'a str) -> bool {
    match pattern.captures(line).and_then(|caps| caps.get(1)) {
        Some(value) => {
            *slot = Some(value.as_str());
            true
        }
        None => false,
    }
}
