//! ZooKeeper `srvr` four-letter-word responses.
//!
//! A response looks like:
//!
//! ```text
//! Zookeeper version: 3.8.1-74db005175a4ec545697012f9069cb9dcc8cdda7, built on 2023-01-25 16:31 UTC
//! Latency min/avg/max: 0/0.5/3
//! Received: 154
//! Sent: 153
//! Connections: 2
//! Outstanding: 0
//! Zxid: 0x10000004a
//! Mode: follower
//! Node count: 12
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const SEPARATOR: &str = ": ";

/// Role a ZooKeeper server reports in its `Mode` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerMode {
    /// Quorum leader.
    Leader,

    /// Voting quorum member following the leader.
    Follower,

    /// Non-voting member.
    Observer,

    /// Single server, no quorum.
    Standalone,

    /// Partitioned server serving reads only.
    ReadOnly,
}

impl ServerMode {
    /// Returns the mode as printed by ZooKeeper.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerMode::Leader => "leader",
            ServerMode::Follower => "follower",
            ServerMode::Observer => "observer",
            ServerMode::Standalone => "standalone",
            ServerMode::ReadOnly => "read-only",
        }
    }

    /// Returns whether the server takes part in a healthy voting quorum.
    pub fn is_quorum_member(&self) -> bool {
        matches!(self, ServerMode::Leader | ServerMode::Follower)
    }
}

impl FromStr for ServerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "leader" => Ok(ServerMode::Leader),
            "follower" => Ok(ServerMode::Follower),
            "observer" => Ok(ServerMode::Observer),
            "standalone" => Ok(ServerMode::Standalone),
            "read-only" => Ok(ServerMode::ReadOnly),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `srvr` response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStats {
    fields: BTreeMap<String, String>,
}

impl ServerStats {
    /// Parses a `srvr` response.
    ///
    /// Every non-blank line must contain `": "`. The key is the text before
    /// the first separator and the value the text up to the next one.
    pub fn parse(text: &str) -> Result<Self> {
        let mut fields = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split(SEPARATOR);
            let key = parts.next().unwrap_or_default();
            let value = parts.next().ok_or_else(|| Error::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            })?;

            fields.insert(key.to_string(), value.to_string());
        }

        debug!(fields = fields.len(), "Parsed srvr response");
        Ok(Self { fields })
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the server mode, if reported.
    ///
    /// An unrecognised mode is an error rather than `None`.
    pub fn mode(&self) -> Result<Option<ServerMode>> {
        self.get("Mode").map(str::parse).transpose()
    }

    /// Iterates all fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Returns whether every server reports leader or follower mode.
///
/// Servers with a missing or unknown mode count as unhealthy. An empty
/// slice is healthy.
pub fn quorum_healthy(servers: &[ServerStats]) -> bool {
    servers.iter().all(|server| {
        matches!(server.mode(), Ok(Some(mode)) if mode.is_quorum_member())
    })
}
