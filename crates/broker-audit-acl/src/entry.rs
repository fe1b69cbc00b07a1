//! ACL entry value type.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Deduplicated collection of parsed ACL entries.
pub type AclSet = HashSet<AclEntry>;

/// A single ACL binding: `username` may perform `operation` on the
/// resource `resource_type:resource_name`.
///
/// Entries compare and hash by their full field tuple, so two bindings with
/// identical fields collapse into one member of an [`AclSet`].
///
/// Field order (and therefore `Ord`) is resource name, resource type,
/// operation, username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AclEntry {
    resource_name: String,
    resource_type: String,
    operation: String,
    username: String,
}

impl AclEntry {
    /// Creates an entry from its four fields.
    pub fn new(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        username: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            resource_type: resource_type.into(),
            operation: operation.into(),
            username: username.into(),
        }
    }

    /// Name of the governed resource (topic or group name).
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Category of the resource, e.g. `TOPIC` or `GROUP`.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Permitted action, e.g. `READ`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Principal the binding applies to, without the `User:` prefix.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User:{} {} {}:{}",
            self.username, self.operation, self.resource_type, self.resource_name
        )
    }
}
