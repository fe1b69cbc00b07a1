//! Expected-ACL policy and auditing.
//!
//! A deployed broker grants client applications a small, predictable set of
//! ACLs: known principals, a fixed operation vocabulary, topic and group
//! resources only, and topic bindings naming the topic the client asked
//! for. [`AclPolicy`] describes those expectations and [`AclAuditor`]
//! checks a parsed [`AclSet`] against them.

use crate::entry::{AclEntry, AclSet};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{info, warn};

/// Operations the broker grants to client applications.
pub const DEFAULT_OPERATIONS: [&str; 4] = ["CREATE", "READ", "WRITE", "DESCRIBE"];

/// Resource types the broker grants ACLs on for client applications.
pub const DEFAULT_RESOURCE_TYPES: [&str; 2] = ["TOPIC", "GROUP"];

/// Resource type whose names are checked against [`AclPolicy::require_topic`].
pub const TOPIC_RESOURCE: &str = "TOPIC";

/// An entry that does not satisfy the policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    /// The principal is not on the allow-list.
    #[error("unknown principal '{}' in {entry}", .entry.username())]
    UnknownPrincipal { entry: AclEntry },

    /// The operation is outside the expected vocabulary.
    #[error("unexpected operation '{}' in {entry}", .entry.operation())]
    UnexpectedOperation { entry: AclEntry },

    /// The resource type is outside the expected vocabulary.
    #[error("unexpected resource type '{}' in {entry}", .entry.resource_type())]
    UnexpectedResourceType { entry: AclEntry },

    /// A topic binding names a different topic than expected.
    #[error("unexpected topic '{}' in {entry}, expected '{expected}'", .entry.resource_name())]
    UnexpectedTopic { entry: AclEntry, expected: String },
}

impl PolicyViolation {
    /// Returns the offending entry.
    pub fn entry(&self) -> &AclEntry {
        match self {
            PolicyViolation::UnknownPrincipal { entry }
            | PolicyViolation::UnexpectedOperation { entry }
            | PolicyViolation::UnexpectedResourceType { entry }
            | PolicyViolation::UnexpectedTopic { entry, .. } => entry,
        }
    }
}

/// Expected shape of the ACLs present on a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclPolicy {
    /// Allowed principals. Empty means any principal.
    principals: BTreeSet<String>,

    /// Allowed operations.
    operations: BTreeSet<String>,

    /// Allowed resource types.
    resource_types: BTreeSet<String>,

    /// Topic every `TOPIC` binding must name, if any.
    topic: Option<String>,
}

impl AclPolicy {
    /// Creates the default policy: any principal, the standard operation and
    /// resource type vocabularies, any topic.
    pub fn new() -> Self {
        Self {
            principals: BTreeSet::new(),
            operations: DEFAULT_OPERATIONS.iter().map(ToString::to_string).collect(),
            resource_types: DEFAULT_RESOURCE_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            topic: None,
        }
    }

    /// Creates a policy with empty vocabularies, rejecting every entry until
    /// operations and resource types are allowed explicitly.
    pub fn empty() -> Self {
        Self {
            principals: BTreeSet::new(),
            operations: BTreeSet::new(),
            resource_types: BTreeSet::new(),
            topic: None,
        }
    }

    /// Adds a principal to the allow-list.
    pub fn allow_principal(mut self, username: impl Into<String>) -> Self {
        self.principals.insert(username.into());
        self
    }

    /// Adds several principals to the allow-list.
    pub fn allow_principals<I, S>(mut self, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.principals.extend(usernames.into_iter().map(Into::into));
        self
    }

    /// Adds an operation to the vocabulary.
    pub fn allow_operation(mut self, operation: impl Into<String>) -> Self {
        self.operations.insert(operation.into());
        self
    }

    /// Adds a resource type to the vocabulary.
    pub fn allow_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_types.insert(resource_type.into());
        self
    }

    /// Requires every `TOPIC` binding to name `topic`.
    pub fn require_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Returns the principal allow-list.
    pub fn principals(&self) -> &BTreeSet<String> {
        &self.principals
    }

    /// Returns the operation vocabulary.
    pub fn operations(&self) -> &BTreeSet<String> {
        &self.operations
    }

    /// Returns the resource type vocabulary.
    pub fn resource_types(&self) -> &BTreeSet<String> {
        &self.resource_types
    }

    /// Returns the required topic name.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Checks one entry.
    ///
    /// Checks run in order principal, operation, resource type, topic; the
    /// first failing check is reported.
    pub fn check(&self, entry: &AclEntry) -> Result<(), PolicyViolation> {
        if !self.principals.is_empty() && !self.principals.contains(entry.username()) {
            return Err(PolicyViolation::UnknownPrincipal {
                entry: entry.clone(),
            });
        }

        if !self.operations.contains(entry.operation()) {
            return Err(PolicyViolation::UnexpectedOperation {
                entry: entry.clone(),
            });
        }

        if !self.resource_types.contains(entry.resource_type()) {
            return Err(PolicyViolation::UnexpectedResourceType {
                entry: entry.clone(),
            });
        }

        if let Some(expected) = &self.topic {
            if entry.resource_type() == TOPIC_RESOURCE
                && entry.resource_name() != expected.as_str()
            {
                return Err(PolicyViolation::UnexpectedTopic {
                    entry: entry.clone(),
                    expected: expected.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for AclPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of auditing a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    checked: usize,
    violations: Vec<PolicyViolation>,
}

impl AuditReport {
    /// Number of entries checked.
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Violations, ordered by entry.
    pub fn violations(&self) -> &[PolicyViolation] {
        &self.violations
    }

    /// Returns whether no entry violated the policy.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audits parsed entries against an [`AclPolicy`].
pub struct AclAuditor {
    policy: AclPolicy,

    /// Whether to log denials and the audit summary.
    audit_log: bool,
}

impl AclAuditor {
    /// Creates a new auditor.
    pub fn new(policy: AclPolicy) -> Self {
        Self {
            policy,
            audit_log: true,
        }
    }

    /// Disables the tracing events emitted by [`AclAuditor::audit`].
    pub fn without_audit_log(mut self) -> Self {
        self.audit_log = false;
        self
    }

    /// Checks every entry and collects the violations.
    pub fn audit(&self, entries: &AclSet) -> AuditReport {
        let mut sorted: Vec<&AclEntry> = entries.iter().collect();
        sorted.sort();

        let violations: Vec<PolicyViolation> = sorted
            .into_iter()
            .filter_map(|entry| self.policy.check(entry).err())
            .collect();

        if self.audit_log {
            for violation in &violations {
                warn!(entry = %violation.entry(), reason = %violation, "ACL violates policy");
            }
            info!(
                checked = entries.len(),
                violations = violations.len(),
                "ACL audit complete"
            );
        }

        AuditReport {
            checked: entries.len(),
            violations,
        }
    }

    /// Returns the policy.
    pub fn policy(&self) -> &AclPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(resource_type: &str, name: &str, user: &str, op: &str) -> AclEntry {
        AclEntry::new(resource_type, name, user, op)
    }

    #[test]
    fn test_default_policy_accepts_client_bindings() {
        let policy = AclPolicy::new();

        for op in DEFAULT_OPERATIONS {
            assert!(policy.check(&entry("TOPIC", "orders", "anyone", op)).is_ok());
        }
        assert!(policy.check(&entry("GROUP", "g", "anyone", "READ")).is_ok());
    }

    #[test]
    fn test_unknown_principal() {
        let policy = AclPolicy::new().allow_principals(["relation-7", "relation-9"]);

        assert!(policy.check(&entry("TOPIC", "t", "relation-7", "READ")).is_ok());
        assert!(matches!(
            policy.check(&entry("TOPIC", "t", "mallory", "READ")),
            Err(PolicyViolation::UnknownPrincipal { .. })
        ));
    }

    #[test]
    fn test_unexpected_operation() {
        let policy = AclPolicy::new();
        let result = policy.check(&entry("TOPIC", "t", "alice", "ALTER"));

        match result {
            Err(PolicyViolation::UnexpectedOperation { entry }) => {
                assert_eq!(entry.operation(), "ALTER");
            }
            other => panic!("Expected UnexpectedOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_resource_type() {
        let policy = AclPolicy::new();
        assert!(matches!(
            policy.check(&entry("CLUSTER", "kafka-cluster", "alice", "CREATE")),
            Err(PolicyViolation::UnexpectedResourceType { .. })
        ));
    }

    #[test]
    fn test_topic_requirement_only_applies_to_topics() {
        let policy = AclPolicy::new().require_topic("test-topic");

        assert!(policy.check(&entry("TOPIC", "test-topic", "a", "READ")).is_ok());
        assert!(policy.check(&entry("GROUP", "anything", "a", "READ")).is_ok());

        let err = policy
            .check(&entry("TOPIC", "other", "a", "READ"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected topic 'other' in User:a READ TOPIC:other, expected 'test-topic'"
        );
    }

    #[test]
    fn test_principal_checked_before_operation() {
        let policy = AclPolicy::new().allow_principal("alice");
        assert!(matches!(
            policy.check(&entry("TOPIC", "t", "bob", "ALTER")),
            Err(PolicyViolation::UnknownPrincipal { .. })
        ));
    }

    #[test]
    fn test_empty_policy_rejects_everything() {
        let policy = AclPolicy::empty();
        assert!(policy.check(&entry("TOPIC", "t", "a", "READ")).is_err());

        let policy = AclPolicy::empty()
            .allow_operation("READ")
            .allow_resource_type("TOPIC");
        assert!(policy.check(&entry("TOPIC", "t", "a", "READ")).is_ok());
    }

    #[test]
    fn test_audit_report() {
        let mut entries = AclSet::new();
        entries.insert(entry("TOPIC", "test-topic", "relation-7", "READ"));
        entries.insert(entry("TOPIC", "test-topic", "relation-7", "WRITE"));
        entries.insert(entry("TOPIC", "secret", "relation-7", "READ"));
        entries.insert(entry("GROUP", "g", "mallory", "READ"));

        let auditor = AclAuditor::new(
            AclPolicy::new()
                .allow_principal("relation-7")
                .require_topic("test-topic"),
        )
        .without_audit_log();
        let report = auditor.audit(&entries);

        assert_eq!(report.checked(), 4);
        assert!(!report.is_clean());
        assert_eq!(report.violations().len(), 2);

        // Ordered by entry: resource name "g" sorts before "secret".
        assert_eq!(report.violations()[0].entry().username(), "mallory");
        assert_eq!(report.violations()[1].entry().resource_name(), "secret");
    }

    #[test]
    fn test_audit_empty_set_is_clean() {
        let report = AclAuditor::new(AclPolicy::new())
            .without_audit_log()
            .audit(&AclSet::new());

        assert!(report.is_clean());
        assert_eq!(report.checked(), 0);
    }
}
