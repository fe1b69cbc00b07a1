//! # broker-audit-acl: Kafka ACL listing parser and audit
//!
//! Turns the free-text output of `kafka-acls.sh --list` into typed
//! [`AclEntry`] values, then checks them against an expected
//! [`AclPolicy`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  kafka-acls --list output (text)            │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  AclTextParser                              │
//! │  ├─ per-line field extraction (regex)       │
//! │  └─ carry-forward of last seen fields       │
//! └─────────────────┬───────────────────────────┘
//!                   │  AclSet (deduplicated)
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  AclAuditor + AclPolicy                     │
//! │  ├─ principal allow-list                    │
//! │  ├─ operation / resource type vocabularies  │
//! │  └─ expected topic name                     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Input format
//!
//! The listing tool prints one resource block per pattern, followed by one
//! line per ACL binding:
//!
//! ```text
//! Current ACLs for resource `ResourcePattern(resourceType=TOPIC, name=orders, patternType=LITERAL)`:
//!  	(principal=User:relation-7, host=*, operation=READ, permissionType=ALLOW)
//!  	(principal=User:relation-7, host=*, operation=DESCRIBE, permissionType=ALLOW)
//! ```
//!
//! A field printed on one line stays in effect for the following lines
//! until the same field appears again.
//!
//! ## Examples
//!
//! ```
//! use broker_audit_acl::{AclEntry, AclTextParser};
//!
//! let text = "resourceType=TOPIC, name=test-topic, principal=User:alice, operation=READ,";
//! let entries = AclTextParser::parse(text);
//!
//! assert_eq!(entries.len(), 1);
//! assert!(entries.contains(&AclEntry::new("TOPIC", "test-topic", "alice", "READ")));
//! ```
//!
//! ### Auditing
//!
//! ```
//! use broker_audit_acl::{AclAuditor, AclPolicy, AclTextParser};
//!
//! let text = "\
//! resourceType=TOPIC, name=orders, patternType=LITERAL)`:
//!   (principal=User:relation-7, host=*, operation=WRITE, permissionType=ALLOW)
//!   (principal=User:mallory, host=*, operation=ALTER, permissionType=ALLOW)";
//!
//! let policy = AclPolicy::new()
//!     .allow_principal("relation-7")
//!     .require_topic("orders");
//! let report = AclAuditor::new(policy)
//!     .without_audit_log()
//!     .audit(&AclTextParser::parse(text));
//!
//! assert_eq!(report.checked(), 2);
//! assert_eq!(report.violations().len(), 1);
//! ```

pub mod entry;
pub mod parser;
pub mod policy;

// Re-export commonly used types
pub use entry::{AclEntry, AclSet};
pub use parser::{AclTextParser, ParsedAcls};
pub use policy::{AclAuditor, AclPolicy, AuditReport, PolicyViolation};
