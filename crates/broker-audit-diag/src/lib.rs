//! Parsers for the text a Kafka/ZooKeeper deployment prints about itself.
//!
//! Provides typed views over:
//! - Java properties files (`server.properties`, `zoo.cfg`)
//! - ZooKeeper `srvr` four-letter-word responses
//! - `kafka-configs` describe/alter output
//! - Test producer logs
//!
//! Nothing here runs commands; callers fetch the text and hand it over.

pub mod configs;
pub mod error;
pub mod producer;
pub mod properties;
pub mod srvr;

pub use configs::{ScramMechanism, TopicConfig, alter_succeeded, has_scram_credentials};
pub use error::{Error, Result};
pub use producer::{has_produced_messages, produced_message_lines};
pub use properties::{Properties, super_users, super_users_for};
pub use srvr::{ServerMode, ServerStats, quorum_healthy};
