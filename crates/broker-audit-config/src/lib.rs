//! Configuration management for broker-audit
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (BROKER_AUDIT_* prefix, `__` between sections)
//! 2. broker-audit.local.toml (gitignored, local overrides)
//! 3. broker-audit.toml (git-tracked, project config)
//! 4. ~/.config/broker-audit/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! The `[acl]` section describes the ACLs a healthy deployment is expected
//! to carry and turns into an [`AclPolicy`] for auditing.

use anyhow::Result;
use broker_audit_acl::AclPolicy;
use broker_audit_acl::policy::{DEFAULT_OPERATIONS, DEFAULT_RESOURCE_TYPES};
use broker_audit_diag::ScramMechanism;
use broker_audit_diag::properties::SUPER_USERS_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main broker-audit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub project: ProjectConfig,
    pub acl: AclConfig,
    pub diag: DiagConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "broker-audit".to_string(),
        }
    }
}

/// Expected ACLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AclConfig {
    /// Allowed principals, without the `User:` prefix. Empty allows any.
    pub principals: Vec<String>,
    pub operations: Vec<String>,
    pub resource_types: Vec<String>,
    /// Topic every `TOPIC` binding must name.
    pub topic: Option<String>,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            principals: Vec::new(),
            operations: DEFAULT_OPERATIONS.iter().map(ToString::to_string).collect(),
            resource_types: DEFAULT_RESOURCE_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            topic: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiagConfig {
    pub scram_mechanism: String,
    pub super_users_key: String,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            scram_mechanism: ScramMechanism::default().to_string(),
            super_users_key: SUPER_USERS_KEY.to_string(),
        }
    }
}

impl DiagConfig {
    /// Returns the configured SCRAM mechanism.
    pub fn scram_mechanism(&self) -> Result<ScramMechanism, ConfigError> {
        self.scram_mechanism
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("diag.scram_mechanism: {e}")))
    }
}

impl AuditConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acl.operations.is_empty() {
            return Err(ConfigError::ValidationError(
                "acl.operations must not be empty".to_string(),
            ));
        }

        if self.acl.resource_types.is_empty() {
            return Err(ConfigError::ValidationError(
                "acl.resource_types must not be empty".to_string(),
            ));
        }

        if self.diag.super_users_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "diag.super_users_key must not be empty".to_string(),
            ));
        }

        self.diag.scram_mechanism()?;
        Ok(())
    }

    /// Builds the ACL policy described by the `[acl]` section.
    pub fn acl_policy(&self) -> AclPolicy {
        let mut policy = AclPolicy::empty().allow_principals(self.acl.principals.iter().cloned());

        for operation in &self.acl.operations {
            policy = policy.allow_operation(operation.clone());
        }
        for resource_type in &self.acl.resource_types {
            policy = policy.allow_resource_type(resource_type.clone());
        }
        if let Some(topic) = &self.acl.topic {
            policy = policy.require_topic(topic.clone());
        }

        policy
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
