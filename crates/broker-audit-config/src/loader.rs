//! Configuration loader with multi-source merging

use crate::{AuditConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys read from the environment as comma-separated lists.
const LIST_KEYS: [&str; 3] = ["acl.principals", "acl.operations", "acl.resource_types"];

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "BROKER_AUDIT".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "BROKER_AUDIT")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/broker-audit/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<AuditConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = AuditConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/broker-audit/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    debug!(path = %user_config_file.display(), "Using user config");
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (broker-audit.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            debug!(path = %project_config_file.display(), "Using project config");
            builder = builder.add_source(
                config::File::from(project_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 4. Local config (broker-audit.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            debug!(path = %local_config_file.display(), "Using local config");
            builder = builder.add_source(
                config::File::from(local_config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (BROKER_AUDIT_ACL__TOPIC=orders)
        let mut environment = config::Environment::with_prefix(&self.env_prefix)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .try_parsing(true);
        for key in LIST_KEYS {
            environment = environment.with_list_parse_key(key);
        }
        builder = builder.add_source(environment);

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let audit_config: AuditConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        audit_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(audit_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> AuditConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn loader(project_dir: &Path) -> ConfigLoader {
        // A prefix nobody sets, so the host environment cannot leak in.
        ConfigLoader::new()
            .with_project_dir(project_dir)
            .with_env_prefix("BROKER_AUDIT_LOADER_TEST")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config.project.name, "broker-audit");
        assert_eq!(config.acl.resource_types, vec!["TOPIC", "GROUP"]);
        assert_eq!(config.acl.topic, None);
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[project]
name = "kafka-k8s-bundle"

[acl]
principals = ["relation-7", "relation-9"]
topic = "test-topic"

[diag]
scram_mechanism = "SCRAM-SHA-256"
"#;
        fs::write(project_dir.join("broker-audit.toml"), config_content)
            .expect("Failed to write config");

        let config = loader(project_dir).load().expect("Failed to load config");

        assert_eq!(config.project.name, "kafka-k8s-bundle");
        assert_eq!(config.acl.principals, vec!["relation-7", "relation-9"]);
        assert_eq!(config.acl.topic.as_deref(), Some("test-topic"));
        // Untouched keys keep their defaults
        assert_eq!(config.acl.operations.len(), 4);
        assert_eq!(config.diag.scram_mechanism, "SCRAM-SHA-256");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("broker-audit.toml"),
            r#"
[acl]
topic = "orders"
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("broker-audit.local.toml"),
            r#"
[acl]
topic = "orders-staging"
"#,
        )
        .expect("Failed to write local config");

        let config = loader(project_dir).load().expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.acl.topic.as_deref(), Some("orders-staging"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("broker-audit.toml"),
            "[diag]\nscram_mechanism = \"PLAIN\"\n",
        )
        .expect("Failed to write config");

        let err = loader(project_dir).load().unwrap_err();
        assert!(format!("{err:#}").contains("diag.scram_mechanism"));
    }

    #[test]
    fn test_load_or_default_on_invalid_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(project_dir.join("broker-audit.toml"), "[acl]\noperations = []\n")
            .expect("Failed to write config");

        let config = loader(project_dir).load_or_default();
        assert_eq!(config.acl.operations.len(), 4);
    }

    // Environment variables are not exercised here: the config crate reads the
    // process environment, which tests share. In actual usage:
    //
    // BROKER_AUDIT_ACL__TOPIC=orders
    // BROKER_AUDIT_ACL__PRINCIPALS=relation-7,relation-9
    // BROKER_AUDIT_DIAG__SCRAM_MECHANISM=SCRAM-SHA-256
    //
    // override the corresponding file values.
}
