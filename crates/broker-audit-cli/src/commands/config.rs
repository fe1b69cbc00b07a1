//! Configuration management commands.

use anyhow::{Context, Result};
use broker_audit_config::{AuditConfig, Paths};
use std::path::Path;

use crate::style::{print_header, print_labeled};

/// Show the effective configuration.
pub fn show(project: &Path, format: &str) -> Result<()> {
    let config = AuditConfig::load_from_dir(project).context("Failed to load configuration")?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "toml" => {
            print!("{}", config.to_toml()?);
        }
        _ => {
            print_header("broker-audit Configuration");
            println!();
            if !Paths::is_initialized(project) {
                println!("No broker-audit.toml in {}, showing defaults.", project.display());
                println!();
            }

            print_header("Project:");
            print_labeled("Name", &config.project.name);
            println!();

            print_header("ACL policy:");
            let principals = if config.acl.principals.is_empty() {
                "(any)".to_string()
            } else {
                config.acl.principals.join(", ")
            };
            print_labeled("Principals", &principals);
            print_labeled("Operations", &config.acl.operations.join(", "));
            print_labeled("Resource types", &config.acl.resource_types.join(", "));
            print_labeled("Topic", config.acl.topic.as_deref().unwrap_or("(any)"));
            println!();

            print_header("Diagnostics:");
            print_labeled("SCRAM mechanism", &config.diag.scram_mechanism);
            print_labeled("Super users key", &config.diag.super_users_key);
        }
    }

    Ok(())
}
