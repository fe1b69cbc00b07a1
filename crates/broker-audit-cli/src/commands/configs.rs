//! `kafka-configs` output checks.

use anyhow::{Context, Result, bail};
use broker_audit_config::AuditConfig;
use broker_audit_diag::{ScramMechanism, TopicConfig, alter_succeeded, has_scram_credentials};
use std::path::Path;

use super::read_input;
use crate::style::{print_info_table, print_success, print_warn};

/// Prints the dynamic topic configs, or the value of a single key.
pub fn topic(input: Option<&Path>, key: Option<&str>) -> Result<()> {
    let config = TopicConfig::parse(&read_input(input)?);

    if let Some(key) = key {
        let Some(value) = config.get(key) else {
            bail!("Config key '{key}' not found");
        };
        println!("{value}");
        return Ok(());
    }

    if config.is_empty() {
        print_warn("No dynamic configs found");
        return Ok(());
    }

    let entries: Vec<(&str, &str)> = config.iter().collect();
    print_info_table(&entries);
    Ok(())
}

/// Checks a user describe output for SCRAM credentials.
///
/// Without `--mechanism` the configured `diag.scram_mechanism` is used.
pub fn scram(input: Option<&Path>, mechanism: Option<&str>, project: &Path) -> Result<()> {
    let mechanism: ScramMechanism = match mechanism {
        Some(name) => name.parse()?,
        None => AuditConfig::load_from_dir(project)
            .context("Failed to load configuration")?
            .diag
            .scram_mechanism()?,
    };

    let text = read_input(input)?;
    if !has_scram_credentials(&text, mechanism) {
        bail!("No {mechanism} credentials found");
    }

    print_success(&format!("{mechanism} credentials present"));
    Ok(())
}

/// Checks `--alter` output for the completion line of `topic`.
pub fn alter_check(topic: &str, input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    if !alter_succeeded(&text, topic) {
        bail!("No completed config update for topic {topic}");
    }

    print_success(&format!("Config updated for topic {topic}"));
    Ok(())
}
