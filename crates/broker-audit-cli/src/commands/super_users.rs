//! Super user listing.

use anyhow::{Context, Result};
use broker_audit_config::AuditConfig;
use broker_audit_diag::super_users_for;
use std::path::Path;

use super::read_input;
use crate::style::print_warn;

/// Prints one super user per line.
pub fn run(input: Option<&Path>, project: &Path) -> Result<()> {
    let config = AuditConfig::load_from_dir(project).context("Failed to load configuration")?;
    let text = read_input(input)?;

    let users = super_users_for(&text, &config.diag.super_users_key);
    if users.is_empty() {
        print_warn(&format!("No {} entry found", config.diag.super_users_key));
    }

    for user in users {
        println!("{user}");
    }

    Ok(())
}
