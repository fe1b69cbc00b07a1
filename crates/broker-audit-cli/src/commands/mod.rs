//! CLI command implementations.

pub mod acls;
pub mod config;
pub mod configs;
pub mod messages;
pub mod srvr;
pub mod super_users;
pub mod version;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads command input from `path`, or stdin when it is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
