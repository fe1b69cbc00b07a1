//! ZooKeeper quorum check.

use anyhow::{Context, Result, bail};
use broker_audit_diag::{ServerStats, quorum_healthy};
use std::path::PathBuf;

use super::read_input;
use crate::style::{data_table, print_success};

/// Parses each `srvr` response and reports whether the quorum is healthy.
pub fn run(files: &[PathBuf]) -> Result<()> {
    let sources: Vec<Option<&PathBuf>> = if files.is_empty() {
        vec![None]
    } else {
        files.iter().map(Some).collect()
    };

    let mut servers = Vec::with_capacity(sources.len());
    let mut rows = Vec::with_capacity(sources.len());

    for source in sources {
        let name = source.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        let text = read_input(source.map(PathBuf::as_path))?;
        let stats = ServerStats::parse(&text).with_context(|| format!("Failed to parse {name}"))?;

        let (mode, member) = match stats.mode() {
            Ok(Some(mode)) => (mode.to_string(), mode.is_quorum_member()),
            Ok(None) => ("missing".to_string(), false),
            Err(e) => (e.to_string(), false),
        };
        let version = stats.get("Zookeeper version").unwrap_or("-").to_string();

        rows.push(vec![
            name,
            mode,
            if member { "yes" } else { "no" }.to_string(),
            version,
        ]);
        servers.push(stats);
    }

    println!(
        "{}",
        data_table(&["Source", "Mode", "Quorum Member", "Version"], &rows)
    );

    if !quorum_healthy(&servers) {
        bail!("Quorum unhealthy: not every server is a leader or follower");
    }

    print_success(&format!("Quorum healthy ({} servers)", servers.len()));
    Ok(())
}
