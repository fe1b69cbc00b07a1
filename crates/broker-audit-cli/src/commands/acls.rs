//! ACL listing command.

use anyhow::{Context, Result, bail};
use broker_audit_acl::{AclAuditor, AclEntry, AclTextParser, AuditReport};
use broker_audit_config::AuditConfig;
use serde_json::json;
use std::path::Path;
use tracing::{debug, warn};

use super::read_input;
use crate::style::{print_acl_table, print_error, print_success};

/// Parses an ACL listing, prints it and optionally audits it.
pub fn run(input: Option<&Path>, format: &str, audit: bool, project: &Path) -> Result<()> {
    let text = read_input(input)?;
    let parsed = AclTextParser::parse_detailed(&text);

    debug!(
        entries = parsed.entries.len(),
        carried_forward = parsed.carried_forward,
        "Parsed ACL listing"
    );
    if !parsed.incomplete_lines.is_empty() {
        warn!(
            lines = ?parsed.incomplete_lines,
            "Skipped operation lines with fields never seen before"
        );
    }

    let mut entries: Vec<&AclEntry> = parsed.entries.iter().collect();
    entries.sort();

    let report = if audit {
        let config =
            AuditConfig::load_from_dir(project).context("Failed to load configuration")?;
        Some(
            AclAuditor::new(config.acl_policy())
                .without_audit_log()
                .audit(&parsed.entries),
        )
    } else {
        None
    };

    match format {
        "json" => {
            let mut output = json!({
                "entries": entries,
                "carried_forward": parsed.carried_forward,
                "incomplete_lines": parsed.incomplete_lines,
            });
            if let Some(report) = &report {
                output["violations"] = json!(
                    report
                        .violations()
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                );
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => print_acl_table(&entries),
    }

    // Violations are reported once, by `finish_audit`
    match report {
        Some(report) => finish_audit(&report),
        None => Ok(()),
    }
}

fn finish_audit(report: &AuditReport) -> Result<()> {
    if report.is_clean() {
        print_success(&format!("{} ACL entries match the policy", report.checked()));
        return Ok(());
    }

    for violation in report.violations() {
        print_error(&violation.to_string());
    }
    bail!(
        "{} of {} ACL entries violate the policy",
        report.violations().len(),
        report.checked()
    );
}
