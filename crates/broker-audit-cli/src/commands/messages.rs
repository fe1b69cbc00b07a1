//! Producer log check.

use anyhow::{Result, bail};
use broker_audit_diag::{has_produced_messages, produced_message_lines};
use std::path::Path;

use super::read_input;

/// Prints the number of produced messages; fails when there are none.
pub fn run(input: Option<&Path>) -> Result<()> {
    let log = read_input(input)?;

    if !has_produced_messages(&log) {
        bail!("No produced messages found");
    }

    println!("{}", produced_message_lines(&log));
    Ok(())
}
