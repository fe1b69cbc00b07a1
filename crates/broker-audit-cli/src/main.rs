//! broker-audit CLI.
//!
//! Inspects the text a Kafka/ZooKeeper deployment prints about itself and
//! audits the ACLs it reports.
//!
//! # Quick Start
//!
//! ```bash
//! # List the ACLs a broker reports
//! kafka-acls.sh --bootstrap-server localhost:9092 --list | broker-audit acls
//!
//! # Check them against broker-audit.toml
//! broker-audit acls acls.txt --audit --project .
//!
//! # Check a ZooKeeper quorum
//! broker-audit srvr zk-0.txt zk-1.txt zk-2.txt
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// broker-audit - inspect and audit Kafka/ZooKeeper deployment output.
#[derive(Parser)]
#[command(name = "broker-audit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Parse `kafka-acls --list` output.
    Acls {
        /// Listing to read (stdin when omitted or `-`).
        file: Option<PathBuf>,

        /// Output format (table, json).
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        format: String,

        /// Check the entries against the configured ACL policy.
        #[arg(long)]
        audit: bool,

        /// Project directory holding broker-audit.toml.
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Print the super users listed in server.properties.
    SuperUsers {
        /// Properties file to read (stdin when omitted or `-`).
        file: Option<PathBuf>,

        /// Project directory holding broker-audit.toml.
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Check ZooKeeper `srvr` responses for a healthy quorum.
    Srvr {
        /// One response per file (stdin when none are given).
        files: Vec<PathBuf>,
    },

    /// Print the dynamic configs from `kafka-configs --describe` output.
    TopicConfig {
        /// Describe output to read (stdin when omitted or `-`).
        file: Option<PathBuf>,

        /// Print only the value of this key.
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Check `kafka-configs --describe --entity-type users` output for SCRAM credentials.
    Scram {
        /// Describe output to read (stdin when omitted or `-`).
        file: Option<PathBuf>,

        /// Mechanism to look for (SCRAM-SHA-256, SCRAM-SHA-512).
        #[arg(short, long)]
        mechanism: Option<String>,

        /// Project directory holding broker-audit.toml.
        #[arg(short, long, default_value = ".")]
        project: PathBuf,
    },

    /// Check `kafka-configs --alter` output for a completed topic update.
    AlterCheck {
        /// Topic that was altered.
        topic: String,

        /// Alter output to read (stdin when omitted or `-`).
        file: Option<PathBuf>,
    },

    /// Count produced messages in a test producer log.
    Messages {
        /// Log to read (stdin when omitted or `-`).
        file: Option<PathBuf>,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Project directory holding broker-audit.toml.
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text", value_parser = ["text", "json", "toml"])]
        format: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    style::set_no_color(
        cli.no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal(),
    );

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Acls {
            file,
            format,
            audit,
            project,
        } => commands::acls::run(file.as_deref(), &format, audit, &project),
        Commands::SuperUsers { file, project } => {
            commands::super_users::run(file.as_deref(), &project)
        }
        Commands::Srvr { files } => commands::srvr::run(&files),
        Commands::TopicConfig { file, key } => {
            commands::configs::topic(file.as_deref(), key.as_deref())
        }
        Commands::Scram {
            file,
            mechanism,
            project,
        } => commands::configs::scram(file.as_deref(), mechanism.as_deref(), &project),
        Commands::AlterCheck { topic, file } => {
            commands::configs::alter_check(&topic, file.as_deref())
        }
        Commands::Messages { file } => commands::messages::run(file.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { project, format } => commands::config::show(&project, &format),
        },
    }
}
