//! Error types for diagnostic output parsing.

use thiserror::Error;

/// Diagnostic parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A line that does not have the expected `key: value` shape.
    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A server mode the parser does not know.
    #[error("Unknown server mode: {0}")]
    UnknownMode(String),

    /// A SASL mechanism name the parser does not know.
    #[error("Unknown SCRAM mechanism: {0}")]
    UnknownMechanism(String),
}

/// Result type for diagnostic parsing.
pub type Result<T> = std::result::Result<T, Error>;
