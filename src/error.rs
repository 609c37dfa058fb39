use std::fmt;
use thiserror::Error;

/// Which operand of a comparison was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Greater,
    Lesser,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Greater => write!(f, "greater"),
            Side::Lesser => write!(f, "lesser"),
        }
    }
}

/// Unified error type for vtag operations
#[derive(Error, Debug)]
pub enum VtagError {
    /// The raw string does not match the tag grammar, or a component overflows
    #[error("invalid version: {0}")]
    InvalidFormat(String),

    /// A comparison operand was never constructed
    #[error("cannot compare versions, {0} version is nil")]
    NilOperand(Side),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Convenience type alias for Results in vtag
pub type Result<T> = std::result::Result<T, VtagError>;

impl VtagError {
    /// Create an invalid format error carrying the offending input
    pub fn invalid_format(raw: impl Into<String>) -> Self {
        VtagError::InvalidFormat(raw.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VtagError::Config(msg.into())
    }
}
