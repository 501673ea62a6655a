//! Error types.
//!
//! Two tiers that never mix: [`Error`] is returned by declaration and
//! configuration calls, [`ParseError`] describes a malformed invocation and
//! is turned into exit code 1 by the dispatcher.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which registry an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A declared command.
    Command,
    /// A declared option.
    Option,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Command => write!(f, "command"),
            EntityKind::Option => write!(f, "option"),
        }
    }
}

/// Declaration and configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A fixed-size registry is full.
    #[error("maximum {kind} count reached ({max})")]
    CapacityExceeded {
        /// Registry that overflowed.
        kind: EntityKind,
        /// Its configured capacity.
        max: usize,
    },

    /// An option was scoped to a command handle this application does not hold.
    #[error("command handle does not belong to this application")]
    ForeignCommand,

    /// The settings file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`crate::Settings`].
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configured limits cannot be used.
    #[error("invalid limits: {0}")]
    InvalidLimits(String),
}

/// Result type alias for declaration and configuration calls.
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed invocation. The `Display` text is the one-line diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first word names no command and no default handler exists.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A bare word appeared where an option was expected.
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// An option token matched none of the command's options.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// A value option was the last token.
    #[error("option '{0}' requires a value")]
    MissingValue(String),

    /// A value option was followed by another option token.
    #[error("option '{option}' requires a value, got '{got}'")]
    ValueLooksLikeOption {
        /// The option token.
        option: String,
        /// The token found in the value position.
        got: String,
    },

    /// The value does not fit the option's value buffer.
    #[error("value for '{option}' is too long (max {max})")]
    ValueTooLong {
        /// The option token.
        option: String,
        /// Longest accepted value, in bytes.
        max: usize,
    },

    /// A required option was not given. Carries the option's alias string.
    #[error("required option '{0}' not provided")]
    MissingRequired(String),
}
