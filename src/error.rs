//! Error types for lifecycle runs.
//!
//! Argument, configuration and phase failures each have their own enum so callers
//! can tell a bad invocation apart from a failed deployment.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Main error type for all lifecycle operations
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// CLI argument errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Test configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure raised by one of the lifecycle phases
    #[error(transparent)]
    Phase(#[from] PhaseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Two selectors that cannot be combined were both given
    #[error("Ambiguous arguments: {first} and {second} cannot be used together")]
    AmbiguousArguments {
        /// Flag reported first
        first: &'static str,
        /// Flag reported second
        second: &'static str,
    },

    /// `--log` value does not name a known severity
    #[error("Invalid log level: \"{level}\"")]
    InvalidLogLevel {
        /// Value as given on the command line
        level: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

/// Errors reading the test configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read test config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse test config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The key selected for this run is absent from the config
    #[error("Missing required key '{key}' in test config")]
    MissingKey { key: &'static str },
}

/// Failures surfaced by phase backends.
///
/// The runner never inspects these; any of them ends the run.
#[derive(Error, Debug)]
pub enum PhaseError {
    /// External command exited unsuccessfully or could not be spawned
    #[error("Command execution failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// Identifier has no registered constructor
    #[error("Unknown {kind} '{identifier}'")]
    UnknownIdentifier {
        kind: &'static str,
        identifier: String,
    },

    /// A configuration routine returned an error
    #[error("Configure routine '{routine}' failed: {source:#}")]
    RoutineFailed {
        routine: String,
        #[source]
        source: anyhow::Error,
    },

    /// A test case returned an error
    #[error("Test run failed: {test}: {source:#}")]
    TestFailed {
        test: String,
        #[source]
        source: anyhow::Error,
    },
}
