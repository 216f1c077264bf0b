//! Error types for u-shiftopt.

use thiserror::Error;

/// Errors raised while building schedules, loading configuration, or
/// parsing command-line tokens.
///
/// The search engines themselves never fail: a rejected move is reverted,
/// not reported.
#[derive(Debug, Error)]
pub enum Error {
    /// A schedule needs at least one day to optimize.
    #[error("schedule must contain at least one day")]
    NoDays,

    /// A schedule needs at least one worker to assign.
    #[error("schedule must contain at least one worker")]
    NoWorkers,

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file was not valid TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Search type token other than `--hill` or `--anneal`.
    #[error("invalid search type argument `{0}` (use --anneal or --hill)")]
    UnknownStrategy(String),

    /// Heuristic token that is not 1, 2, or 3.
    #[error("valid integer argument required (1, 2, or 3), got `{0}`")]
    InvalidHeuristic(String),
}

/// Result type alias for u-shiftopt operations.
pub type Result<T> = std::result::Result<T, Error>;
