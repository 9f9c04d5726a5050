//! Typed errors raised while preparing a session.
//!
//! The simulation itself performs no I/O and has no error paths; everything
//! here happens before the first tick and aborts startup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`GameConfig`](crate::game::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize, min: usize },

    #[error("grid may be at most {max}x{max} cells, got {width}x{height}")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("initial snake length {length} does not fit a grid {width} cells wide")]
    SnakeTooLong { length: usize, width: usize },

    #[error("{0} must be positive")]
    ZeroInterval(&'static str),
}

/// Failure to load a presentation asset (skin or key binding table).
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse asset {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("glyph `{field}` must be exactly one character, got {value:?}")]
    InvalidGlyph { field: &'static str, value: String },

    #[error("unknown key name {0:?}")]
    UnknownKey(String),

    #[error("unknown action {0:?}")]
    UnknownAction(String),
}
