//! Error types for script and configuration loading
//!
//! This module defines [`Error`], which covers everything that can go wrong
//! while reading operation scripts or the configuration file. The replay
//! engine itself never fails: out-of-range seeks are clamped and unknown
//! actions are skipped, so nothing in [`crate::sequencer`] returns an error.

use std::io;
use std::path::PathBuf;

/// Errors raised while preparing operations for playback
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A script or config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A script or config file is not valid TOML for its schema
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: toml::de::Error,
    },

    /// A script file defines no operations
    #[error("script defines no operations")]
    EmptyScript,

    /// An operation has no steps to play
    #[error("operation '{id}' has no steps")]
    EmptyOperation { id: String },

    /// Two operations in the same script share an id
    #[error("duplicate operation id '{id}'")]
    DuplicateOperation { id: String },

    /// The requested operation is not part of the lesson
    #[error("unknown operation '{id}' (available: {available})")]
    UnknownOperation { id: String, available: String },
}

pub type Result<T> = std::result::Result<T, Error>;
