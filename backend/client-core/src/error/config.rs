use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures loading or validating `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    /// The platform has no standard directory of this kind (e.g. no `$HOME`).
    #[error("Config Directory Not Found Error: no platform {kind} directory {location}")]
    DirectoryNotFound {
        location: ErrorLocation,
        kind: &'static str,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}
