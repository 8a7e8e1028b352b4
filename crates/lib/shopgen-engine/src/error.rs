use crate::validator::error::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while materializing a single catalog entry on disk.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Unable to create directory `{path}`: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write file `{path}`: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination `{path}` already exists and is a directory")]
    TypeConflict { path: PathBuf },

    #[error("Unable to resolve output directory `{path}`: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for a scaffolding run.
///
/// Every variant is fatal. Dependency installation never produces one of
/// these, a failed install is reported through
/// [`InstallOutcome`](crate::install::InstallOutcome) instead.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name: {0}")]
    Validation(#[from] ValidationError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
