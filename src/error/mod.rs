use cuetools::CueError;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error("Output file already exists, use --force to overwrite: {0}")]
    OutputAlreadyExists(PathBuf),
}

pub type CliResult<T> = result::Result<T, CliError>;
