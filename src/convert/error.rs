use crate::cue::error::{CueError, UnparseError};
use crate::document::error::DocumentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    UnparseError(#[from] UnparseError),

    #[error(transparent)]
    DocumentError(#[from] DocumentError),

    #[error("Output file {0:?} already exists, use --force to overwrite")]
    OutputFileAlreadyExists(PathBuf),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
