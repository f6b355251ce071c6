use crate::cue::models::{FileType, Flag, TrackType};
use thiserror::Error;

/// A single malformed or out-of-context cue sheet line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Invalid command: '{0}'")]
    InvalidCommand(String),

    #[error("Couldn't find a closing quote in: '{0}'")]
    MissingClosingQuote(String),

    #[error("Trailing garbage after quoted string: '{0}'")]
    TrailingGarbage(String),

    #[error("Could not parse '{0}' as an int")]
    InvalidInt(String),

    #[error("Could not parse '{0}' as an MSF")]
    InvalidMSF(String),

    #[error("Unknown file type: '{0}'")]
    UnknownFileType(String),

    #[error("Unknown track type: '{0}'")]
    UnknownTrackType(String),

    #[error("Unknown flag: '{0}'")]
    UnknownFlag(String),

    #[error("No files (yet) in this cuesheet")]
    NoFiles,

    #[error("No tracks (yet) in FILE block of '{0}'")]
    NoTracks(String),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Error on line {line}: {error}")]
    Syntax { line: usize, error: SyntaxError },
}

pub type CueResult<T> = Result<T, CueError>;

#[derive(Debug, Error)]
pub enum UnparseError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Unknown file type: '{0:?}'")]
    UnknownFileType(FileType),

    #[error("Unknown track type: '{0:?}'")]
    UnknownTrackType(TrackType),

    #[error("Unknown track flag: '{0:?}'")]
    UnknownFlag(Flag),
}

pub type UnparseResult<T> = Result<T, UnparseError>;
