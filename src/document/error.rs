use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Document contains a string that is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(u16),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
