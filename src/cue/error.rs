use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CueError {
    #[error("Invalid MSF timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Invalid line format: {0}")]
    MalformedLine(String),

    #[error("Invalid {keyword} attribute: {line}")]
    MalformedAttribute { keyword: String, line: String },

    #[error("Invalid FILE line: {0}")]
    MalformedFile(String),

    #[error("CUE sheet has no head attributes")]
    EmptyHead,

    #[error("No files are referenced in the CUE sheet")]
    NoFiles,

    #[error("No tracks are declared in the CUE sheet")]
    NoTracks,

    #[error("Track {0} is declared before any FILE")]
    NoFileForTrack(String),

    #[error("Track {0} has no INDEX")]
    NoIndexForTrack(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Text is not valid {0}")]
    EncodingError(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

pub type CueResult<T> = Result<T, CueError>;
