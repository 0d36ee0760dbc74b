//! Error types for pdf-tts

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the PDF text collaborator
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The path does not exist; input resolution falls back to the next source
    #[error("PDF not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read PDF {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors that can occur while turning text into an audio file
#[derive(Error, Debug)]
pub enum TtsError {
    /// A setter was called without a value
    #[error("Missing value for `{setting}`")]
    MissingValue { setting: &'static str },

    #[error("AWS credentials error: {0}")]
    Credentials(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("No text could be extracted from {0}")]
    EmptyPdf(PathBuf),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Response did not contain an audio stream")]
    MissingAudioStream,

    #[error("Failed to read audio stream: {0}")]
    AudioStream(String),

    #[error("Failed to write audio file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TtsError>;
