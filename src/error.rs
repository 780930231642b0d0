use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PicasaError {
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Root folder is not a directory: {path}")]
    InvalidRoot { path: PathBuf },

    #[error("Invalid day-serial date '{value}': {source}")]
    InvalidDaySerial {
        value: String,
        source: ParseFloatError,
    },

    #[error("Day-serial date out of range: '{value}'")]
    DaySerialOutOfRange { value: String },

    #[error("Timestamp '{value}' is not in yyyy-MM-ddTHH:mm:ss+HH:mm form")]
    MalformedTimestamp { value: String },

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Duplicate key '{key}' in section [{section}]. file={file}")]
    DuplicateKey {
        file: PathBuf,
        section: String,
        key: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deserialization error at path '{path}': {source}")]
    Deserialization {
        path: String,
        source: serde_json::Error,
    },
}

impl PicasaError {
    /// True for the date decoding failures, which only cost the affected key.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            PicasaError::InvalidDaySerial { .. }
                | PicasaError::DaySerialOutOfRange { .. }
                | PicasaError::MalformedTimestamp { .. }
                | PicasaError::InvalidTimestamp { .. }
        )
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for PicasaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        PicasaError::Deserialization {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}
