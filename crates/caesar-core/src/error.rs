use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("Invalid shift {shift}: must be in the range 0..26")]
    InvalidShift { shift: i64 },
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Ciphertext contains no alphabetic characters")]
    EmptyInput,
    #[error(
        "No candidate shift validated after {attempts} attempts; \
         the dictionary or reference frequency table may not match the ciphertext language"
    )]
    NoCandidateFound { attempts: usize },
    #[error("Invalid frequency table: {0}")]
    InvalidFrequencyTable(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CaesarError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CaesarError>;
