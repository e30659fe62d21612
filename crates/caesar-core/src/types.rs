use crate::alphabet::Shift;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a successful key recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recovery {
    pub plaintext: String,
    pub shift: Shift,
    /// Reference letter whose candidate validated.
    pub reference_letter: char,
    pub match_fraction: f64,
    /// Candidates tried, including the accepted one.
    pub attempts: usize,
}

/// A shift proposed by pairing the most frequent ciphertext letter with a reference letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub reference_letter: char,
    pub shift: Shift,
}

/// Where the text to transform comes from; resolved once by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    File(PathBuf),
}

impl InputSource {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}
