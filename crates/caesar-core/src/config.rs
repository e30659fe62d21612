use crate::alphabet::ALPHABET_LEN;
use crate::error::{CaesarError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Word list used when no dictionary path is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Tuning knobs for key recovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Fraction of decrypted tokens that must be dictionary words.
    pub match_threshold: f64,
    /// Trim leading/trailing punctuation from tokens before lookup.
    pub strip_punctuation: bool,
    /// Upper bound on candidates tried, at most 26.
    pub max_candidates: usize,
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(CaesarError::InvalidConfig(format!(
                "match_threshold must be in (0, 1], got {}",
                self.match_threshold
            )));
        }
        if !(1..=ALPHABET_LEN as usize).contains(&self.max_candidates) {
            return Err(CaesarError::InvalidConfig(format!(
                "max_candidates must be in 1..=26, got {}",
                self.max_candidates
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CaesarError::io(path, e))?;
        Self::from_json_str(&json)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.5,
            strip_punctuation: false,
            max_candidates: ALPHABET_LEN as usize,
        }
    }
}
