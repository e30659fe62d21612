//! Input resolution and output files.

use anyhow::{Context, Result};
use caesar_core::{CaesarError, Direction, InputSource};
use std::path::{Path, PathBuf};

/// An argument naming an existing file is read from disk; anything else is the text itself.
pub fn resolve(arg: &str) -> InputSource {
    let path = Path::new(arg);
    if path.is_file() {
        InputSource::File(path.to_path_buf())
    } else {
        InputSource::Literal(arg.to_string())
    }
}

pub fn read(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Literal(text) => Ok(text.clone()),
        InputSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| CaesarError::io(path, e))?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        }
    }
}

/// Fixed output file name for a mode.
pub fn output_file_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Encrypt => "encryption_text",
        Direction::Decrypt => "decryption_text",
    }
}

/// Write `text` to the mode's output file inside `dir`.
pub fn write_output(dir: &Path, direction: Direction, text: &str) -> Result<PathBuf> {
    let path = dir.join(output_file_name(direction));
    std::fs::write(&path, text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote output file");
    Ok(path)
}
