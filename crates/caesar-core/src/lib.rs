//! Shared types for the Caesar cipher toolkit: alphabet arithmetic, reference
//! frequency tables, analyzer configuration and errors.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod frequency;
pub mod types;

pub use alphabet::{Direction, Shift, ALPHABET_LEN};
pub use config::{AnalyzerConfig, DEFAULT_DICTIONARY_PATH};
pub use error::{CaesarError, Result};
pub use frequency::FrequencyTable;
pub use types::{Candidate, InputSource, Recovery};
