//! Reference letter frequencies for the target language.
//!
//! Only the relative order of the values matters, so a table does not have to
//! sum to exactly 1.

use crate::alphabet::{self, ALPHABET_LEN, LETTERS};
use crate::error::{CaesarError, Result};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::path::Path;

/// English unigram frequencies, A through Z.
const ENGLISH: [f64; ALPHABET_LEN as usize] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966,
    0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987,
    0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Letter → expected relative frequency, one entry per letter.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    freqs: [f64; ALPHABET_LEN as usize],
}

impl FrequencyTable {
    pub fn english() -> Self {
        Self { freqs: ENGLISH }
    }

    /// Build from a letter map. Keys may be either case; all 26 letters are required.
    pub fn from_map(map: &HashMap<char, f64>) -> Result<Self> {
        let mut freqs = [f64::NAN; ALPHABET_LEN as usize];
        for (&letter, &freq) in map {
            let pos = alphabet::position(letter).ok_or_else(|| {
                CaesarError::InvalidFrequencyTable(format!("'{letter}' is not a letter"))
            })?;
            if !freqs[pos as usize].is_nan() {
                return Err(CaesarError::InvalidFrequencyTable(format!(
                    "letter '{}' appears more than once",
                    alphabet::letter_at(pos)
                )));
            }
            if !freq.is_finite() || !(0.0..=1.0).contains(&freq) {
                return Err(CaesarError::InvalidFrequencyTable(format!(
                    "frequency for '{letter}' must be within [0, 1], got {freq}"
                )));
            }
            freqs[pos as usize] = freq;
        }

        let missing: String = LETTERS
            .iter()
            .zip(freqs.iter())
            .filter(|(_, f)| f.is_nan())
            .map(|(l, _)| *l)
            .collect();
        if !missing.is_empty() {
            return Err(CaesarError::InvalidFrequencyTable(format!(
                "missing letters: {missing}"
            )));
        }

        Ok(Self { freqs })
    }

    /// Parse a JSON object such as `{"A": 0.08167, "B": 0.01492, ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;
        let mut map = HashMap::with_capacity(raw.len());
        for (key, freq) in raw {
            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(CaesarError::InvalidFrequencyTable(format!(
                        "key '{key}' is not a single letter"
                    )))
                }
            };
            if map.insert(letter.to_ascii_uppercase(), freq).is_some() {
                return Err(CaesarError::InvalidFrequencyTable(format!(
                    "letter '{}' appears more than once",
                    letter.to_ascii_uppercase()
                )));
            }
        }
        Self::from_map(&map)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CaesarError::io(path, e))?;
        let table = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded reference frequency table");
        Ok(table)
    }

    /// Frequency of `letter`, or `None` for non-letters.
    pub fn frequency(&self, letter: char) -> Option<f64> {
        alphabet::position(letter).map(|pos| self.freqs[pos as usize])
    }

    /// Letters by descending frequency; equal frequencies fall back to alphabetical order.
    pub fn ranked(&self) -> Vec<char> {
        let mut heap: BinaryHeap<(OrderedFloat<f64>, Reverse<char>)> = LETTERS
            .iter()
            .zip(self.freqs.iter())
            .map(|(&letter, &freq)| (OrderedFloat(freq), Reverse(letter)))
            .collect();

        let mut order = Vec::with_capacity(ALPHABET_LEN as usize);
        while let Some((_, Reverse(letter))) = heap.pop() {
            order.push(letter);
        }
        order
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}
