//! Observed letter distribution of a ciphertext.

use caesar_core::alphabet::{self, ALPHABET_LEN};

/// Per-letter occurrence counts, case-folded. Non-letters are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [usize; ALPHABET_LEN as usize],
    total: usize,
}

impl LetterCounts {
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN as usize];
        let mut total = 0;
        for pos in text.chars().filter_map(alphabet::position) {
            counts[pos as usize] += 1;
            total += 1;
        }
        Self { counts, total }
    }

    pub fn count(&self, letter: char) -> usize {
        alphabet::position(letter).map_or(0, |pos| self.counts[pos as usize])
    }

    /// Number of letters counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Most frequent letter, uppercase. Ties go to the alphabetically first letter.
    pub fn most_frequent(&self) -> Option<char> {
        if self.total == 0 {
            return None;
        }
        let mut best = 0;
        for (pos, &count) in self.counts.iter().enumerate().skip(1) {
            if count > self.counts[best] {
                best = pos;
            }
        }
        Some(alphabet::letter_at(best as u8))
    }
}
