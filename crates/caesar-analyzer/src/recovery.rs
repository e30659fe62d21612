//! Key recovery: find the shift of a Caesar ciphertext without the key.
//!
//! The most frequent ciphertext letter is paired with each reference letter in
//! descending reference frequency. Each pairing proposes a shift equal to the
//! absolute distance between the two letters; the ciphertext is decrypted
//! under it and accepted once enough of its tokens are dictionary words.
//! At most one candidate is tried per reference letter, so the search ends
//! after 26 attempts at the latest.

use crate::cipher;
use crate::dictionary::Dictionary;
use crate::letter_counts::LetterCounts;
use caesar_core::alphabet;
use caesar_core::{AnalyzerConfig, CaesarError, Candidate, FrequencyTable, Recovery, Result, Shift};

/// Recovery engine bound to a reference table and a dictionary.
pub struct KeyRecovery<'a> {
    reference: &'a FrequencyTable,
    dictionary: &'a Dictionary,
    config: AnalyzerConfig,
}

impl<'a> KeyRecovery<'a> {
    pub fn new(reference: &'a FrequencyTable, dictionary: &'a Dictionary) -> Self {
        Self { reference, dictionary, config: AnalyzerConfig::default() }
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Ranked candidate shifts for `ciphertext`, without validation.
    pub fn candidates(&self, ciphertext: &str) -> Result<Vec<Candidate>> {
        let observed = LetterCounts::from_text(ciphertext)
            .most_frequent()
            .ok_or(CaesarError::EmptyInput)?;
        let observed_pos = alphabet::position(observed).ok_or(CaesarError::EmptyInput)?;

        Ok(self
            .reference
            .ranked()
            .into_iter()
            .take(self.config.max_candidates)
            .filter_map(|letter| {
                alphabet::position(letter).map(|pos| Candidate {
                    reference_letter: letter,
                    shift: Shift::between(observed_pos, pos),
                })
            })
            .collect())
    }

    /// Recover plaintext and shift, or fail with `EmptyInput` / `NoCandidateFound`.
    pub fn recover(&self, ciphertext: &str) -> Result<Recovery> {
        self.config.validate()?;
        let candidates = self.candidates(ciphertext)?;
        tracing::debug!(
            ranked = ?candidates
                .iter()
                .map(|c| (c.reference_letter, c.shift.value()))
                .collect::<Vec<_>>(),
            "ranked candidate shifts"
        );

        let mut attempts = 0;
        for candidate in candidates {
            attempts += 1;
            let plaintext = cipher::decrypt(ciphertext, candidate.shift);
            let fraction = self
                .dictionary
                .match_fraction(&plaintext, self.config.strip_punctuation);

            tracing::debug!(
                attempt = attempts,
                reference = %candidate.reference_letter,
                shift = %candidate.shift,
                match_fraction = ?fraction,
                "tried candidate shift"
            );

            // No tokens means nothing to validate against.
            let Some(fraction) = fraction else { continue };
            if fraction >= self.config.match_threshold {
                tracing::info!(shift = %candidate.shift, attempts, "recovered shift");
                return Ok(Recovery {
                    plaintext,
                    shift: candidate.shift,
                    reference_letter: candidate.reference_letter,
                    match_fraction: fraction,
                    attempts,
                });
            }
        }

        tracing::warn!(attempts, "no candidate shift validated");
        Err(CaesarError::NoCandidateFound { attempts })
    }
}

/// One-shot recovery with the default configuration.
pub fn recover_shift_and_plaintext(
    ciphertext: &str,
    reference: &FrequencyTable,
    dictionary: &Dictionary,
) -> Result<Recovery> {
    KeyRecovery::new(reference, dictionary).recover(ciphertext)
}
