//! Caesar cipher transform and frequency-analysis key recovery.
//!
//! Pieces:
//! 1. `cipher`: per-character shift, case preserving
//! 2. `dictionary`: uppercased word set and match fraction
//! 3. `letter_counts`: observed letter distribution
//! 4. `recovery`: ranked candidate shifts validated against the dictionary

pub mod cipher;
pub mod dictionary;
pub mod letter_counts;
pub mod recovery;

pub use cipher::{decrypt, encrypt, transform};
pub use dictionary::Dictionary;
pub use letter_counts::LetterCounts;
pub use recovery::{recover_shift_and_plaintext, KeyRecovery};

#[cfg(test)]
mod tests;
