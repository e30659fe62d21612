//! The 26-letter Latin alphabet and the shift arithmetic over it.

use crate::error::{CaesarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Uppercase letters in alphabet order.
pub const LETTERS: [char; ALPHABET_LEN as usize] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Zero-based alphabet position of an ASCII letter, ignoring case.
pub fn position(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter at `pos`. Positions wrap modulo 26.
pub fn letter_at(pos: u8) -> char {
    LETTERS[(pos % ALPHABET_LEN) as usize]
}

/// Which way a shift is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward shift.
    Encrypt,
    /// Backward shift.
    Decrypt,
}

/// A shift amount, always in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Shift(u8);

impl Shift {
    pub const ZERO: Shift = Shift(0);

    /// Strict constructor: anything outside `0..26` is rejected.
    pub fn new(value: i64) -> Result<Self> {
        if (0..ALPHABET_LEN as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CaesarError::InvalidShift { shift: value })
        }
    }

    /// Normalizes any integer into `0..26` with true modulo, so `-3` becomes `23`.
    pub fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(ALPHABET_LEN as i64) as u8)
    }

    /// Absolute distance between two alphabet positions.
    ///
    /// Deliberately not the circular distance: `B` against `E` gives 3, never 23.
    pub fn between(a: u8, b: u8) -> Self {
        Self::wrapping(i64::from(a.abs_diff(b)))
    }

    /// The shift that undoes this one when applied in the same direction.
    pub fn inverse(self) -> Self {
        Self::wrapping(i64::from(ALPHABET_LEN) - i64::from(self.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Shift {
    type Error = CaesarError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> u8 {
        shift.0
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
