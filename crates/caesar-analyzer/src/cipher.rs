//! Caesar shift transform.

use caesar_core::{Direction, Shift, ALPHABET_LEN};

/// Shift one character. Anything that is not an ASCII letter passes through unchanged.
pub fn transform(c: char, shift: Shift, direction: Direction) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    let offset = i16::from(c as u8 - base);
    let delta = i16::from(shift.value());
    let moved = match direction {
        Direction::Encrypt => offset + delta,
        Direction::Decrypt => offset - delta,
    };
    (base + moved.rem_euclid(i16::from(ALPHABET_LEN)) as u8) as char
}

/// Shift every character of `text`.
pub fn apply(text: &str, shift: Shift, direction: Direction) -> String {
    text.chars().map(|c| transform(c, shift, direction)).collect()
}

pub fn encrypt(text: &str, shift: Shift) -> String {
    apply(text, shift, Direction::Encrypt)
}

pub fn decrypt(text: &str, shift: Shift) -> String {
    apply(text, shift, Direction::Decrypt)
}
