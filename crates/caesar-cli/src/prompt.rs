//! Interactive mode: ask for text, shift and direction on the terminal.

use anyhow::{bail, Result};
use caesar_core::{Direction, Shift};
use std::io::{BufRead, Write};

/// Answers collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub text: String,
    pub shift: Shift,
    pub direction: Direction,
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed while waiting for an answer");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prompt until every answer is valid. Shifts outside 0..26 wrap around.
pub fn collect<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Answers> {
    let text = ask(input, out, "Please type in your text: ")?;

    let shift = loop {
        let answer = ask(input, out, "Please type in your shift: ")?;
        match answer.trim().parse::<i64>() {
            Ok(n) => break Shift::wrapping(n),
            Err(_) => writeln!(out, "You did not enter an integer!")?,
        }
    };

    let direction = loop {
        let answer = ask(input, out, "Please type in 1 for encryption and 0 for decryption: ")?;
        match answer.trim() {
            "1" => break Direction::Encrypt,
            "0" => break Direction::Decrypt,
            _ => writeln!(out, "You did not type in one or zero")?,
        }
    };

    Ok(Answers { text, shift, direction })
}
