use anyhow::{anyhow, Context, Result};
use std::io::{self, BufRead, BufReader, Stdin};

use crate::output::{Message, Prompt, QuizOutput};

#[cfg(test)]
pub mod mock;

pub trait QuizInput {
    /// Blocks until a full line is available. `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Reads answers line by line from any buffered source, stdin in practice.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl LineInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        LineInput::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> QuizInput for LineInput<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut bytes)
            .context("could not read input")?;
        if bytes_read == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and are rejected as a choice.
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Accepts plain decimal numbers in `1..=max`.
pub fn parse_choice(raw: &str, max: usize) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>()
        .ok()
        .filter(|choice| (1..=max).contains(choice))
}

/// Prompts until a valid number is entered and returns it, 1-based.
pub fn ask<I: QuizInput, O: QuizOutput>(
    input: &mut I,
    output: &mut O,
    prompt: Prompt,
) -> Result<usize> {
    loop {
        output.prompt(&prompt)?;
        let line = match input.read_line()? {
            Some(line) => line,
            None => {
                output.say(&Message::InputClosed);
                return Err(anyhow!("input closed while waiting for {:?}", prompt));
            }
        };
        if let Some(choice) = parse_choice(&line, prompt.max()) {
            return Ok(choice);
        }
        output.say(&Message::InvalidChoice(prompt));
    }
}
