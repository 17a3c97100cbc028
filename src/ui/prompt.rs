use std::io::{BufRead, Read, Write};

use crate::error::GameError;
use crate::game::COLS;

/// Parse a 1-based column label (`1..=COLS`) into a 0-based column.
pub fn parse_column(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(label) if (1..=COLS).contains(&label) => Some(label - 1),
        _ => None,
    }
}

/// Longest answer line accepted, terminator included
pub const MAX_LINE_BYTES: u64 = 64;

/// Accept exactly `y` or `n`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Line-oriented question/answer channel over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Write text and flush so prompts show before blocking on input
    pub fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator.
    ///
    /// Returns `None` for a line that is not UTF-8 or longer than
    /// [`MAX_LINE_BYTES`]; the rest of an overlong line is discarded.
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        let n = (&mut self.input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Err(GameError::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if n as u64 == MAX_LINE_BYTES {
            self.skip_rest_of_line()?;
            return Ok(None);
        }

        Ok(String::from_utf8(buf).ok())
    }

    /// Consume input up to and including the next newline, in bounded chunks
    fn skip_rest_of_line(&mut self) -> Result<(), GameError> {
        loop {
            let mut chunk = Vec::new();
            let n = (&mut self.input)
                .take(MAX_LINE_BYTES)
                .read_until(b'\n', &mut chunk)?;
            if n == 0 || chunk.last() == Some(&b'\n') {
                return Ok(());
            }
        }
    }

    /// Ask until `parse` accepts an answer, printing `retry` after each
    /// rejected line.
    fn ask<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, GameError> {
        self.say(question)?;
        loop {
            match self.read_line()? {
                Some(line) => {
                    if let Some(answer) = parse(&line) {
                        return Ok(answer);
                    }
                    tracing::debug!(input = %line, "rejected input");
                }
                None => tracing::debug!("rejected unreadable input line"),
            }
            self.say(retry)?;
        }
    }

    /// Ask for a column; returns it 0-based.
    pub fn ask_column(&mut self, question: &str) -> Result<usize, GameError> {
        self.ask(question, "Guess not valid: ", parse_column)
    }

    /// Ask a `y`/`n` question.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, GameError> {
        self.ask(question, "Input not valid: ", parse_yes_no)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
