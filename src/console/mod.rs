//! Line-oriented terminal front ends for both games.
//!
//! Everything here is generic over [`BufRead`] and [`Write`], so the games can
//! be driven by standard input or by a scripted byte slice.

use core::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::ConsoleError;

mod tictactoe;
mod twenty_one;

pub use tictactoe::MatchTable;
pub use twenty_one::TwentyOneTable;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// A pair of input and output streams with prompt helpers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        self.say("")
    }

    /// Clears the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "{CLEAR_SCREEN}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputClosed`] at end of input, or an I/O error.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Writes `prompt` and reads the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or reading fails.
    pub fn ask(&mut self, prompt: impl Display) -> Result<String, ConsoleError> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Asks for a non-empty name, reprompting until one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or reading fails.
    pub fn ask_name(&mut self, prompt: impl Display) -> Result<String, ConsoleError> {
        loop {
            let name = self.ask(&prompt)?;
            if !name.is_empty() {
                return Ok(name);
            }
            self.say("Sorry, please enter a name.")?;
        }
    }

    /// Returns the output stream, consuming the console.
    pub fn into_output(self) -> W {
        self.output
    }
}
