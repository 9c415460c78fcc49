//! Interactive prompt for the number of extra busses
//!
//! The prompt keeps asking until the operator enters a whole number between
//! zero and the number of ranked routes. Rejected answers are explained and
//! asked again; there is no retry limit.

use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::core::error::{Error, Result};

/// Question asked on every attempt
pub const PROMPT_MESSAGE: &str = "How many routes can have an extra bus? ";

/// Shown for non-integer or negative answers
pub const NON_NEGATIVE_MESSAGE: &str = "Please enter a non-negative integer.";

/// Shown for answers larger than the number of routes
pub const RANGE_MESSAGE: &str =
    "You must enter a number equal to or less than the number of routes.";

/// Why an answer was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{input}' is not an integer")]
    NotAnInteger { input: String },

    #[error("{input} is negative")]
    Negative { input: String },

    #[error("{requested} exceeds the {available} available routes")]
    OutOfRange { requested: String, available: usize },
}

impl InputError {
    /// Corrective message shown before asking again
    pub fn message(&self) -> &'static str {
        match self {
            InputError::NotAnInteger { .. } | InputError::Negative { .. } => NON_NEGATIVE_MESSAGE,
            InputError::OutOfRange { .. } => RANGE_MESSAGE,
        }
    }
}

/// Validate one answer against the number of available routes
///
/// Checks run in order: integer, non-negative, within `bound`. Integers too
/// large to represent are out of range rather than malformed.
pub fn validate_quantity(input: &str, bound: usize) -> std::result::Result<usize, InputError> {
    use std::num::IntErrorKind;

    let text = input.trim();
    let value = match text.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => InputError::OutOfRange {
                    requested: text.to_string(),
                    available: bound,
                },
                IntErrorKind::NegOverflow => InputError::Negative {
                    input: text.to_string(),
                },
                _ => InputError::NotAnInteger {
                    input: text.to_string(),
                },
            })
        }
    };

    if value < 0 {
        return Err(InputError::Negative {
            input: text.to_string(),
        });
    }

    match usize::try_from(value) {
        Ok(n) if n <= bound => Ok(n),
        _ => Err(InputError::OutOfRange {
            requested: text.to_string(),
            available: bound,
        }),
    }
}

/// Prompt bound to an input and an output stream
pub struct QuantityPrompt<R, W> {
    input: R,
    output: W,
    bound: usize,
}

impl<R: BufRead, W: Write> QuantityPrompt<R, W> {
    /// Create a prompt accepting answers from zero up to `bound`
    pub fn new(input: R, output: W, bound: usize) -> Self {
        Self {
            input,
            output,
            bound,
        }
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Ask `question` until a valid answer is given
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if the input ends first, or
    /// [`Error::Console`] if either stream fails.
    pub fn ask(&mut self, question: &str) -> Result<usize> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match validate_quantity(&line, self.bound) {
                Ok(n) => return Ok(n),
                Err(e) => {
                    debug!("Rejected answer: {e}");
                    writeln!(self.output, "{}", e.message())?;
                }
            }
        }
    }

    /// Release the streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
