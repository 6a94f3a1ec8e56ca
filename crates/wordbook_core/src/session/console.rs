//! Line-oriented console I/O.
//!
//! # Invariants
//! - Replies are whitespace-trimmed.
//! - A failed read ends input for good; later reads return `None`.

use log::warn;
use std::io::{self, BufRead, Write};

/// Prompt/reply wrapper over a buffered reader and a writer.
///
/// `None` from a read means input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps `input` for replies and `output` for prompts and messages.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            input_closed: false,
        }
    }

    /// Writes `text` without a newline, flushes, then reads one reply.
    ///
    /// # Errors
    /// - Returns write/flush failures on `output`. Read failures are not
    ///   errors; see `read_reply`.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(self.read_reply())
    }

    /// Reads one trimmed line, or `None` once input is exhausted.
    pub fn read_reply(&mut self) -> Option<String> {
        if self.input_closed {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.input_closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                // Why: an unreadable line (e.g. invalid UTF-8) must still lead
                // to the final save instead of dropping unsaved words.
                warn!(
                    "event=console_read module=session status=error error_kind={:?}",
                    err.kind()
                );
                self.input_closed = true;
                None
            }
        }
    }

    /// Writer for free-form messages.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
