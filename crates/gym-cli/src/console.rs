//! Line-oriented console over any reader/writer pair

use std::io::{self, BufRead, Write};

/// Prompting console used by the interactive menu
///
/// Generic over its streams so tests can script a session. Once input hits
/// EOF every further prompt returns an empty string and [`Console::is_closed`]
/// turns true.
pub struct Console<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Print `message` (no newline) and read one trimmed line
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }

    /// Print one line
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// True once input is exhausted
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Parse an integer, treating anything unparseable as absent
pub fn safe_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
