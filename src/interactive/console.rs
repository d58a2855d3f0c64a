//! Console: a line source, an output sink and the theme used to paint output

use std::fmt::Display;
use std::io::{self, Write};

use super::lines::{InputError, LineSource};
use crate::output::{ColorRole, Theme};

pub struct Console<S, W> {
    lines: S,
    out: W,
    theme: Theme,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub const fn new(lines: S, out: W, theme: Theme) -> Self {
        Self { lines, out, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Write a line of text
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Write a line painted in a color role
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    pub fn say_as(&mut self, role: ColorRole, text: &str) -> io::Result<()> {
        let painted = self.theme.paint(role, text);
        self.say(painted)
    }

    /// Show a prompt and wait for the reply
    ///
    /// # Errors
    /// Propagates the line source's `InputError`; output failures become
    /// `InputError::Io`.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.lines.read_line()
    }

    /// Get the output sink back (used to inspect captured output)
    pub fn into_output(self) -> W {
        self.out
    }
}
