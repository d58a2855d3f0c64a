//! Line sources
//!
//! All blocking input goes through `LineSource`. The terminal implementation
//! catches Ctrl-C itself; tests replay a fixed script.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveLeft,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode},
};

/// Why a line could not be read
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input interrupted")]
    Interrupted,
    #[error("input closed")]
    Closed,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Player-initiated end of input (Ctrl-C, Ctrl-D, end of stream)
    #[must_use]
    pub const fn is_graceful(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Closed)
    }
}

/// Source of input lines, one per prompt
pub trait LineSource {
    /// Block until a full line is available, without its line terminator
    ///
    /// # Errors
    /// `InputError::Interrupted` on cancellation, `InputError::Closed` at end of
    /// input, `InputError::Io` for anything else.
    fn read_line(&mut self) -> Result<String, InputError>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> Result<String, InputError> {
        (**self).read_line()
    }
}

/// Lines from any buffered reader (piped stdin, files, `Cursor`)
///
/// A Ctrl-C while blocked here is handled by the process-wide handler in
/// `interactive::interrupt`; this source only ever reports `Closed` or `Io`.
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => Err(e.into()),
        }
    }
}

/// How a `ScriptedLines` source ends once its script runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEnd {
    Closed,
    Interrupted,
}

/// Replays a fixed list of lines
#[derive(Debug, Clone)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    end: ScriptEnd,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            end: ScriptEnd::Closed,
        }
    }

    /// Report an interrupt, rather than end of input, once the script is exhausted
    #[must_use]
    pub const fn then_interrupt(mut self) -> Self {
        self.end = ScriptEnd::Interrupted;
        self
    }

    /// Lines not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self) -> Result<String, InputError> {
        self.lines.pop_front().ok_or(match self.end {
            ScriptEnd::Closed => InputError::Closed,
            ScriptEnd::Interrupted => InputError::Interrupted,
        })
    }
}

/// Interactive terminal input read key by key in raw mode
///
/// Raw mode is only held while a line is being typed, so ordinary output between
/// prompts behaves normally.
#[derive(Debug, Default)]
pub struct TerminalLines;

impl TerminalLines {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineSource for TerminalLines {
    fn read_line(&mut self) -> Result<String, InputError> {
        enable_raw_mode()?;
        let result = read_raw_line(&mut io::stdout());
        disable_raw_mode()?;
        result
    }
}

fn read_raw_line(out: &mut impl Write) -> Result<String, InputError> {
    let mut line = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (Windows also reports releases)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                queue!(out, Print("\r\n"))?;
                out.flush()?;
                return Err(InputError::Interrupted);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if line.is_empty() {
                    queue!(out, Print("\r\n"))?;
                    out.flush()?;
                    return Err(InputError::Closed);
                }
            }
            KeyCode::Enter => {
                queue!(out, Print("\r\n"))?;
                out.flush()?;
                return Ok(line);
            }
            KeyCode::Backspace => {
                if line.pop().is_some() {
                    queue!(out, MoveLeft(1), Print(' '), MoveLeft(1))?;
                    out.flush()?;
                }
            }
            KeyCode::Char(c) => {
                line.push(c);
                queue!(out, Print(c))?;
                out.flush()?;
            }
            _ => {}
        }
    }
}
