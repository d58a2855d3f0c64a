//! Color themes
//!
//! Rendering code asks for a `ColorRole`, never for a concrete escape sequence.
//! Each painted span is reset at its end by `colored`.

use colored::{Color, Colorize};

/// What a piece of text means, independent of how it is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Title,
    Correct,
    Wrong,
    Warning,
    Highlight,
}

/// Mapping from color roles to terminal colors
///
/// There is no `reset` entry: `colored` appends the reset sequence to every
/// painted span, so colors never leak past the text they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Option<Color>,
    pub correct: Option<Color>,
    pub wrong: Option<Color>,
    pub warning: Option<Color>,
    pub highlight: Option<Color>,
}

impl Theme {
    /// Bold ANSI colors: cyan titles, green hits, red misses, yellow warnings,
    /// magenta highlights
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            title: Some(Color::Cyan),
            correct: Some(Color::Green),
            wrong: Some(Color::Red),
            warning: Some(Color::Yellow),
            highlight: Some(Color::Magenta),
        }
    }

    /// No escape sequences at all
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            title: None,
            correct: None,
            wrong: None,
            warning: None,
            highlight: None,
        }
    }

    #[must_use]
    pub fn from_flag(color: bool) -> Self {
        if color { Self::ansi() } else { Self::plain() }
    }

    #[must_use]
    pub const fn color_for(&self, role: ColorRole) -> Option<Color> {
        match role {
            ColorRole::Title => self.title,
            ColorRole::Correct => self.correct,
            ColorRole::Wrong => self.wrong,
            ColorRole::Warning => self.warning,
            ColorRole::Highlight => self.highlight,
        }
    }

    /// Paint `text` in the color assigned to `role`
    #[must_use]
    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        match self.color_for(role) {
            Some(color) => text.color(color).bold().to_string(),
            None => text.to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}
