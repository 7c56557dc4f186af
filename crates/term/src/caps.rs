//! Terminal capability detection.
//!
//! Detection is environment-based (`COLORTERM`, `TERM`, `NO_COLOR`): the
//! palette demos mutate color values every frame, which on a modern
//! terminal means emitting 24-bit SGR sequences, so "can redefine colors"
//! maps to truecolor support. The checks run before the session enters raw
//! mode, so a refusal prints normally and exits non-zero.

use std::env;

use crate::error::TermError;

/// What the current terminal can do, derived once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// 24-bit SGR color sequences honored.
    pub true_color: bool,
    /// At least a 256-color palette.
    pub colors_256: bool,
    /// Raw `TERM` value, for error messages.
    pub term: String,
}

impl Capabilities {
    /// Detect from the process environment.
    pub fn detect() -> Self {
        Self::from_env(
            &env::var("TERM").unwrap_or_default(),
            &env::var("COLORTERM").unwrap_or_default(),
            env::var_os("NO_COLOR").is_some(),
        )
    }

    /// Detection core, injectable for tests.
    fn from_env(term: &str, colorterm: &str, no_color: bool) -> Self {
        if no_color || term == "dumb" {
            return Self {
                true_color: false,
                colors_256: false,
                term: term.to_string(),
            };
        }

        let true_color = colorterm.contains("truecolor")
            || colorterm.contains("24bit")
            || term.contains("truecolor")
            || term.contains("kitty");
        let colors_256 = true_color || term.contains("256color");

        Self {
            true_color,
            colors_256,
            term: term.to_string(),
        }
    }

    /// Hard precondition for the palette demos: a large palette of
    /// redefinable colors. Not a recoverable runtime error.
    pub fn require_palette(&self) -> Result<(), TermError> {
        if !self.colors_256 {
            return Err(TermError::Capability(format!(
                "need at least 256 colors, TERM is {:?}",
                self.term
            )));
        }
        if !self.true_color {
            return Err(TermError::Capability(format!(
                "need redefinable (24-bit) colors, TERM is {:?}; try COLORTERM=truecolor",
                self.term
            )));
        }
        Ok(())
    }
}
