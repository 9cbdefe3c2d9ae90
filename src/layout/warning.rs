//! This module contains everything related to layout warnings.
//!
//! None of these stop the compilation: the text is still plotted, but the result may not be
//! the one that was expected.

use std::fmt;
use std::path::PathBuf;

use crate::parser::diagnostic::{Diagnostic, Severity};
use crate::parser::Position;

/// The different types of warning that can occur.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WarningType {
    /// A character has no glyph in the library.
    UnknownCharacter(char),

    /// The text reached the bottom of the paper.
    Truncated,
}

impl WarningType {
    /// Returns the title of the warning.
    pub fn title(self) -> String {
        match self {
            WarningType::UnknownCharacter(c) => format!("no glyph for character {:?}", c),
            WarningType::Truncated => String::from("the text does not fit on the paper"),
        }
    }

    /// Returns the detail of the warning.
    pub fn detail(self) -> &'static str {
        match self {
            WarningType::UnknownCharacter(_) => "this character will be skipped",
            WarningType::Truncated => "nothing will be plotted from here",
        }
    }

    /// Returns a potential note.
    pub fn note(self) -> Option<&'static str> {
        match self {
            WarningType::UnknownCharacter(_) => {
                Some("add a definition file for this character to the glyph directory")
            }
            WarningType::Truncated => {
                Some("use a smaller font size or line spacing, or a taller paper")
            }
        }
    }
}

/// A warning that occured during the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyWarning {
    /// The position of the warning in the text.
    pub position: Position,

    /// The type of the warning.
    pub ty: WarningType,
}

/// A struct that contains many warnings that references a file.
#[derive(Debug)]
pub struct Warnings {
    /// The path to the corresponding file.
    pub path: PathBuf,

    /// The content that produced the warnings.
    pub content: String,

    /// The warnings produced.
    pub warnings: Vec<EmptyWarning>,
}

impl fmt::Display for Warnings {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for warning in &self.warnings {
            let title = warning.ty.title();

            Diagnostic {
                severity: Severity::Warning,
                title: &title,
                detail: warning.ty.detail(),
                note: warning.ty.note(),
                position: warning.position,
            }
            .render(fmt, &self.path, &self.content)?;
        }

        Ok(())
    }
}
