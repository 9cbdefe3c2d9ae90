//! This module contains everything related to glyph definition errors.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::parser::diagnostic::{Diagnostic, Severity};
use crate::parser::Position;

/// The different types errors that can occur while parsing a glyph definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// The label line has no character at its second position.
    MissingLabel,

    /// A line does not look like `G<0|1> X<float> Y<float>`.
    MalformedStroke,
}

impl ErrorType {
    /// Returns the title of the error.
    pub fn title(self) -> &'static str {
        match self {
            ErrorType::MissingLabel => "missing glyph label",
            ErrorType::MalformedStroke => "malformed stroke record",
        }
    }

    /// Returns the detail of the error.
    pub fn detail(self) -> &'static str {
        match self {
            ErrorType::MissingLabel => "expected the character of the glyph here",
            ErrorType::MalformedStroke => "expected `G<0|1> X<float> Y<float>` here",
        }
    }

    /// Returns an optional note.
    pub fn note(self) -> Option<&'static str> {
        match self {
            ErrorType::MissingLabel => {
                Some("the first line must be a space followed by the character, e.g. ' A'")
            }
            ErrorType::MalformedStroke => {
                Some("G0 moves with the pen up, G1 draws with the pen down")
            }
        }
    }
}

/// An error that occured during the parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyError {
    /// The position of the error.
    pub position: Position,

    /// The type of the error.
    pub ty: ErrorType,
}

/// The errors found in one glyph definition file.
#[derive(Debug)]
pub struct LoadError {
    /// The path to the corresponding file.
    pub path: PathBuf,

    /// The content that produced the errors.
    pub content: String,

    /// The errors that were produced.
    pub errors: Vec<EmptyError>,
}

impl fmt::Display for LoadError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for error in &self.errors {
            Diagnostic {
                severity: Severity::Error,
                title: error.ty.title(),
                detail: error.ty.detail(),
                note: error.ty.note(),
                position: error.position,
            }
            .render(fmt, &self.path, &self.content)?;
        }

        Ok(())
    }
}

impl Error for LoadError {}
