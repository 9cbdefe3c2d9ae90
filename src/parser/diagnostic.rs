//! Rendering of messages that point at a position of a file.
//!
//! Glyph definition errors and layout warnings are both shown the same way, quoting the line
//! they refer to:
//!
//! ```text
//! warning: no glyph for character 'ß'
//!  --> letter.txt:2:3
//!   |
//! 2 | éaß
//!   |   ^ this character will be skipped
//!   |
//!   = note: add a definition file for this character to the glyph directory
//! ```

use std::fmt;
use std::path::Path;

use colored::*;

use crate::parser::utils::{next_new_line, previous_new_line, replicate};
use crate::parser::Position;

/// How bad a diagnostic is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    /// The input cannot be used.
    Error,

    /// The input is used, but the result may not be the expected one.
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Severity::Error => text.red().bold(),
            Severity::Warning => text.yellow().bold(),
        }
    }
}

/// A message attached to a position.
#[derive(Debug, Clone)]
pub struct Diagnostic<'a> {
    /// The severity of the message.
    pub severity: Severity,

    /// The headline of the message.
    pub title: &'a str,

    /// The text written next to the caret.
    pub detail: &'a str,

    /// An optional hint, written at the end.
    pub note: Option<&'a str>,

    /// Where the message points.
    pub position: Position,
}

impl<'a> Diagnostic<'a> {
    /// Writes the diagnostic, quoting the line of `content` it points at.
    pub fn render(&self, fmt: &mut fmt::Formatter, path: &Path, content: &str) -> fmt::Result {
        let Position {
            line,
            column,
            offset,
        } = self.position;

        let quoted = &content[previous_new_line(content, offset)..next_new_line(content, offset)];
        let number = line.to_string();
        let gutter = replicate(' ', number.len());
        let bar = "|".blue().bold();

        writeln!(
            fmt,
            "{}{} {}",
            self.severity.paint(self.severity.label()),
            self.severity.paint(":"),
            self.title.bold()
        )?;
        writeln!(
            fmt,
            "{}{} {}:{}:{}",
            gutter,
            "-->".blue().bold(),
            path.display(),
            line,
            column
        )?;
        writeln!(fmt, "{} {}", gutter, bar)?;
        writeln!(
            fmt,
            "{} {} {}",
            number.blue().bold(),
            bar,
            quoted.trim_end_matches('\r')
        )?;
        writeln!(
            fmt,
            "{} {} {}{} {}",
            gutter,
            bar,
            replicate(' ', column.saturating_sub(1)),
            self.severity.paint("^"),
            self.severity.paint(self.detail)
        )?;
        writeln!(fmt, "{} {}", gutter, bar)?;

        if let Some(note) = self.note {
            let equals = "=".blue().bold();
            writeln!(fmt, "{} {} {} {}", gutter, equals, "note:".bold(), note)?;
        }

        Ok(())
    }
}
