//! This module contains the parser for glyph definition files.
//!
//! A glyph definition file starts with a label line, whose second character is the character
//! being defined, followed by one stroke record per line:
//!
//! ```text
//!  A
//! G0 X0.00 Y0.00
//! G1 X2.50 Y7.00
//! G1 X5.00 Y0.00
//! ```

pub mod combinators;
pub mod diagnostic;
pub mod error;
pub mod utils;

#[cfg(test)]
mod tests;

use nom_locate::LocatedSpan;

use crate::glyphs::Glyph;

/// This type will allow us to know where we are while we're parsing the content.
pub type Span<'a> = LocatedSpan<&'a str>;

/// A position is a span but without the reference to the complete str.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// The line number of the position.
    pub line: u32,

    /// The column number of the position.
    pub column: usize,

    /// The offset from the beginning of the string.
    pub offset: usize,
}

/// Returns the position of a span.
pub fn position(span: &Span) -> Position {
    Position {
        line: span.location_line(),
        column: span.get_utf8_column(),
        offset: span.location_offset(),
    }
}

/// A glyph definition that was successfully parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// The character the glyph is drawn for.
    pub character: char,

    /// The glyph itself.
    pub glyph: Glyph,
}

pub use combinators::parse;
