//! This module places glyphs on the paper.
//!
//! The layout engine turns a text into a sequence of [`Item`]s, in reading order: glyphs
//! positioned at absolute coordinates, and the line breaks between them. The code generator then
//! walks this sequence to produce the motion commands.

pub mod constants;
pub mod engine;
pub mod warning;

#[cfg(test)]
mod tests;

use crate::config::LayoutConfig;
use crate::glyphs::Glyph;
use crate::layout::constants::LETTER_SPACING_RATIO;
use crate::layout::warning::EmptyWarning;
use crate::units::Mm;

pub use engine::layout;

/// A point on the paper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    /// The x coordinate, from the left edge of the paper.
    pub x: Mm,

    /// The y coordinate, from the bottom edge of the paper.
    pub y: Mm,
}

/// The parameters of the layout, derived from the configuration.
///
/// Spacings are already multiplied by the font size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Parameters {
    /// The width after which words are wrapped on a new line.
    pub max_line_length: Mm,

    /// The vertical distance between two lines.
    pub line_spacing: Mm,

    /// The space added after each glyph of a word.
    pub letter_spacing: Mm,

    /// The empty border of the paper.
    pub margin: Mm,

    /// The rightmost x coordinate a glyph can reach when a word is broken.
    pub right_edge: Mm,

    /// Where the first line starts.
    pub origin: Cursor,

    /// The factor applied to every glyph.
    pub font_size: f64,
}

impl Parameters {
    /// Derives the layout parameters from the configuration.
    ///
    /// ```
    /// # use penscript::config::LayoutConfig;
    /// # use penscript::layout::Parameters;
    /// # use penscript::units::Mm;
    /// let config = LayoutConfig {
    ///     line_length: Mm(300.0),
    ///     padding: Mm(10.0),
    ///     paper_width: Mm(210.0),
    ///     font_size: 2.0,
    ///     ..LayoutConfig::default()
    /// };
    /// let parameters = Parameters::new(&config);
    /// assert_eq!(parameters.max_line_length, Mm(190.0));
    /// assert_eq!(parameters.letter_spacing, Mm(10.0));
    /// assert_eq!(parameters.right_edge, Mm(200.0));
    /// ```
    pub fn new(config: &LayoutConfig) -> Parameters {
        let margin = config.padding;

        Parameters {
            max_line_length: config
                .line_length
                .min(config.paper_width - config.padding * 2.0),
            line_spacing: config.line_spacing * config.font_size,
            letter_spacing: config.padding * (LETTER_SPACING_RATIO * config.font_size),
            margin,
            right_edge: config.paper_width - margin,
            origin: Cursor {
                x: margin,
                y: config.paper_height - margin,
            },
            font_size: config.font_size,
        }
    }
}

/// A glyph at its position on the paper.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The glyph, already scaled to the font size.
    pub glyph: Glyph,

    /// The x coordinate of the origin of the glyph.
    pub x: Mm,

    /// The y coordinate of the origin of the glyph.
    pub y: Mm,
}

impl Placement {
    /// Returns the glyph, translated to its position.
    pub fn positioned(&self) -> Glyph {
        self.glyph.translate(self.x, self.y)
    }
}

/// Why a line ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BreakKind {
    /// The next word did not fit on the line.
    Wrap,

    /// A word too long for any line reached the edge of the paper.
    Overflow,

    /// The paragraph ended.
    Paragraph,
}

/// A line break, holding the start of the next line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Break {
    /// The x coordinate where the next line starts.
    pub x: Mm,

    /// The y coordinate of the next line.
    pub y: Mm,

    /// Why the line ended.
    pub kind: BreakKind,
}

/// An element of a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// A glyph to draw.
    Glyph(Placement),

    /// A line break.
    Break(Break),
}

/// The result of the layout of a text.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Where the first line starts.
    pub origin: Cursor,

    /// The glyphs and line breaks, in reading order.
    pub items: Vec<Item>,

    /// The recoverable problems found in the text.
    pub warnings: Vec<EmptyWarning>,

    /// Whether some text did not fit on the paper.
    pub truncated: bool,
}

impl Layout {
    /// Returns an iterator over the placed glyphs.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.items.iter().filter_map(|item| match item {
            Item::Glyph(placement) => Some(placement),
            Item::Break(_) => None,
        })
    }

    /// Returns an iterator over the line breaks.
    pub fn breaks(&self) -> impl Iterator<Item = &Break> {
        self.items.iter().filter_map(|item| match item {
            Item::Break(line_break) => Some(line_break),
            Item::Glyph(_) => None,
        })
    }
}
