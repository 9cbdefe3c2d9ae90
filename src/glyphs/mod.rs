//! This module contains the glyphs that the plotter can draw.
//!
//! A glyph is a small drawing, made of strokes in its own coordinate system. Glyphs are loaded
//! once from a directory of definition files (see [`library`]), then scaled to the font size
//! and translated to their position on the paper.

pub mod library;

use crate::units::{Mm, PLUS_INFINITY};

pub use library::Library;

/// The width of the space glyph, in glyph units, when the library does not define one.
pub const DEFAULT_SPACE_WIDTH: Mm = Mm(4.0);

/// What the pen does while following a stroke.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrokeKind {
    /// The pen travels to the endpoint without touching the paper.
    Move,

    /// The pen draws a line to the endpoint.
    Write,
}

/// A single pen instruction, going from the current point to its endpoint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Whether the pen is up or down during the stroke.
    pub kind: StrokeKind,

    /// The x coordinate of the endpoint.
    pub x: Mm,

    /// The y coordinate of the endpoint.
    pub y: Mm,
}

impl Stroke {
    /// Creates a new stroke.
    pub fn new(kind: StrokeKind, x: Mm, y: Mm) -> Stroke {
        Stroke { kind, x, y }
    }

    /// Returns the same stroke, moved by the offset.
    pub fn translate(self, dx: Mm, dy: Mm) -> Stroke {
        Stroke::new(self.kind, self.x + dx, self.y + dy)
    }

    /// Returns the same stroke, with its endpoint scaled by a factor.
    pub fn scale(self, factor: f64) -> Stroke {
        Stroke::new(self.kind, self.x * factor, self.y * factor)
    }
}

/// A drawable character.
///
/// The strokes are traced in order, starting with the pen up.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    strokes: Vec<Stroke>,
    width: Mm,
}

impl Glyph {
    /// Creates a glyph from its strokes, measuring its width.
    ///
    /// The width is the horizontal extent of the endpoints of the written strokes. A glyph that
    /// never writes has a zero width.
    ///
    /// ```
    /// # use penscript::glyphs::{Glyph, Stroke, StrokeKind};
    /// # use penscript::units::Mm;
    /// let glyph = Glyph::new(vec![
    ///     Stroke::new(StrokeKind::Move, Mm(-3.0), Mm(0.0)),
    ///     Stroke::new(StrokeKind::Write, Mm(1.0), Mm(0.0)),
    ///     Stroke::new(StrokeKind::Write, Mm(3.5), Mm(2.0)),
    /// ]);
    /// assert_eq!(glyph.width(), Mm(2.5));
    /// ```
    pub fn new(strokes: Vec<Stroke>) -> Glyph {
        let mut written = strokes
            .iter()
            .filter(|stroke| stroke.kind == StrokeKind::Write)
            .map(|stroke| stroke.x);

        let width = match written.next() {
            Some(first) => {
                let (min, max) = written.fold((first, first), |(min, max), x| {
                    (min.min(x), max.max(x))
                });
                max - min
            }
            None => Mm(0.0),
        };

        Glyph { strokes, width }
    }

    /// Creates a glyph with an explicit width.
    pub fn with_width(strokes: Vec<Stroke>, width: Mm) -> Glyph {
        Glyph { strokes, width }
    }

    /// The blank glyph used between words.
    pub fn space() -> Glyph {
        Glyph::with_width(vec![], DEFAULT_SPACE_WIDTH)
    }

    /// The glyph that marks a forced line break.
    ///
    /// It is infinitely wide, so nothing can ever fit on the same line. The layout starts a new
    /// paragraph at every character whose glyph is a break.
    pub fn newline() -> Glyph {
        Glyph::with_width(vec![], PLUS_INFINITY)
    }

    /// Returns the strokes of the glyph.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns the width of the glyph.
    pub fn width(&self) -> Mm {
        self.width
    }

    /// Returns true if the glyph forces a line break.
    pub fn is_break(&self) -> bool {
        !self.width.is_finite()
    }

    /// Returns a copy of the glyph moved by the offset.
    pub fn translate(&self, dx: Mm, dy: Mm) -> Glyph {
        Glyph {
            strokes: self.strokes.iter().map(|s| s.translate(dx, dy)).collect(),
            width: self.width,
        }
    }

    /// Returns a copy of the glyph where every coordinate and the width are multiplied by
    /// `factor`.
    pub fn scale(&self, factor: f64) -> Glyph {
        Glyph {
            strokes: self.strokes.iter().map(|s| s.scale(factor)).collect(),
            width: self.width * factor,
        }
    }
}
