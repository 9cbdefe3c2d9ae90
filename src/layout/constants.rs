//! Various constants used for laying out the glyphs of a document.

/// The part of the padding that is left after each glyph of a word.
pub const LETTER_SPACING_RATIO: f64 = 0.5;
