//! Greedy line breaking of a text into placed glyphs.
//!
//! Each paragraph of the text (the text is split on `\n`) is wrapped on its own. Words are
//! appended to the current line as long as they fit in the maximal line length, otherwise the
//! line is ended and the word starts the next one.
//!
//! A word that is longer than a whole line cannot be wrapped. It is written character by
//! character, and only broken when the next character would cross the right margin of the paper,
//! which is a looser limit than the line length.
//!
//! Every line break moves the cursor down by the line spacing. Once the cursor goes below the
//! bottom margin, nothing else is placed.

use std::collections::HashMap;

use crate::glyphs::{Glyph, Library};
use crate::layout::warning::{EmptyWarning, WarningType};
use crate::layout::{Break, BreakKind, Cursor, Item, Layout, Parameters, Placement};
use crate::parser::utils::locate;
use crate::units::Mm;

/// Signals that the bottom of the paper was reached.
#[derive(Debug, Copy, Clone)]
struct PageFull;

/// The state of the layout of one text.
struct Typesetter<'a> {
    /// The whole text, used to locate warnings.
    text: &'a str,

    /// The glyphs available.
    library: &'a Library,

    /// The parameters of the layout.
    parameters: &'a Parameters,

    /// The glyphs already scaled to the font size, `None` for unknown characters.
    scaled: HashMap<char, Option<Glyph>>,

    /// The width of a space, scaled to the font size.
    space_width: Mm,

    /// The position of the next glyph.
    cursor: Cursor,

    /// The items produced so far.
    items: Vec<Item>,

    /// The warnings produced so far.
    warnings: Vec<EmptyWarning>,

    /// Whether some content was dropped.
    truncated: bool,
}

impl<'a> Typesetter<'a> {
    fn new(text: &'a str, library: &'a Library, parameters: &'a Parameters) -> Typesetter<'a> {
        Typesetter {
            text,
            library,
            parameters,
            scaled: HashMap::new(),
            space_width: library.space_width() * parameters.font_size,
            cursor: parameters.origin,
            items: vec![],
            warnings: vec![],
            truncated: false,
        }
    }

    /// Returns the scaled glyph of a character.
    fn glyph(&mut self, c: char) -> Option<Glyph> {
        let library = self.library;
        let font_size = self.parameters.font_size;

        self.scaled
            .entry(c)
            .or_insert_with(|| library.lookup(c).map(|glyph| glyph.scale(font_size)))
            .clone()
    }

    /// Returns the horizontal space a glyph takes inside a word.
    fn advance(&self, glyph: &Glyph) -> Mm {
        glyph.width() + self.parameters.letter_spacing
    }

    /// Finds the glyphs of a word, with the offset of their character in the text.
    ///
    /// Characters that are not in the library are skipped with a warning.
    fn measure(&mut self, offset: usize, word: &str) -> Vec<(usize, Glyph)> {
        let mut glyphs = vec![];

        for (index, c) in word.char_indices() {
            match self.glyph(c) {
                Some(glyph) => glyphs.push((offset + index, glyph)),
                None => self.warnings.push(EmptyWarning {
                    position: locate(self.text, offset + index),
                    ty: WarningType::UnknownCharacter(c),
                }),
            }
        }

        glyphs
    }

    /// Places a glyph at the cursor and moves the cursor after it.
    fn place(&mut self, glyph: Glyph) {
        let advance = self.advance(&glyph);

        self.items.push(Item::Glyph(Placement {
            glyph,
            x: self.cursor.x,
            y: self.cursor.y,
        }));

        self.cursor.x += advance;
    }

    /// Places a whole word at the cursor.
    fn place_word(&mut self, glyphs: Vec<(usize, Glyph)>) {
        for (_, glyph) in glyphs {
            self.place(glyph);
        }
    }

    /// Places a word that is too long for a line, breaking it at the edge of the paper.
    ///
    /// A glyph is never broken away from an empty line, even if it is wider than the paper.
    fn place_characters(&mut self, glyphs: Vec<(usize, Glyph)>) -> Result<(), PageFull> {
        for (offset, glyph) in glyphs {
            let overflows = self.cursor.x + self.advance(&glyph) > self.parameters.right_edge;

            if overflows && self.cursor.x > self.parameters.margin {
                self.new_line(BreakKind::Overflow, offset)?;
            }

            self.place(glyph);
        }

        Ok(())
    }

    /// Goes to the beginning of the next line.
    ///
    /// The offset is the position in the text of what comes next, in case it does not fit.
    fn new_line(&mut self, kind: BreakKind, offset: usize) -> Result<(), PageFull> {
        let y = self.cursor.y - self.parameters.line_spacing;

        if y < self.parameters.margin {
            self.truncate(offset);
            return Err(PageFull);
        }

        self.cursor = Cursor {
            x: self.parameters.margin,
            y,
        };

        self.items.push(Item::Break(Break {
            x: self.cursor.x,
            y,
            kind,
        }));

        Ok(())
    }

    /// Records that the text from the offset on is dropped.
    fn truncate(&mut self, offset: usize) {
        let rest = &self.text[offset..];
        let dropped = rest.trim_start();

        if dropped.is_empty() {
            return;
        }

        self.truncated = true;
        self.warnings.push(EmptyWarning {
            position: locate(self.text, offset + rest.len() - dropped.len()),
            ty: WarningType::Truncated,
        });
    }

    /// Lays out a paragraph, starting at the cursor, and ends its last line.
    fn paragraph(&mut self, start: usize, paragraph: &str) -> Result<(), PageFull> {
        let max_line_length = self.parameters.max_line_length;
        let space_width = self.space_width;

        // The width of the current line, `None` while the line is empty.
        let mut line_width: Option<Mm> = None;

        for (index, word) in words(paragraph) {
            let offset = start + index;
            let glyphs = self.measure(offset, word);
            let width: Mm = glyphs.iter().map(|(_, glyph)| self.advance(glyph)).sum();

            if let Some(current) = line_width {
                if current + space_width + width <= max_line_length {
                    self.cursor.x += space_width;
                    self.place_word(glyphs);
                    line_width = Some(current + space_width + width);
                    continue;
                }

                self.new_line(BreakKind::Wrap, offset)?;
            }

            if width > max_line_length {
                self.place_characters(glyphs)?;
                line_width = Some(self.cursor.x - self.parameters.margin);
            } else {
                self.place_word(glyphs);
                line_width = Some(width);
            }
        }

        self.new_line(BreakKind::Paragraph, start + paragraph.len())
    }

    fn finish(self) -> Layout {
        Layout {
            origin: self.parameters.origin,
            items: self.items,
            warnings: self.warnings,
            truncated: self.truncated,
        }
    }
}

/// Splits a text into paragraphs at the characters whose glyph is a break, keeping the byte
/// offset of each paragraph in the text.
fn paragraphs<'t>(text: &'t str, library: &Library) -> Vec<(usize, &'t str)> {
    let mut paragraphs = vec![];
    let mut start = 0;

    for (index, c) in text.char_indices() {
        if library.lookup(c).map_or(false, Glyph::is_break) {
            paragraphs.push((start, &text[start..index]));
            start = index + c.len_utf8();
        }
    }

    paragraphs.push((start, &text[start..]));
    paragraphs
}

/// Splits a paragraph into words, with their byte offset in the paragraph.
fn words(paragraph: &str) -> Vec<(usize, &str)> {
    let mut words = vec![];
    let mut start = None;

    for (index, c) in paragraph.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push((s, &paragraph[s..index]));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => (),
        }
    }

    if let Some(s) = start {
        words.push((s, &paragraph[s..]));
    }

    words
}

/// Lays out a text on the paper.
///
/// The layout never fails: characters that have no glyph are skipped, and the text that does
/// not fit on the paper is dropped. Both are reported as warnings in the returned layout.
pub fn layout(text: &str, library: &Library, parameters: &Parameters) -> Layout {
    let mut typesetter = Typesetter::new(text, library, parameters);

    if !text.is_empty() {
        for (offset, paragraph) in paragraphs(text, library) {
            if typesetter.paragraph(offset, paragraph).is_err() {
                break;
            }
        }
    }

    typesetter.finish()
}
