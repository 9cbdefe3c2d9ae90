//! This module contains the tests that should succeed.

use std::error::Error;

use test_case::test_case;

use crate::glyphs::{Stroke, StrokeKind};
use crate::parser::combinators::{parse_content, parse_record};
use crate::parser::{parse, Span};
use crate::units::Mm;

#[test_case("G0 X1 Y2", StrokeKind::Move, 1.0, 2.0 ; "integers")]
#[test_case("G1 X-1.25 Y0.5", StrokeKind::Write, -1.25, 0.5 ; "negative")]
#[test_case("G1 X1e1 Y.5", StrokeKind::Write, 10.0, 0.5 ; "exponent")]
#[test_case("  G0 X3 Y4   ", StrokeKind::Move, 3.0, 4.0 ; "surrounding spaces")]
#[test_case("G1 X3 Y4\r", StrokeKind::Write, 3.0, 4.0 ; "carriage return")]
#[test_case("G1 X3 Y4 ; top bar", StrokeKind::Write, 3.0, 4.0 ; "trailing comment")]
fn test_record(record: &str, kind: StrokeKind, x: f64, y: f64) {
    let stroke = parse_record(Span::new(record)).unwrap().1;
    assert_eq!(stroke, Stroke::new(kind, Mm(x), Mm(y)));
}

#[test]
fn test_content() {
    let definition = parse_content(" L\nG0 X0 Y10\nG1 X0 Y0\n\nG1 X6 Y0\n").unwrap();
    assert_eq!(definition.character, 'L');
    assert_eq!(definition.glyph.strokes().len(), 3);
    assert_eq!(definition.glyph.width(), Mm(6.0));
}

#[test]
fn test_label_only() {
    let definition = parse_content(" .").unwrap();
    assert_eq!(definition.character, '.');
    assert!(definition.glyph.strokes().is_empty());
    assert_eq!(definition.glyph.width(), Mm(0.0));
}

#[test]
fn test_space_label() {
    let definition = parse_content("  \nG0 X0 Y0\nG0 X6 Y0\n").unwrap();
    assert_eq!(definition.character, ' ');
}

#[test]
fn test_file() -> Result<(), Box<dyn Error>> {
    let definition = parse("assets/tests/glyphs/upper/A.gcode")?;
    assert_eq!(definition.character, 'A');
    assert_eq!(definition.glyph.width(), Mm(5.0));
    assert_eq!(definition.glyph.strokes()[0].kind, StrokeKind::Move);
    assert_eq!(definition.glyph.strokes()[1].kind, StrokeKind::Write);
    Ok(())
}

#[test]
fn test_windows_line_endings() -> Result<(), Box<dyn Error>> {
    let definition = parse("assets/tests/glyphs/lower/o.gcode")?;
    assert_eq!(definition.character, 'o');
    assert_eq!(definition.glyph.strokes().len(), 5);
    assert_eq!(definition.glyph.width(), Mm(3.0));
    Ok(())
}
