//! This module contains all the functions needed for parsing glyph definitions.

// Allow redundant closure because of nom.
#![allow(clippy::redundant_closure)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::{anychar, char, multispace0, space0, space1};
use nom::combinator::{all_consuming, map_res, opt, rest, value, verify};
use nom::number::complete::recognize_float;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::glyphs::{Glyph, Stroke, StrokeKind};
use crate::parser::error::{EmptyError, ErrorType, LoadError};
use crate::parser::{position, Definition, Span};
use crate::units::Mm;
use crate::{Error, Result};

/// Parses one line of content, without its line ending.
pub fn parse_line(input: Span) -> IResult<Span, Span> {
    terminated(take_till(|c: char| c == '\n'), opt(char('\n')))(input)
}

/// Parses the label line of a definition, returning the character it defines.
/// ```
/// # use penscript::parser::Span;
/// # use penscript::parser::combinators::parse_label;
/// let label = parse_label(Span::new(" A")).unwrap().1;
/// assert_eq!(label, 'A');
/// assert!(parse_label(Span::new(" ")).is_err());
/// ```
pub fn parse_label(input: Span) -> IResult<Span, char> {
    preceded(anychar, verify(anychar, |c: &char| *c != '\r'))(input)
}

/// Parses the kind of a stroke.
/// ```
/// # use penscript::glyphs::StrokeKind;
/// # use penscript::parser::Span;
/// # use penscript::parser::combinators::parse_kind;
/// assert_eq!(parse_kind(Span::new("G0")).unwrap().1, StrokeKind::Move);
/// assert_eq!(parse_kind(Span::new("G1")).unwrap().1, StrokeKind::Write);
/// assert!(parse_kind(Span::new("G2")).is_err());
/// ```
pub fn parse_kind(input: Span) -> IResult<Span, StrokeKind> {
    preceded(
        tag("G"),
        alt((
            value(StrokeKind::Move, char('0')),
            value(StrokeKind::Write, char('1')),
        )),
    )(input)
}

/// Parses a floating point number.
pub fn parse_number(input: Span) -> IResult<Span, f64> {
    map_res(recognize_float, |x: Span| x.fragment().parse::<f64>())(input)
}

/// Parses a coordinate on a given axis, such as `X12.5`.
pub fn parse_coordinate<'a>(axis: char) -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Mm> {
    move |input: Span<'a>| {
        let (input, _) = char(axis)(input)?;
        let (input, value) = parse_number(input)?;
        Ok((input, Mm(value)))
    }
}

/// Parses a stroke.
/// ```
/// # use penscript::glyphs::{Stroke, StrokeKind};
/// # use penscript::parser::Span;
/// # use penscript::parser::combinators::parse_stroke;
/// # use penscript::units::Mm;
/// let stroke = parse_stroke(Span::new("G1 X2.5 Y-7")).unwrap().1;
/// assert_eq!(stroke, Stroke::new(StrokeKind::Write, Mm(2.5), Mm(-7.0)));
/// ```
pub fn parse_stroke(input: Span) -> IResult<Span, Stroke> {
    let (input, _) = space0(input)?;
    let (input, kind) = parse_kind(input)?;
    let (input, _) = space1(input)?;
    let (input, x) = parse_coordinate('X')(input)?;
    let (input, _) = space1(input)?;
    let (input, y) = parse_coordinate('Y')(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Stroke::new(kind, x, y)))
}

/// Parses a whole stroke record, which may end with a `; comment`.
pub fn parse_record(input: Span) -> IResult<Span, Stroke> {
    all_consuming(terminated(
        parse_stroke,
        pair(opt(preceded(char(';'), rest)), multispace0),
    ))(input)
}

/// Turns a nom failure into an error located where the parsing stopped.
fn located(error: nom::Err<nom::error::Error<Span>>, fallback: Span, ty: ErrorType) -> EmptyError {
    let span = match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
        nom::Err::Incomplete(_) => fallback,
    };

    EmptyError {
        position: position(&span),
        ty,
    }
}

/// Parses the content of a glyph definition file.
///
/// All the malformed lines are reported, not only the first one.
pub fn parse_content(content: &str) -> std::result::Result<Definition, Vec<EmptyError>> {
    let mut errors = vec![];
    let mut strokes = vec![];

    let input = Span::new(content);
    let (mut input, label) = match parse_line(input) {
        Ok(parsed) => parsed,
        Err(e) => return Err(vec![located(e, input, ErrorType::MissingLabel)]),
    };

    let character = match parse_label(label) {
        Ok((_, c)) => Some(c),
        Err(e) => {
            errors.push(located(e, label, ErrorType::MissingLabel));
            None
        }
    };

    while !input.fragment().is_empty() {
        let (next, line) = match parse_line(input) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(located(e, input, ErrorType::MalformedStroke));
                break;
            }
        };
        input = next;

        if line.fragment().trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok((_, stroke)) => strokes.push(stroke),
            Err(e) => errors.push(located(e, line, ErrorType::MalformedStroke)),
        }
    }

    match character {
        Some(character) if errors.is_empty() => Ok(Definition {
            character,
            glyph: Glyph::new(strokes),
        }),
        _ => Err(errors),
    }
}

/// Parses a glyph definition file from its path.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Definition> {
    let path = path.as_ref();
    let mut file = File::open(&path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    match parse_content(&content) {
        Ok(definition) => Ok(definition),
        Err(errors) => Err(Error::LoadError(LoadError {
            path: PathBuf::from(path),
            content,
            errors,
        })),
    }
}
