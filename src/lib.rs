//! This crate compiles plain text into G-code for pen plotters.
//!
//! The text is drawn with a library of stroke glyphs, loaded from a directory of definition
//! files. It is wrapped to fit the paper by the [`layout`] engine, and the placed glyphs are
//! turned into motion commands by the [`gcode`] generator.
//!
//! ```
//! use penscript::config::Config;
//! use penscript::document::compile;
//! use penscript::glyphs::{Glyph, Library, Stroke, StrokeKind};
//! use penscript::units::Mm;
//!
//! let library: Library = vec![(
//!     'l',
//!     Glyph::new(vec![
//!         Stroke::new(StrokeKind::Move, Mm(0.0), Mm(0.0)),
//!         Stroke::new(StrokeKind::Write, Mm(0.0), Mm(7.0)),
//!     ]),
//! )]
//! .into_iter()
//! .collect();
//!
//! let compiled = compile("l l", &library, &Config::default()).unwrap();
//! assert!(compiled.to_gcode().starts_with("G28 ; Home all axes"));
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod config;
pub mod document;
pub mod gcode;
pub mod glyphs;
pub mod layout;
pub mod parser;
pub mod units;


use std::path::PathBuf;
use std::{error, fmt, io, result};

use crate::parser::error::LoadError;
use crate::units::Mm;

macro_rules! impl_from_error {
    ($type: ty, $variant: path, $from: ty) => {
        impl From<$from> for $type {
            fn from(e: $from) -> $type {
                $variant(e)
            }
        }
    };
}

/// The error type of the library.
#[derive(Debug)]
pub enum Error {
    /// Cannot read current directory.
    CannotReadCurrentDir,

    /// A glyph definition file is malformed.
    LoadError(LoadError),

    /// The glyph directory does not exist.
    GlyphDirectoryNotFound(PathBuf),

    /// A dimension or a speed is not a positive number.
    InvalidParameter {
        /// The name of the parameter.
        name: &'static str,

        /// The value it was given.
        value: f64,
    },

    /// The margins leave no room for text.
    PaperTooNarrow {
        /// The width of the paper.
        paper_width: Mm,

        /// The margin on each side.
        padding: Mm,
    },

    /// Error while reading the configuration.
    TomlDeError(toml::de::Error),

    /// Error while writing the configuration.
    TomlSerError(toml::ser::Error),

    /// Another io error occured.
    IoError(io::Error),
}

impl_from_error!(Error, Error::LoadError, LoadError);
impl_from_error!(Error, Error::TomlDeError, toml::de::Error);
impl_from_error!(Error, Error::TomlSerError, toml::ser::Error);
impl_from_error!(Error, Error::IoError, io::Error);

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotReadCurrentDir => write!(fmt, "cannot read current directory"),
            Error::LoadError(e) => write!(fmt, "malformed glyph definition\n{}", e),
            Error::GlyphDirectoryNotFound(path) => {
                write!(fmt, "couldn't find glyph directory \"{}\"", path.display())
            }
            Error::InvalidParameter { name, value } => {
                write!(fmt, "{} must be a positive number, got {}", name, value)
            }
            Error::PaperTooNarrow {
                paper_width,
                padding,
            } => write!(
                fmt,
                "a paper {}mm wide leaves no room for text with a {}mm padding",
                paper_width, padding
            ),
            Error::TomlDeError(e) => write!(fmt, "cannot read configuration: {}", e),
            Error::TomlSerError(e) => write!(fmt, "cannot write configuration: {}", e),
            Error::IoError(e) => write!(fmt, "an io error occured: {}", e),
        }
    }
}

impl error::Error for Error {}

/// The result type of the library.
pub type Result<T> = result::Result<T, Error>;
