//! This module compiles whole documents.
//!
//! Compiling a document validates the configuration, lays out the text and generates the
//! commands. It keeps no state between two compilations: the same text, configuration and glyph
//! library always give the same output.

use std::path::Path;

use crate::config::Config;
use crate::gcode::{self, Command};
use crate::glyphs::Library;
use crate::layout::warning::{EmptyWarning, Warnings};
use crate::layout::{self, Parameters};
use crate::Result;

/// A compiled document.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    /// The motion commands.
    pub commands: Vec<Command>,

    /// The recoverable problems found in the text.
    pub warnings: Vec<EmptyWarning>,

    /// Whether some text did not fit on the paper.
    pub truncated: bool,
}

impl Compiled {
    /// Returns the G-code of the document, one command per line.
    pub fn to_gcode(&self) -> String {
        gcode::serialize(&self.commands)
    }

    /// Attaches the warnings to the text they refer to, so they can be displayed.
    pub fn warnings<P: AsRef<Path>>(&self, path: P, text: &str) -> Warnings {
        Warnings {
            path: path.as_ref().to_path_buf(),
            content: text.to_owned(),
            warnings: self.warnings.clone(),
        }
    }
}

/// Compiles a text with a glyph library.
///
/// Nothing is generated if the configuration is invalid.
pub fn compile(text: &str, library: &Library, config: &Config) -> Result<Compiled> {
    config.validate()?;

    let parameters = Parameters::new(&config.layout);
    let layout = layout::layout(text, library, &parameters);
    let commands = gcode::generate(&layout, &config.machine);

    info!(
        "compiled {} glyphs into {} commands",
        layout.placements().count(),
        commands.len()
    );

    if layout.truncated {
        warn!("the text does not fit on the paper and was truncated");
    }

    Ok(Compiled {
        commands,
        warnings: layout.warnings,
        truncated: layout.truncated,
    })
}

/// Loads the glyph library of the configuration, and compiles a text with it.
pub fn render(text: &str, config: &Config) -> Result<Compiled> {
    config.validate()?;
    let library = Library::load(&config.glyphs)?;
    compile(text, &library, config)
}

#[cfg(test)]
mod tests {
    use super::{compile, render};
    use crate::config::{Config, LayoutConfig};
    use crate::gcode::Command;
    use crate::glyphs::{Glyph, Library, Stroke, StrokeKind};
    use crate::layout::warning::WarningType;
    use crate::units::{FeedRate, Mm};
    use crate::Error;

    fn library() -> Library {
        vec![
            (
                'A',
                Glyph::new(vec![
                    Stroke::new(StrokeKind::Write, Mm(0.0), Mm(0.0)),
                    Stroke::new(StrokeKind::Write, Mm(5.0), Mm(0.0)),
                ]),
            ),
            (' ', Glyph::with_width(vec![], Mm(4.0))),
        ]
        .into_iter()
        .collect()
    }

    fn config() -> Config {
        Config {
            layout: LayoutConfig {
                line_length: Mm(100.0),
                line_spacing: Mm(8.0),
                padding: Mm(2.0),
                paper_width: Mm(150.0),
                paper_height: Mm(150.0),
                font_size: 1.0,
            },
            ..Config::default()
        }
    }

    #[test]
    fn two_letters_on_one_line() {
        let compiled = compile("A A", &library(), &config()).unwrap();
        let commands = &compiled.commands;

        let writes: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                Command::Write { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();

        // Both letters are on the first line, the second one starts after the first letter,
        // its letter spacing and one space.
        assert_eq!(
            writes,
            vec![
                (Mm(2.0), Mm(148.0)),
                (Mm(7.0), Mm(148.0)),
                (Mm(12.0), Mm(148.0)),
                (Mm(17.0), Mm(148.0)),
            ]
        );

        // The lift of the preamble is not part of a pair.
        assert_eq!(commands.iter().filter(|c| c.is_lower()).count(), 2);
        assert_eq!(commands.iter().skip(2).filter(|c| c.is_lift()).count(), 2);

        assert!(commands[0].is_home());
        assert!(commands[1].is_lift());
        assert!(commands[commands.len() - 1].is_home());
        assert!(compiled.warnings.is_empty());
    }

    #[test]
    fn exact_output() {
        let compiled = compile("A A", &library(), &config()).unwrap();

        let expected = "\
G28 ; Home all axes
G0 Z2.50 F2000 ; Lift pen
G0 X2.00 Y148.00 F8000 ; Move to start position
G1 Z0 F500 ; Lower pen
G1 X2.00 Y148.00 F2000
G1 X7.00 Y148.00 F2000
G0 Z2.50 F2000 ; Lift pen
G0 X12.00 Y148.00 F8000
G1 Z0 F500 ; Lower pen
G1 X12.00 Y148.00 F2000
G1 X17.00 Y148.00 F2000
G0 Z2.50 F2000 ; Lift pen
G0 X2.00 Y140.00 F8000 ; New paragraph
G28 ; Return to home position";

        assert_eq!(compiled.to_gcode(), expected);
    }

    #[test]
    fn same_input_same_output() {
        let text = "A AAAA A\nAA  A\n\nA";
        let first = compile(text, &library(), &config()).unwrap().to_gcode();
        let second = compile(text, &library(), &config()).unwrap().to_gcode();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_is_only_bracketing() {
        let compiled = compile("", &library(), &config()).unwrap();
        let lines: Vec<_> = compiled.commands.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "G28 ; Home all axes",
                "G0 Z2.50 F2000 ; Lift pen",
                "G0 X2.00 Y148.00 F8000 ; Move to start position",
                "G28 ; Return to home position",
            ]
        );
    }

    #[test]
    fn unknown_characters_are_warnings() {
        let compiled = compile("A?A", &library(), &config()).unwrap();
        assert_eq!(compiled.warnings.len(), 1);
        assert_eq!(compiled.warnings[0].ty, WarningType::UnknownCharacter('?'));
        assert_eq!(compiled.warnings[0].position.column, 2);
        assert_eq!(compiled.commands.iter().filter(|c| c.is_lower()).count(), 2);
    }

    #[test]
    fn truncated_text_still_ends_with_postamble() {
        let mut config = config();
        config.layout.paper_height = Mm(20.0);

        let text = "A\nA\nA\nA";
        let compiled = compile(text, &library(), &config).unwrap();
        let commands = &compiled.commands;

        // Lines at 18, 10 and 2, the fourth one would be below the margin.
        assert!(compiled.truncated);
        assert_eq!(commands.iter().filter(|c| c.is_lower()).count(), 3);
        assert!(commands[commands.len() - 2].is_lift());
        assert!(commands[commands.len() - 1].is_home());
    }

    #[test]
    fn invalid_configuration_generates_nothing() {
        let mut config = config();
        config.machine.write_speed = FeedRate(-1.0);

        match compile("A", &library(), &config) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "write_speed"),
            _ => panic!("expected an invalid parameter"),
        }
    }

    #[test]
    fn render_loads_the_glyph_directory() {
        let mut config = config();
        config.glyphs = "assets/tests/glyphs".into();

        let compiled = render("Ao-", &config).unwrap();
        assert_eq!(compiled.commands.iter().filter(|c| c.is_lower()).count(), 4);
    }

    #[test]
    fn render_fails_on_malformed_glyphs() {
        let mut config = config();
        config.glyphs = "assets/tests/broken-library".into();

        match render("A", &config) {
            Err(Error::LoadError(_)) => (),
            _ => panic!("expected a load error"),
        }
    }
}
