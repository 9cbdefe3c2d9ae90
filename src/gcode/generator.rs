//! Generation of the motion commands of a layout.
//!
//! The generator keeps track of the pen, and only lifts or lowers it when the kind of stroke
//! changes. Every glyph starts with the pen up above its first point, and the pen is always
//! lifted before going to the next line, so that nothing is drawn across the paper.

use crate::config::MachineConfig;
use crate::gcode::{Command, PenState};
use crate::glyphs::{Stroke, StrokeKind};
use crate::layout::{BreakKind, Item, Layout};
use crate::units::Mm;

/// Lifts the pen if it is on the paper.
fn lift(pen: PenState, machine: &MachineConfig, commands: &mut Vec<Command>) -> PenState {
    if pen == PenState::Down {
        commands.push(Command::LiftPen {
            z: machine.z_height,
            feed: machine.z_speed,
        });
    }

    PenState::Up
}

/// Returns the last position the plotter was sent to.
fn position(commands: &[Command]) -> Option<(Mm, Mm)> {
    commands.iter().rev().find_map(|command| match *command {
        Command::Travel { x, y, .. } | Command::Write { x, y, .. } => Some((x, y)),
        _ => None,
    })
}

/// Follows a stroke, changing the state of the pen if needed.
fn stroke(
    pen: PenState,
    stroke: &Stroke,
    machine: &MachineConfig,
    commands: &mut Vec<Command>,
) -> PenState {
    match stroke.kind {
        StrokeKind::Write => {
            if pen == PenState::Up {
                commands.push(Command::LowerPen);
            }

            commands.push(Command::Write {
                x: stroke.x,
                y: stroke.y,
                feed: machine.write_speed,
            });

            PenState::Down
        }

        StrokeKind::Move => {
            let pen = lift(pen, machine, commands);

            commands.push(Command::Travel {
                x: stroke.x,
                y: stroke.y,
                feed: machine.travel_speed,
                comment: None,
            });

            pen
        }
    }
}

/// Generates the commands that plot a layout.
///
/// The commands start by homing the plotter, lifting the pen and moving to the origin of the
/// layout. They end with the pen lifted and the plotter homed.
pub fn generate(layout: &Layout, machine: &MachineConfig) -> Vec<Command> {
    let mut commands = vec![
        Command::Home {
            comment: "Home all axes",
        },
        Command::LiftPen {
            z: machine.z_height,
            feed: machine.z_speed,
        },
        Command::Travel {
            x: layout.origin.x,
            y: layout.origin.y,
            feed: machine.travel_speed,
            comment: Some("Move to start position"),
        },
    ];

    let mut pen = PenState::Up;

    for item in &layout.items {
        match item {
            Item::Glyph(placement) => {
                let glyph = placement.positioned();
                pen = lift(pen, machine, &mut commands);

                // A glyph that starts by writing is entered with the pen up.
                if let Some(first) = glyph.strokes().first() {
                    let start = (first.x, first.y);
                    if first.kind == StrokeKind::Write && position(&commands) != Some(start) {
                        let travel = Stroke::new(StrokeKind::Move, first.x, first.y);
                        pen = stroke(pen, &travel, machine, &mut commands);
                    }
                }

                for s in glyph.strokes() {
                    pen = stroke(pen, s, machine, &mut commands);
                }
            }

            Item::Break(line_break) => {
                pen = lift(pen, machine, &mut commands);

                let comment = match line_break.kind {
                    BreakKind::Wrap | BreakKind::Overflow => "New line",
                    BreakKind::Paragraph => "New paragraph",
                };

                commands.push(Command::Travel {
                    x: line_break.x,
                    y: line_break.y,
                    feed: machine.travel_speed,
                    comment: Some(comment),
                });
            }
        }
    }

    lift(pen, machine, &mut commands);
    commands.push(Command::Home {
        comment: "Return to home position",
    });

    commands
}
