//! This module contains the motion commands sent to the plotter.
//!
//! Commands are written one per line:
//!
//! ```text
//! G28 ; Home all axes
//! G0 Z2.50 F2000 ; Lift pen
//! G1 Z0 F500 ; Lower pen
//! G0 X1.50 Y295.50 F8000 ; Move to start position
//! G1 X4.00 Y302.50 F2000
//! ```
//!
//! The text after `;` is a comment, ignored by the plotter.

pub mod generator;


use std::fmt;

use crate::units::{FeedRate, Mm};

pub use generator::generate;

/// The feed rate used to put the pen on the paper.
pub const LOWER_FEED_RATE: FeedRate = FeedRate(500.0);

/// Whether the pen touches the paper.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PenState {
    /// The pen is lifted.
    Up,

    /// The pen is on the paper.
    Down,
}

impl Default for PenState {
    fn default() -> PenState {
        PenState::Up
    }
}

/// A motion command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Moves every axis to its origin.
    Home {
        /// What the homing is for.
        comment: &'static str,
    },

    /// Lifts the pen off the paper.
    LiftPen {
        /// The height of the lifted pen.
        z: Mm,

        /// The speed of the pen.
        feed: FeedRate,
    },

    /// Puts the pen on the paper.
    LowerPen,

    /// Moves the pen in a straight line, lifted.
    Travel {
        /// The x coordinate of the target.
        x: Mm,

        /// The y coordinate of the target.
        y: Mm,

        /// The speed of the pen.
        feed: FeedRate,

        /// What the move is for, if it is not part of a glyph.
        comment: Option<&'static str>,
    },

    /// Draws a straight line.
    Write {
        /// The x coordinate of the target.
        x: Mm,

        /// The y coordinate of the target.
        y: Mm,

        /// The speed of the pen.
        feed: FeedRate,
    },
}

impl Command {
    /// Returns true if the command is a pen lift.
    pub fn is_lift(&self) -> bool {
        matches!(self, Command::LiftPen { .. })
    }

    /// Returns true if the command puts the pen down.
    pub fn is_lower(&self) -> bool {
        matches!(self, Command::LowerPen)
    }

    /// Returns true if the command homes the axes.
    pub fn is_home(&self) -> bool {
        matches!(self, Command::Home { .. })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Home { comment } => write!(fmt, "G28 ; {}", comment),
            Command::LiftPen { z, feed } => write!(fmt, "G0 Z{} F{} ; Lift pen", z, feed),
            Command::LowerPen => write!(fmt, "G1 Z0 F{} ; Lower pen", LOWER_FEED_RATE),
            Command::Travel { x, y, feed, comment } => {
                write!(fmt, "G0 X{} Y{} F{}", x, y, feed)?;
                if let Some(comment) = comment {
                    write!(fmt, " ; {}", comment)?;
                }
                Ok(())
            }
            Command::Write { x, y, feed } => write!(fmt, "G1 X{} Y{} F{}", x, y, feed),
        }
    }
}

/// Writes commands one per line.
pub fn serialize(commands: &[Command]) -> String {
    commands
        .iter()
        .map(Command::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
