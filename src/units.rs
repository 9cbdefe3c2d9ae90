//! Units used by penscript.
//!
//! Every length is expressed in millimeters on the paper, and every speed in millimeters per
//! minute, which is what the plotter firmware expects.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Millimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f64);

/// A feed rate, in millimeters per minute.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedRate(pub f64);

/// Measure of what is supposed to be positive infinity.
pub const PLUS_INFINITY: Mm = Mm(f64::INFINITY);

impl Mm {
    /// Returns the smallest of two lengths.
    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    /// Returns the largest of two lengths.
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }

    /// Returns true if the length is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Mm {
    type Output = Mm;

    fn add(self, other: Mm) -> Mm {
        Mm(self.0 + other.0)
    }
}

impl AddAssign for Mm {
    fn add_assign(&mut self, other: Mm) {
        self.0 += other.0;
    }
}

impl Sub for Mm {
    type Output = Mm;

    fn sub(self, other: Mm) -> Mm {
        Mm(self.0 - other.0)
    }
}

impl SubAssign for Mm {
    fn sub_assign(&mut self, other: Mm) {
        self.0 -= other.0;
    }
}

impl Mul<f64> for Mm {
    type Output = Mm;

    fn mul(self, factor: f64) -> Mm {
        Mm(self.0 * factor)
    }
}

impl Neg for Mm {
    type Output = Mm;

    fn neg(self) -> Mm {
        Mm(-self.0)
    }
}

impl std::iter::Sum for Mm {
    fn sum<I: Iterator<Item = Mm>>(iter: I) -> Mm {
        iter.fold(Mm(0.0), Add::add)
    }
}

/// Coordinates are always written with two fractional digits.
///
/// Negative zero is printed as zero, so that `-0.001` and `0.001` give the same output.
impl fmt::Display for Mm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        let value = if rounded == 0.0 { 0.0 } else { self.0 };
        write!(fmt, "{:.2}", value)
    }
}

impl fmt::Display for FeedRate {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}
