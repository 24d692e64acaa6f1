//! Typed angle units. Every angle taking API of [`Point`] accepts
//! `impl Into<Radians>`, so `Degrees` convert on the way in and a bare `f64`
//! is read as radians.

use crate::{point, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Sub};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
#[serde(from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Degrees(pub f64);

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
#[serde(from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Radians(pub f64);

const DEGREES: f64 = 180.0 / PI;

impl Radians {
    pub const ZERO: Self = Radians(0.0);
    pub const HALFPI: Self = Radians(FRAC_PI_2);
    pub const PI: Self = Radians(PI);

    /// Unit vector pointing in this direction. A non-finite angle gives NaN
    /// coordinates.
    #[inline]
    pub fn point(self) -> Point {
        let (sin, cos) = self.0.sin_cos();
        point(cos, sin)
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * DEGREES)
    }
}

impl Degrees {
    #[inline]
    pub fn point(self) -> Point {
        self.to_radians().point()
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 / DEGREES)
    }
}

impl Add for Radians {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

/// Bare numbers are radians.
impl From<f64> for Radians {
    #[inline]
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<f64> for Degrees {
    #[inline]
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<Degrees> for f64 {
    #[inline]
    fn from(d: Degrees) -> Self {
        d.0
    }
}

impl From<Radians> for f64 {
    #[inline]
    fn from(r: Radians) -> Self {
        r.0
    }
}
