use crate::numerical::{self, or_zero, EPSILON};
use crate::{Degrees, Radians};
use log::trace;
use std::cell::Cell;

/// A mutable 2D point/vector.
///
/// Mutators work in place and return `&mut Self` so calls can be chained:
///
/// ```
/// use point2d::{Degrees, Point};
///
/// let mut p = Point::new(100.0, 0.0);
/// p.rotate(Degrees(90.0)).multiply_num(2.0).add_x(1.0);
/// assert!(p.is_close(&Point::new(1.0, 200.0), 1e-9));
/// ```
///
/// Besides its coordinates a point remembers the last orientation it was
/// given or reported, see [`Point::angle`] and [`Point::set_length`].
#[derive(Clone, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Radians. Only refreshed by angle reads on non-zero vectors and by the
    /// angle setters, never by writes to `x`/`y`.
    pub(crate) last_angle: Cell<f64>,
}

/// Builds a point from raw coordinates, NaN included.
#[inline]
pub const fn point(x: f64, y: f64) -> Point {
    Point {
        x,
        y,
        last_angle: Cell::new(0.0),
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Point {
    /// NaN coordinates are replaced by 0.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        point(or_zero(x), or_zero(y))
    }

    /// Vector of `length` pointing at `angle`. A bare `f64` is taken as radians.
    pub fn from_angle_with_length(angle: impl Into<Radians>, length: f64) -> Self {
        let mut p = point(length, 0.0);
        p.set_angle(angle);
        p
    }

    /// Component-wise minimum. Generally neither `a` nor `b`.
    #[inline]
    pub fn min(a: &Point, b: &Point) -> Point {
        point(a.x.min(b.x), a.y.min(b.y))
    }

    /// Component-wise maximum. Generally neither `a` nor `b`.
    #[inline]
    pub fn max(a: &Point, b: &Point) -> Point {
        point(a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn copy(&mut self, other: &Point) -> &mut Self {
        self.set(other.x, other.y)
    }

    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    #[inline]
    pub fn add(&mut self, other: &Point) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn add_num(&mut self, v: f64) -> &mut Self {
        self.x += v;
        self.y += v;
        self
    }

    #[inline]
    pub fn add_x(&mut self, v: f64) -> &mut Self {
        self.x += v;
        self
    }

    #[inline]
    pub fn add_y(&mut self, v: f64) -> &mut Self {
        self.y += v;
        self
    }

    #[inline]
    pub fn subtract(&mut self, other: &Point) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    pub fn subtract_num(&mut self, v: f64) -> &mut Self {
        self.x -= v;
        self.y -= v;
        self
    }

    #[inline]
    pub fn subtract_x(&mut self, v: f64) -> &mut Self {
        self.x -= v;
        self
    }

    #[inline]
    pub fn subtract_y(&mut self, v: f64) -> &mut Self {
        self.y -= v;
        self
    }

    #[inline]
    pub fn multiply(&mut self, other: &Point) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    #[inline]
    pub fn multiply_num(&mut self, v: f64) -> &mut Self {
        self.x *= v;
        self.y *= v;
        self
    }

    #[inline]
    pub fn multiply_x(&mut self, v: f64) -> &mut Self {
        self.x *= v;
        self
    }

    #[inline]
    pub fn multiply_y(&mut self, v: f64) -> &mut Self {
        self.y *= v;
        self
    }

    /// Per-axis division with plain float semantics: a zero axis in `other`
    /// gives infinities or NaN.
    #[inline]
    pub fn divide(&mut self, other: &Point) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    /// Dividing by exactly zero sets both coordinates to zero.
    #[inline]
    pub fn divide_num(&mut self, v: f64) -> &mut Self {
        if v == 0.0 {
            trace!("divide_num by zero, saturating {:?} to zero", self);
            return self.zero();
        }
        self.x /= v;
        self.y /= v;
        self
    }

    /// Dividing by exactly zero sets `x` to zero.
    #[inline]
    pub fn divide_x(&mut self, v: f64) -> &mut Self {
        if v == 0.0 {
            trace!("divide_x by zero, saturating x of {:?} to zero", self);
            self.x = 0.0;
        } else {
            self.x /= v;
        }
        self
    }

    /// Dividing by exactly zero sets `y` to zero.
    #[inline]
    pub fn divide_y(&mut self, v: f64) -> &mut Self {
        if v == 0.0 {
            trace!("divide_y by zero, saturating y of {:?} to zero", self);
            self.y = 0.0;
        } else {
            self.y /= v;
        }
        self
    }

    /// Float remainder, the sign follows the dividend.
    #[inline]
    pub fn modulo(&mut self, other: &Point) -> &mut Self {
        self.x %= other.x;
        self.y %= other.y;
        self
    }

    #[inline]
    pub fn modulo_num(&mut self, v: f64) -> &mut Self {
        self.x %= v;
        self.y %= v;
        self
    }

    #[inline]
    pub fn modulo_x(&mut self, v: f64) -> &mut Self {
        self.x %= v;
        self
    }

    #[inline]
    pub fn modulo_y(&mut self, v: f64) -> &mut Self {
        self.y %= v;
        self
    }

    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    #[inline]
    pub fn invert_x(&mut self) -> &mut Self {
        self.x = -self.x;
        self
    }

    #[inline]
    pub fn invert_y(&mut self) -> &mut Self {
        self.y = -self.y;
        self
    }

    /// Per-axis reciprocal, `(1/x, 1/y)`.
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        self.x = 1.0 / self.x;
        self.y = 1.0 / self.y;
        self
    }

    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self
    }

    /// Halves round toward positive infinity: `(-2.5, 2.5) -> (-2, 3)`
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = numerical::round_half_up(self.x);
        self.y = numerical::round_half_up(self.y);
        self
    }

    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        self.x = self.x.ceil();
        self.y = self.y.ceil();
        self
    }

    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Rounds both coordinates to `digits` fractional digits.
    #[inline]
    pub fn round_to(&mut self, digits: i32) -> &mut Self {
        self.x = numerical::round_to(self.x, digits);
        self.y = numerical::round_to(self.y, digits);
        self
    }

    #[inline]
    pub fn round_to_default(&mut self) -> &mut Self {
        self.round_to(numerical::DEFAULT_FIXED_DIGITS)
    }

    /// Linear interpolation, `amount = 0` keeps self and `amount = 1` gives `other`.
    #[inline]
    pub fn mix(&mut self, other: &Point, amount: f64) -> &mut Self {
        self.x = numerical::mix(self.x, other.x, amount);
        self.y = numerical::mix(self.y, other.y, amount);
        self
    }

    #[inline]
    pub fn mix_half(&mut self, other: &Point) -> &mut Self {
        self.mix(other, 0.5)
    }

    /// Scales to `length` keeping the direction. A zero vector stays zero.
    pub fn normalize(&mut self, length: f64) -> &mut Self {
        let current = self.length();
        let scale = if current != 0.0 {
            length / current
        } else {
            trace!("normalizing a zero vector");
            0.0
        };
        self.multiply_num(scale)
    }

    #[inline]
    pub fn normalize_unit(&mut self) -> &mut Self {
        self.normalize(1.0)
    }

    /// Scales to `length`. A zero vector is rebuilt along its remembered
    /// angle, so `p.zero(); p.set_length(1.0)` points where `p` used to.
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        if self.is_zero() {
            let (sin, cos) = self.last_angle.get().sin_cos();
            return self.set(cos * length, sin * length);
        }
        let scale = length / self.length();
        self.multiply_num(scale)
    }

    pub fn limit_length(&mut self, length: f64) -> &mut Self {
        let current = self.length();
        if current > length {
            self.multiply_num(length / current);
        }
        self
    }

    /// Rotates counter-clockwise around the origin. A bare `f64` is taken as
    /// radians.
    #[inline]
    pub fn rotate(&mut self, angle: impl Into<Radians>) -> &mut Self {
        self.rotate_about(angle.into(), None)
    }

    /// Rotates counter-clockwise around `center`. A bare `f64` is taken as
    /// radians.
    #[inline]
    pub fn rotate_around(&mut self, angle: impl Into<Radians>, center: &Point) -> &mut Self {
        self.rotate_about(angle.into(), Some(center))
    }

    fn rotate_about(&mut self, angle: Radians, center: Option<&Point>) -> &mut Self {
        if angle.0 == 0.0 {
            return self;
        }
        let (sin, cos) = angle.0.sin_cos();
        let (cx, cy) = center.map_or((0.0, 0.0), |c| (c.x, c.y));
        let x = self.x - cx;
        let y = self.y - cy;
        self.x = x * cos - y * sin + cx;
        self.y = x * sin + y * cos + cy;
        self
    }

    /// Rotates so that the vector ends up at the absolute angle `target`
    /// (radians when given a bare `f64`).
    pub fn rotate_to(&mut self, target: impl Into<Radians>) -> &mut Self {
        let target = target.into();
        let current = self.angle();
        self.rotate(target - current);
        self.last_angle.set(target.0);
        self
    }

    /// Rotates by `delta` relative to the current orientation (radians when
    /// given a bare `f64`).
    pub fn rotate_by(&mut self, delta: impl Into<Radians>) -> &mut Self {
        let delta = delta.into();
        let current = self.angle();
        self.rotate(delta);
        self.last_angle.set((current + delta).0);
        self
    }

    /// Points the vector at `angle`, keeping its length. On a zero vector
    /// only the remembered angle changes. A bare `f64` is taken as radians.
    pub fn set_angle(&mut self, angle: impl Into<Radians>) -> &mut Self {
        let angle = angle.into().0;
        self.last_angle.set(angle);
        if !self.is_zero() {
            let length = self.length();
            let (sin, cos) = angle.sin_cos();
            self.set(cos * length, sin * length);
        }
        self
    }

    /// Replaces self by its projection onto `vector`.
    pub fn project(&mut self, vector: &Point) -> &mut Self {
        let coeff = if vector.is_zero() {
            trace!("projecting onto a zero vector");
            0.0
        } else {
            self.dot(vector) / vector.length_squared()
        };
        self.set(coeff * vector.x, coeff * vector.y)
    }

    /// Displacement from self to `other`.
    #[inline]
    pub fn vector_to(&self, other: &Point) -> Point {
        point(other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Branch-free "dog-leg" approximation of the length, within a few
    /// percent of [`Point::length`].
    pub fn approximate_length(&self) -> f64 {
        let x = self.x.abs();
        let y = self.y.abs();
        let lo = x.min(y);
        let hi = x.max(y);
        hi + 3.0 * lo / 32.0 + f64::max(0.0, 2.0 * lo - hi) / 8.0 + f64::max(0.0, 4.0 * lo - hi) / 16.0
    }

    /// Orientation in range ]-pi; pi].
    ///
    /// A zero vector reports the last angle it was given or reported (0 if
    /// none), a non-zero vector computes `atan2(y, x)` and remembers it.
    pub fn angle(&self) -> Radians {
        if self.is_zero() {
            return Radians(self.last_angle.get());
        }
        let a = f64::atan2(self.y, self.x);
        self.last_angle.set(a);
        Radians(a)
    }

    #[inline]
    pub fn angle_deg(&self) -> Degrees {
        self.angle().to_degrees()
    }

    #[inline]
    pub fn horizontal_angle(&self) -> Radians {
        self.angle()
    }

    #[inline]
    pub fn horizontal_angle_deg(&self) -> Degrees {
        self.angle().to_degrees()
    }

    /// Angle measured from the Y axis.
    #[inline]
    pub fn vertical_angle(&self) -> Radians {
        Radians(f64::atan2(self.x, self.y))
    }

    #[inline]
    pub fn vertical_angle_deg(&self) -> Degrees {
        self.vertical_angle().to_degrees()
    }

    /// Unsigned angle between the two vectors in range [0; pi].
    /// NaN if either has no length.
    pub fn angle_between(&self, other: &Point) -> Radians {
        let div = self.length() * other.length();
        if numerical::is_zero(div) {
            trace!("angle between {:?} and {:?} is undefined", self, other);
            return Radians(f64::NAN);
        }
        let a = (self.dot(other) / div).clamp(-1.0, 1.0);
        Radians(a.acos())
    }

    /// Signed angle from self to `other` in range ]-pi; pi].
    #[inline]
    pub fn directed_angle(&self, other: &Point) -> Radians {
        Radians(f64::atan2(self.cross(other), self.dot(other)))
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        numerical::is_zero(self.x) && numerical::is_zero(self.y)
    }

    #[inline]
    pub fn is_close(&self, other: &Point, tolerance: f64) -> bool {
        self.distance_squared(other) < tolerance * tolerance
    }

    #[inline]
    pub fn is_collinear(&self, other: &Point) -> bool {
        self.cross(other).abs() < EPSILON
    }

    #[inline]
    pub fn is_orthogonal(&self, other: &Point) -> bool {
        self.dot(other).abs() < EPSILON
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
