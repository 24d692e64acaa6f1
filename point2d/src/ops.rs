//! Operator overloads. They always build a fresh point, the remembered angle
//! of the operands is not carried over.

use crate::{point, Point};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add for &Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: &Point) -> Self::Output {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl AddAssign<&Point> for Point {
    #[inline]
    fn add_assign(&mut self, rhs: &Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub for &Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<&Point> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: &Point) -> Self::Output {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl SubAssign<&Point> for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: &Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Self::Output {
        point(self * rhs.x, self * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        point(self.x * rhs, self.y * rhs)
    }
}

impl Mul<f64> for &Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        point(self.x * rhs, self.y * rhs)
    }
}

impl Mul for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        point(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_num(rhs);
    }
}

impl MulAssign for Point {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

/// Saturates to zero on a zero divisor, like [`Point::divide_num`].
impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(mut self, rhs: f64) -> Self::Output {
        self.divide_num(rhs);
        point(self.x, self.y)
    }
}

impl Div<f64> for &Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let mut p = point(self.x, self.y);
        p.divide_num(rhs);
        p
    }
}

impl Div for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        point(self.x / rhs.x, self.y / rhs.y)
    }
}

impl DivAssign<f64> for Point {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.divide_num(rhs);
    }
}

impl DivAssign for Point {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.divide(&rhs);
    }
}

impl Rem<f64> for Point {
    type Output = Point;

    #[inline]
    fn rem(self, rhs: f64) -> Self::Output {
        point(self.x % rhs, self.y % rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        point(-self.x, -self.y)
    }
}

impl Neg for &Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Self::Output {
        point(-self.x, -self.y)
    }
}

impl std::iter::Sum for Point {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut z = Point::default();
        for x in iter {
            z += x;
        }
        z
    }
}

impl<'a> std::iter::Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Self {
        let mut z = Point::default();
        for x in iter {
            z += x;
        }
        z
    }
}
