#![cfg(test)]

use crate::{point, Point};

mod properties;

pub(crate) const TOL: f64 = 1e-9;

pub(crate) fn approx(a: &Point, b: &Point) -> bool {
    let scale = 1.0 + a.length().max(b.length());
    a.distance(b) <= TOL * scale
}

pub(crate) fn p(x: f64, y: f64) -> Point {
    point(x, y)
}
