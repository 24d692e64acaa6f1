use crate::{point, Point};
use serde::{Deserialize, Serialize};

/// Plain `{ x, y }` mapping of a point, used for interop and as the serde
/// representation of [`Point`]. Missing fields deserialize as 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Missing entries and NaN become 0, extra entries are ignored.
    pub fn from_array(arr: &[f64]) -> Point {
        let x = arr.first().copied().unwrap_or(0.0);
        let y = arr.get(1).copied().unwrap_or(0.0);
        Point::new(x, y)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// NaN fields become 0.
    #[inline]
    pub fn from_object(obj: Coords) -> Point {
        Point::new(obj.x, obj.y)
    }

    #[inline]
    pub fn to_object(&self) -> Coords {
        Coords {
            x: self.x,
            y: self.y,
        }
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Coords::deserialize(deserializer).map(Point::from_object)
    }
}

impl From<Coords> for Point {
    #[inline]
    fn from(c: Coords) -> Self {
        Point::from_object(c)
    }
}

impl From<Point> for Coords {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_object()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        point(v.0, v.1)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from(v: [f64; 2]) -> Self {
        point(v[0], v[1])
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl From<&Point> for [f64; 2] {
    #[inline]
    fn from(p: &Point) -> Self {
        p.to_array()
    }
}
