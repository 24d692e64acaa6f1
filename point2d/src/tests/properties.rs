use super::{approx, p, TOL};
use crate::{Coords, Degrees, Point, Radians};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

/// Coordinate with 4 fractional digits in roughly [-214748; 214748]
#[derive(Debug, Copy, Clone)]
struct Coord(f64);

impl Arbitrary for Coord {
    fn arbitrary(g: &mut Gen) -> Self {
        let v = <i32 as Arbitrary>::arbitrary(g);
        Coord(v as f64 / 10_000.0)
    }
}

/// Angle in ]-180; 180[ degrees
#[derive(Debug, Copy, Clone)]
struct Angle(f64);

impl Arbitrary for Angle {
    fn arbitrary(g: &mut Gen) -> Self {
        let v = <i16 as Arbitrary>::arbitrary(g);
        Angle(v as f64 / i16::MAX as f64 * 179.9)
    }
}

fn pt(x: Coord, y: Coord) -> Point {
    p(x.0, y.0)
}

fn check(f: fn(Coord, Coord, Coord, Coord) -> TestResult) {
    QuickCheck::new().tests(500).quickcheck(f);
}

#[test]
fn add_then_subtract_is_identity() {
    check(|a, b, c, d| {
        let orig = pt(a, b);
        let q = pt(c, d);
        let mut v = orig.clone();
        v.add(&q).subtract(&q);
        TestResult::from_bool(approx(&v, &orig))
    });
}

#[test]
fn dot_commutes_and_cross_anticommutes() {
    check(|a, b, c, d| {
        let u = pt(a, b);
        let v = pt(c, d);
        TestResult::from_bool(u.dot(&v) == v.dot(&u) && u.cross(&v) == -v.cross(&u))
    });
}

#[test]
fn rotation_preserves_length() {
    QuickCheck::new().tests(500).quickcheck(
        (|x: Coord, y: Coord, ang: Angle| -> bool {
            let mut v = pt(x, y);
            let len = v.length();
            v.rotate(Degrees(ang.0));
            (v.length() - len).abs() <= TOL * (1.0 + len)
        }) as fn(_, _, _) -> bool,
    );
}

#[test]
fn projection_on_self_is_identity() {
    check(|a, b, _, _| {
        let v = pt(a, b);
        if v.is_zero() {
            return TestResult::discard();
        }
        let mut w = v.clone();
        w.project(&v);
        TestResult::from_bool(approx(&w, &v))
    });
}

#[test]
fn projection_on_orthogonal_is_zero() {
    check(|a, b, _, _| {
        let v = pt(a, b);
        let mut w = p(-b.0, a.0);
        w.project(&v);
        TestResult::from_bool(w.is_zero())
    });
}

#[test]
fn array_and_object_round_trip() {
    check(|a, b, _, _| {
        let v = pt(a, b);
        let from_arr = Point::from_array(&v.to_array());
        let from_obj = Point::from_object(v.to_object());
        let from_json: Point = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        TestResult::from_bool(from_arr == v && from_obj == v && from_json == v)
    });
}

#[test]
fn string_round_trip_keeps_five_digits() {
    check(|a, b, _, _| {
        let v = pt(a, b);
        let back: Point = match v.to_string().parse() {
            Ok(back) => back,
            Err(e) => return TestResult::error(e.to_string()),
        };
        TestResult::from_bool((back.x - v.x).abs() <= 1e-5 && (back.y - v.y).abs() <= 1e-5)
    });
}

#[test]
fn angle_length_duality() {
    QuickCheck::new().tests(500).quickcheck(
        (|ang: Angle, len: u16| -> bool {
            let length = len as f64 / 10.0 + 0.1;
            let v = Point::from_angle_with_length(Degrees(ang.0), length);
            (v.angle_deg().0 - ang.0).abs() < TOL && (v.length() - length).abs() < TOL
        }) as fn(_, _) -> bool,
    );
}

#[test]
fn angle_between_is_unsigned_directed_angle() {
    check(|a, b, c, d| {
        let u = pt(a, b);
        let v = pt(c, d);
        if u.is_zero() || v.is_zero() {
            return TestResult::from_bool(u.angle_between(&v).is_nan());
        }
        let unsigned = u.angle_between(&v).0;
        let directed = u.directed_angle(&v).0;
        TestResult::from_bool(
            (0.0..=std::f64::consts::PI).contains(&unsigned) && (unsigned - directed.abs()).abs() < 1e-6,
        )
    });
}

#[test]
fn zero_vector_remembers_angle() {
    QuickCheck::new().tests(200).quickcheck(
        (|ang: Angle| -> bool {
            let mut v = p(0.0, 0.0);
            v.set_angle(Degrees(ang.0));
            let remembered = v.angle() == Radians::from(Degrees(ang.0));
            v.set_length(3.0);
            let expected = Point::from_angle_with_length(Degrees(ang.0), 3.0);
            remembered && approx(&v, &expected)
        }) as fn(_) -> bool,
    );
}

#[test]
fn coords_serde_matches_point() {
    check(|a, b, _, _| {
        let v = pt(a, b);
        let c: Coords = v.clone().into();
        TestResult::from_bool(
            serde_json::to_string(&c).unwrap() == serde_json::to_string(&v).unwrap(),
        )
    });
}
