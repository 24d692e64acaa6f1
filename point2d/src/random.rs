use crate::{point, Point};
use rand::Rng;
use std::f64::consts::TAU;

impl Point {
    /// Both coordinates uniform in [0; 1[
    pub fn random() -> Point {
        Self::random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(rng: &mut R) -> Point {
        let x = rng.gen::<f64>();
        let y = rng.gen::<f64>();
        point(x, y)
    }

    /// Vector of the given length pointing in a uniformly random direction.
    /// A zero or NaN length gives a unit vector.
    pub fn random_vector(length: f64) -> Point {
        Self::random_vector_with(&mut rand::thread_rng(), length)
    }

    #[inline]
    pub fn random_unit_vector() -> Point {
        Self::random_vector(1.0)
    }

    pub fn random_vector_with<R: Rng>(rng: &mut R, length: f64) -> Point {
        let length = if length == 0.0 || length.is_nan() {
            1.0
        } else {
            length
        };
        let r = rng.gen_range(0.0..TAU);
        point(r.cos() * length, r.sin() * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_in_unit_square() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Point::random_with(&mut rng);
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
        let p = Point::random();
        assert!((0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y));
    }

    #[test]
    fn test_random_vector_length() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Point::random_vector_with(&mut rng, 5.0);
            assert!((p.length() - 5.0).abs() < 1e-9);
        }
        assert!((Point::random_unit_vector().length() - 1.0).abs() < 1e-9);
        assert!((Point::random_vector(0.0).length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_vector_is_seeded() {
        let a = Point::random_vector_with(&mut SmallRng::seed_from_u64(3), 2.0);
        let b = Point::random_vector_with(&mut SmallRng::seed_from_u64(3), 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_vector_covers_all_quadrants() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let p = Point::random_vector_with(&mut rng, 1.0);
            let q = (p.x < 0.0) as usize * 2 + (p.y < 0.0) as usize;
            seen[q] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
