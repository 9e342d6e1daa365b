use super::Vector2d;
use crate::error::SteeringError;
use cgmath::prelude::*;
use std::f64::consts::PI;

/// Scales `v` to the given magnitude, preserving its direction.
///
/// Fails when `v` has zero length, since its direction is undefined.
pub fn set_magnitude(v: Vector2d, magnitude: f64) -> Result<Vector2d, SteeringError> {
    let mag = v.magnitude();
    if mag == 0.0 {
        return Err(SteeringError::DegenerateVector);
    }
    Ok(v * (magnitude / mag))
}

/// Returns the unit vector in the direction of `v`.
///
/// Fails when `v` has zero length.
pub fn unit(v: Vector2d) -> Result<Vector2d, SteeringError> {
    set_magnitude(v, 1.0)
}

/// The angle the vector points at, in radians in `(-pi, pi]`.
pub fn heading(v: Vector2d) -> f64 {
    v.y.atan2(v.x)
}

/// Constrains an angle in radians to a single turn about zero.
///
/// Idempotent; the result is always within `[-pi, pi]`.
pub fn angle_wrap(angle: f64) -> f64 {
    angle - 2.0 * PI * ((angle + PI) / (2.0 * PI)).floor()
}

/// Returns whichever of the two scalars is closer to zero.
pub fn min_magnitude(a: f64, b: f64) -> f64 {
    if a.abs() < b.abs() {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::prelude::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn angle_wrap_within_single_turn() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..1000 {
            let angle = rng.gen_range(-100.0..100.0);
            let wrapped = angle_wrap(angle);
            assert!(wrapped >= -PI && wrapped <= PI, "{} -> {}", angle, wrapped);
            assert_approx_eq!(angle_wrap(wrapped), wrapped, 1e-12);
            // Wrapping never changes the direction the angle points at
            assert_approx_eq!(angle.sin(), wrapped.sin(), 1e-9);
            assert_approx_eq!(angle.cos(), wrapped.cos(), 1e-9);
        }
    }

    #[test]
    fn angle_wrap_known_values() {
        assert_approx_eq!(angle_wrap(0.0), 0.0);
        assert_approx_eq!(angle_wrap(3.0 * PI), -PI, 1e-12);
        assert_approx_eq!(angle_wrap(-1.5 * PI), 0.5 * PI, 1e-12);
        assert_approx_eq!(angle_wrap(2.0 * PI), 0.0, 1e-12);
    }

    #[test]
    fn set_magnitude_scales_length() {
        let mut rng = rand::rngs::StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        for _i in 0..100 {
            let v = Vector2d::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            if v.magnitude() == 0.0 {
                continue;
            }
            let m = rng.gen_range(-20.0..20.0);
            assert_approx_eq!(set_magnitude(v, m).unwrap().magnitude(), m.abs(), 1e-9);
        }
    }

    #[test]
    fn set_magnitude_rejects_zero_vector() {
        assert!(set_magnitude(Vector2d::new(0.0, 0.0), 5.0).is_err());
        assert!(unit(Vector2d::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn heading_of_axes() {
        assert_approx_eq!(heading(Vector2d::new(1.0, 0.0)), 0.0);
        assert_approx_eq!(heading(Vector2d::new(0.0, 1.0)), 0.5 * PI);
        assert_approx_eq!(heading(Vector2d::new(-1.0, 0.0)), PI);
        assert_approx_eq!(heading(Vector2d::new(0.0, -1.0)), -0.5 * PI);
    }

    #[test]
    fn min_magnitude_picks_closer_to_zero() {
        assert_eq!(min_magnitude(1.0, -2.0), 1.0);
        assert_eq!(min_magnitude(-0.5, 3.0), -0.5);
        assert_eq!(min_magnitude(-4.0, -3.0), -3.0);
    }
}
