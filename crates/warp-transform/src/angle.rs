//! Planar angle helpers.
//!
//! `angle_from_components` uses `atan(y / x)` with an explicit quadrant
//! correction instead of `atan2`; its branch boundaries are the `x < 0`
//! shift and the two wrap rules.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use std::f64::consts::PI;

/// Offset added to `x` so that `y / x` never divides by an exact zero.
const ZERO_OFFSET: f64 = 1e-90 * PI;

/// Polar angle of `(x, y)` measured counter-clockwise from the +x axis.
///
/// With `positive` the result lies in `[0, 2π)`, otherwise in `(-π, π]`.
/// The origin is not special-cased and yields an arbitrary finite angle.
#[inline]
pub fn angle_from_components(x: f64, y: f64, positive: bool) -> f64 {
    let xx = x + ZERO_OFFSET;
    let mut ang = (y / xx).atan();
    if xx < 0.0 {
        ang -= PI;
    }

    if positive {
        if ang < 0.0 {
            ang += 2.0 * PI;
        }
        // tiny negative angles round up to exactly 2π
        if ang >= 2.0 * PI {
            ang = 0.0;
        }
    } else if ang <= -PI {
        ang += 2.0 * PI;
    }

    ang
}

/// Elementwise [`angle_from_components`] over arrays of any dimension.
///
/// # Panics
/// Panics if `x` and `y` have different shapes.
pub fn angles_from_components<S1, S2, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    positive: bool,
) -> Array<f64, D>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(x)
        .and(y)
        .map_collect(|&x, &y| angle_from_components(x, y, positive))
}

/// Rotate the point `(x, y)` counter-clockwise by `ang` radians.
#[inline]
pub fn rotate(x: f64, y: f64, ang: f64) -> (f64, f64) {
    let (sin, cos) = ang.sin_cos();
    (cos * x - sin * y, sin * x + cos * y)
}

/// Elementwise [`rotate`] over arrays of any dimension.
///
/// # Panics
/// Panics if `x` and `y` have different shapes.
pub fn rotate_arrays<S1, S2, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    ang: f64,
) -> (Array<f64, D>, Array<f64, D>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    let (sin, cos) = ang.sin_cos();
    let xp = Zip::from(x).and(y).map_collect(|&x, &y| cos * x - sin * y);
    let yp = Zip::from(x).and(y).map_collect(|&x, &y| sin * x + cos * y);
    (xp, yp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_positive_angle_below_full_turn() {
        // y/x so small that adding 2π rounds to 2π exactly
        let ang = angle_from_components(1.0, -1e-17, true);
        assert!(ang < 2.0 * PI, "angle {} reached 2π", ang);
        assert_eq!(ang, 0.0);

        let ang = angle_from_components(1.0, -1e-12, true);
        assert!(ang > 6.28 && ang < 2.0 * PI);
    }

    #[test]
    fn test_cardinal_directions_signed() {
        assert!((angle_from_components(1.0, 0.0, false) - 0.0).abs() < EPS);
        assert!((angle_from_components(0.0, 1.0, false) - FRAC_PI_2).abs() < EPS);
        assert!((angle_from_components(-1.0, 0.0, false) - PI).abs() < EPS);
        assert!((angle_from_components(0.0, -1.0, false) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_cardinal_directions_positive() {
        assert!((angle_from_components(1.0, 0.0, true) - 0.0).abs() < EPS);
        assert!((angle_from_components(-1.0, 0.0, true) - PI).abs() < EPS);
        assert!((angle_from_components(0.0, -1.0, true) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((angle_from_components(1.0, -1.0, true) - 7.0 * FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn test_third_quadrant() {
        let signed = angle_from_components(-1.0, -1.0, false);
        assert!((signed + 3.0 * FRAC_PI_4).abs() < EPS);

        let positive = angle_from_components(-1.0, -1.0, true);
        assert!((positive - 5.0 * FRAC_PI_4).abs() < EPS);
    }

    #[test]
    fn test_matches_atan2_away_from_branch_cut() {
        for k in 0..72 {
            let a = -PI + 0.01 + k as f64 * (2.0 * PI - 0.02) / 71.0;
            let (x, y) = (2.5 * a.cos(), 2.5 * a.sin());
            let got = angle_from_components(x, y, false);
            assert!(
                (got - y.atan2(x)).abs() < 1e-10,
                "angle {} gave {} vs atan2 {}",
                a,
                got,
                y.atan2(x)
            );
        }
    }

    #[test]
    fn test_origin_is_finite() {
        assert!(angle_from_components(0.0, 0.0, false).is_finite());
        assert!(angle_from_components(0.0, 0.0, true).is_finite());
    }

    #[test]
    fn test_nan_propagates() {
        assert!(angle_from_components(f64::NAN, 1.0, false).is_nan());
        assert!(angle_from_components(1.0, f64::NAN, true).is_nan());
    }

    #[test]
    fn test_array_form_matches_scalar() {
        let x = array![[1.0, -1.0], [0.0, -2.0]];
        let y = array![[1.0, 1.0], [-3.0, -0.5]];
        let out = angles_from_components(&x, &y, true);
        for ((&xv, &yv), &o) in x.iter().zip(y.iter()).zip(out.iter()) {
            assert_eq!(o, angle_from_components(xv, yv, true));
        }
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let (x, y) = rotate(1.0, 0.0, FRAC_PI_2);
        assert!(x.abs() < EPS);
        assert!((y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_arrays_matches_scalar() {
        let x = array![1.0, 0.5, -2.0];
        let y = array![0.0, 3.0, 1.0];
        let (xp, yp) = rotate_arrays(&x, &y, 0.7);
        for i in 0..3 {
            let (ex, ey) = rotate(x[i], y[i], 0.7);
            assert!((xp[i] - ex).abs() < EPS);
            assert!((yp[i] - ey).abs() < EPS);
        }
    }
}
