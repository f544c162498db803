//! Local disk tilt derived from an annulus normal vector.

use crate::angle::{angle_from_components, rotate};

/// Scale a normal vector to unit length.
///
/// A zero vector produces NaN components; callers are expected to supply
/// non-degenerate normals.
#[inline]
pub fn unit_normal(normal: [f64; 3]) -> [f64; 3] {
    let [lx, ly, lz] = normal;
    let len = (lx * lx + ly * ly + lz * lz).sqrt();
    [lx / len, ly / len, lz / len]
}

/// Orientation of a tilted annulus relative to the global polar axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Azimuth of the normal's projection onto the x-y plane, in `(-π, π]`
    pub azimuth: f64,
    /// Angle between the normal and the global z axis
    pub inclination: f64,
}

impl Tilt {
    pub fn new(azimuth: f64, inclination: f64) -> Self {
        Self {
            azimuth,
            inclination,
        }
    }

    /// Derive the tilt from a (not necessarily normalized) normal vector.
    ///
    /// Returns `None` when the unit normal has no x/y component, i.e. the
    /// annulus lies flat in the global midplane and the transform is the
    /// identity.
    pub fn from_normal(normal: [f64; 3]) -> Option<Self> {
        let [lx, ly, lz] = unit_normal(normal);
        if lx == 0.0 && ly == 0.0 {
            return None;
        }

        let azimuth = angle_from_components(lx, ly, false);
        let inclination = angle_from_components(lz, (lx * lx + ly * ly).sqrt(), false);
        Some(Self::new(azimuth, inclination))
    }

    /// The tilt that undoes this one: same azimuth, opposite inclination.
    pub fn inverse(&self) -> Self {
        Self::new(self.azimuth, -self.inclination)
    }

    /// Rotate a Cartesian point into the tilted frame.
    #[inline]
    pub fn rotate_cartesian(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let (xt, yt) = rotate(x, y, -self.azimuth);
        let (xi, zi) = rotate(xt, z, self.inclination);
        let (xn, yn) = rotate(xi, yt, self.azimuth);
        (xn, yn, zi)
    }

    /// Map a global `(theta, phi)` on a shell of radius `r` to the local
    /// `(theta', phi')`, with `phi'` in `[0, 2π)`.
    #[inline]
    pub fn apply(&self, theta: f64, phi: f64, r: f64) -> (f64, f64) {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let x = r * sin_theta * cos_phi;
        let y = r * sin_theta * sin_phi;
        let z = r * cos_theta;

        let (xn, yn, zn) = self.rotate_cartesian(x, y, z);

        let phi_local = angle_from_components(xn, yn, true);
        let theta_local = angle_from_components(zn, (xn * xn + yn * yn).sqrt(), false);
        (theta_local, phi_local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_flat_normal_has_no_tilt() {
        assert_eq!(Tilt::from_normal([0.0, 0.0, 1.0]), None);
        assert_eq!(Tilt::from_normal([0.0, 0.0, -3.0]), None);
    }

    #[test]
    fn test_unit_normal_scaling() {
        let n = unit_normal([3.0, 0.0, 4.0]);
        assert!((n[0] - 0.6).abs() < 1e-15);
        assert!((n[2] - 0.8).abs() < 1e-15);
    }

    #[test]
    fn test_tilt_angles() {
        let tilt = Tilt::from_normal([0.0, 1.0, 1.0]).unwrap();
        assert!((tilt.azimuth - FRAC_PI_2).abs() < 1e-12);
        assert!((tilt.inclination - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_edge_on_normal() {
        let tilt = Tilt::from_normal([1.0, 0.0, 0.0]).unwrap();
        assert!(tilt.azimuth.abs() < 1e-12);
        assert!((tilt.inclination - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_inclination_beyond_right_angle() {
        let tilt = Tilt::from_normal([1.0, 0.0, -1.0]).unwrap();
        assert!((tilt.inclination - 3.0 * FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_zero_normal_is_nan() {
        let tilt = Tilt::from_normal([0.0, 0.0, 0.0]).unwrap();
        let (theta, phi) = tilt.apply(FRAC_PI_2, 0.0, 1.0);
        assert!(theta.is_nan());
        assert!(phi.is_nan());
    }

    #[test]
    fn test_rotation_preserves_length() {
        let tilt = Tilt::new(0.4, 0.3);
        let (x, y, z) = tilt.rotate_cartesian(1.0, -2.0, 0.5);
        let before = 1.0f64 + 4.0 + 0.25;
        let after = x * x + y * y + z * z;
        assert!((before - after).abs() < 1e-12);
    }

    #[test]
    fn test_apply_then_inverse() {
        let tilt = Tilt::new(-2.1, 0.35);
        let (theta, phi) = (1.2, 4.0);
        let (tp, pp) = tilt.apply(theta, phi, 7.0);
        let (back_theta, back_phi) = tilt.inverse().apply(tp, pp, 7.0);
        assert!((back_theta - theta).abs() < 1e-10);
        assert!((back_phi - phi).abs() < 1e-10);
    }

    #[test]
    fn test_local_phi_range() {
        let tilt = Tilt::new(1.0, 0.5);
        for k in 0..64 {
            let phi = k as f64 * 2.0 * PI / 64.0;
            let (_, pp) = tilt.apply(1.0, phi, 1.0);
            assert!((0.0..2.0 * PI).contains(&pp), "phi' {} out of range", pp);
        }
    }
}
