//! Synthetic disk profiles and angular grids.
//!
//! The profiles follow simple power laws so that expected values can be
//! written down by hand in tests.

use disk_common::constants::{AU, SOLAR_MASS};
use disk_common::DiskProfile;
use ndarray::{Array1, Array2, Array3};
use std::f64::consts::PI;

/// Logarithmically spaced radial cell edges from `r_in` to `r_out` [cm].
pub fn log_radius_edges(r_in: f64, r_out: f64, nr: usize) -> Vec<f64> {
    let (lo, hi) = (r_in.ln(), r_out.ln());
    (0..=nr)
        .map(|i| (lo + (hi - lo) * i as f64 / nr as f64).exp())
        .collect()
}

/// Build a profile with `sigma ∝ r^-1`, `h/r = 0.05` and the given normals.
fn profile_with_normals(nr: usize, normals: Vec<Vec<f64>>) -> DiskProfile {
    let ri = log_radius_edges(5.0 * AU, 100.0 * AU, nr);
    let rc: Vec<f64> = ri.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
    let hhr = vec![0.05; nr];
    let hh: Vec<f64> = rc.iter().zip(&hhr).map(|(r, a)| r * a).collect();
    let sigmad: Vec<f64> = rc.iter().map(|r| 10.0 * (AU / r)).collect();

    DiskProfile {
        m_star: SOLAR_MASS,
        ri,
        rc,
        sigmad,
        hh,
        hhr,
        l: normals,
        time: None,
    }
}

/// Disk whose normal is `(0, 0, 1)` at every radius.
pub fn flat_profile(nr: usize) -> DiskProfile {
    profile_with_normals(nr, vec![vec![0.0, 0.0, 1.0]; nr])
}

/// Warped disk whose inclination grows linearly to `max_inclination` at the
/// outer edge while the tilt azimuth twists by `twist` radians.
pub fn warped_profile(nr: usize, max_inclination: f64, twist: f64) -> DiskProfile {
    let normals = (0..nr)
        .map(|i| {
            let f = if nr > 1 { i as f64 / (nr - 1) as f64 } else { 1.0 };
            let incl = max_inclination * f;
            let azimuth = twist * f;
            vec![
                incl.sin() * azimuth.cos(),
                incl.sin() * azimuth.sin(),
                incl.cos(),
            ]
        })
        .collect();
    profile_with_normals(nr, normals)
}

/// Cell centers of `n` uniform cells between `lo` and `hi`.
pub fn cell_centers(lo: f64, hi: f64, n: usize) -> Array1<f64> {
    let step = (hi - lo) / n as f64;
    Array1::from_shape_fn(n, |i| lo + (i as f64 + 0.5) * step)
}

/// Global `(theta, phi)` arrays of shape `(nr, ntheta, nphi)` covering
/// `theta` in `(theta_up, π - theta_up)` and `phi` in `(0, 2π)`.
pub fn angular_grid(
    nr: usize,
    ntheta: usize,
    nphi: usize,
    theta_up: f64,
) -> (Array3<f64>, Array3<f64>) {
    let theta = cell_centers(theta_up, PI - theta_up, ntheta);
    let phi = cell_centers(0.0, 2.0 * PI, nphi);
    let shape = (nr, ntheta, nphi);
    (
        Array3::from_shape_fn(shape, |(_, j, _)| theta[j]),
        Array3::from_shape_fn(shape, |(_, _, k)| phi[k]),
    )
}

/// Normals of a profile as an `(nr, 3)` array.
pub fn normals_array(profile: &DiskProfile) -> Array2<f64> {
    Array2::from_shape_fn((profile.l.len(), 3), |(i, c)| profile.l[i][c])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile_is_valid() {
        let profile = flat_profile(8);
        profile.validate().unwrap();
        assert_eq!(profile.ri.len(), 9);
    }

    #[test]
    fn test_warped_profile_normals_are_unit() {
        let profile = warped_profile(16, 0.3, 1.0);
        profile.validate().unwrap();
        for l in &profile.l {
            let len = (l[0] * l[0] + l[1] * l[1] + l[2] * l[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-12);
        }
        assert_eq!(profile.l[0], vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_angular_grid_shape() {
        let (theta, phi) = angular_grid(3, 4, 5, 0.2);
        assert_eq!(theta.shape(), &[3, 4, 5]);
        assert_eq!(theta[[0, 1, 0]], theta[[2, 1, 4]]);
        assert!(phi.iter().all(|&p| p > 0.0 && p < 2.0 * PI));
    }
}
