//! Dust density on the spherical grid.

use crate::{ModelError, Result};
use ndarray::{Array1, Array3, Zip};
use std::f64::consts::{FRAC_PI_2, PI};

/// Repeat a per-shell value across the angular grid.
pub fn broadcast_radial(values: &Array1<f64>, ntheta: usize, nphi: usize) -> Array3<f64> {
    Array3::from_shape_fn((values.len(), ntheta, nphi), |(i, _, _)| values[i])
}

fn check_shape(what: &'static str, expected: &[usize], found: &[usize]) -> Result<()> {
    if expected != found {
        return Err(ModelError::ShapeMismatch {
            what,
            expected: expected.to_vec(),
            found: found.to_vec(),
        });
    }
    Ok(())
}

/// Vertically Gaussian dust density in the local disk frame.
///
/// `rho = sigma / (sqrt(2π) h) · exp(-(z / hr)² / 2)` with
/// `z = π/2 - theta_local`, the angular height above the local midplane.
/// `aspect_ratio` is used exactly as supplied by the profile.
pub fn dust_density(
    surface_density: &Array3<f64>,
    scale_height: &Array3<f64>,
    aspect_ratio: &Array3<f64>,
    theta_local: &Array3<f64>,
) -> Result<Array3<f64>> {
    let shape = theta_local.shape();
    check_shape("surface density", shape, surface_density.shape())?;
    check_shape("scale height", shape, scale_height.shape())?;
    check_shape("aspect ratio", shape, aspect_ratio.shape())?;

    let norm = (2.0 * PI).sqrt();
    Ok(Zip::from(surface_density)
        .and(scale_height)
        .and(aspect_ratio)
        .and(theta_local)
        .map_collect(|&sigma, &h, &hr, &theta| {
            let z = FRAC_PI_2 - theta;
            sigma / (norm * h) * (-(z * z / (hr * hr)) / 2.0).exp()
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_broadcast_radial() {
        let b = broadcast_radial(&array![1.0, 2.0, 3.0], 2, 4);
        assert_eq!(b.shape(), &[3, 2, 4]);
        assert_eq!(b[[2, 1, 3]], 3.0);
        assert_eq!(b[[0, 0, 0]], 1.0);
    }

    #[test]
    fn test_midplane_peak() {
        let sigma = Array3::from_elem((1, 1, 1), 2.0);
        let h = Array3::from_elem((1, 1, 1), 0.5);
        let hr = Array3::from_elem((1, 1, 1), 0.05);
        let theta = Array3::from_elem((1, 1, 1), FRAC_PI_2);

        let rho = dust_density(&sigma, &h, &hr, &theta).unwrap();
        let expected = 2.0 / ((2.0 * PI).sqrt() * 0.5);
        assert!((rho[[0, 0, 0]] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_one_scale_height_above_midplane() {
        let sigma = Array3::from_elem((1, 1, 2), 1.0);
        let h = Array3::from_elem((1, 1, 2), 1.0);
        let hr = Array3::from_elem((1, 1, 2), 0.1);
        let theta = array![[[FRAC_PI_2 - 0.1, FRAC_PI_2 + 0.1]]];

        let rho = dust_density(&sigma, &h, &hr, &theta).unwrap();
        let peak = 1.0 / (2.0 * PI).sqrt();
        let expected = peak * (-0.5f64).exp();
        assert!((rho[[0, 0, 0]] - expected).abs() < 1e-12);
        assert!((rho[[0, 0, 1]] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Array3::from_elem((1, 2, 2), 1.0);
        let b = Array3::from_elem((1, 2, 3), 1.0);
        let err = dust_density(&a, &a, &b, &a).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                what: "aspect ratio",
                ..
            }
        ));
    }
}
