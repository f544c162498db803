//! Regular spherical grid `(r, theta, phi)` with explicit cell walls.

use crate::config::GridConfig;
use crate::{ModelError, Result};
use ndarray::{s, Array1, Array3};
use std::f64::consts::PI;

/// Midpoints between consecutive edges.
fn midpoints(edges: &Array1<f64>) -> Array1<f64> {
    (&edges.slice(s![..-1]) + &edges.slice(s![1..])) * 0.5
}

/// Spherical grid with cell walls and cell centers along every axis.
#[derive(Debug, Clone)]
pub struct SphericalGrid {
    /// Radial cell walls [cm], `nr + 1` values
    pub radius_edges: Array1<f64>,
    /// Radial cell centers [cm]
    pub radius_centers: Array1<f64>,
    /// Polar cell walls [rad]
    pub theta_edges: Array1<f64>,
    pub theta_centers: Array1<f64>,
    /// Azimuthal cell walls [rad], spanning `[0, 2π]`
    pub phi_edges: Array1<f64>,
    pub phi_centers: Array1<f64>,
}

impl SphericalGrid {
    /// Build the grid from the profile's radial cells and the configured
    /// angular resolution.
    ///
    /// The radial centers are taken as given rather than recomputed from the
    /// edges, since the profile may use a non-arithmetic center definition.
    pub fn new(
        radius_edges: Array1<f64>,
        radius_centers: Array1<f64>,
        config: &GridConfig,
    ) -> Result<Self> {
        if radius_centers.is_empty() {
            return Err(ModelError::invalid_grid("no radial cells"));
        }
        if radius_edges.len() != radius_centers.len() + 1 {
            return Err(ModelError::invalid_grid(format!(
                "{} radial edges for {} cells",
                radius_edges.len(),
                radius_centers.len()
            )));
        }
        if config.ntheta == 0 || config.nphi == 0 {
            return Err(ModelError::invalid_grid(format!(
                "angular resolution must be positive, got {}x{}",
                config.ntheta, config.nphi
            )));
        }

        let theta_edges =
            Array1::linspace(config.theta_up, PI - config.theta_up, config.ntheta + 1);
        let phi_edges = Array1::linspace(0.0, 2.0 * PI, config.nphi + 1);

        Ok(Self {
            radius_edges,
            radius_centers,
            theta_centers: midpoints(&theta_edges),
            theta_edges,
            phi_centers: midpoints(&phi_edges),
            phi_edges,
        })
    }

    pub fn nr(&self) -> usize {
        self.radius_centers.len()
    }

    pub fn ntheta(&self) -> usize {
        self.theta_centers.len()
    }

    pub fn nphi(&self) -> usize {
        self.phi_centers.len()
    }

    /// `(nr, ntheta, nphi)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nr(), self.ntheta(), self.nphi())
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.nr() * self.ntheta() * self.nphi()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell-center `(theta, phi)` for every cell, `ij` indexed.
    ///
    /// Both arrays have shape `(nr, ntheta, nphi)` and are identical across
    /// the radial axis.
    pub fn angle_meshgrid(&self) -> (Array3<f64>, Array3<f64>) {
        let shape = self.shape();
        let theta = Array3::from_shape_fn(shape, |(_, j, _)| self.theta_centers[j]);
        let phi = Array3::from_shape_fn(shape, |(_, _, k)| self.phi_centers[k]);
        (theta, phi)
    }
}
