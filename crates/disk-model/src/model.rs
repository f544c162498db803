//! End-to-end assembly of the warped disk model.

use crate::config::SetupConfig;
use crate::density::{broadcast_radial, dust_density};
use crate::grid::SphericalGrid;
use crate::wavelength::WavelengthGrid;
use crate::Result;
use disk_common::DiskProfile;
use ndarray::Array3;
use tracing::info;
use warp_transform::warped_coordinate_transformation;

/// Everything the RADMC-3D input writers need, derived once from a profile
/// and a configuration.
#[derive(Debug, Clone)]
pub struct WarpedDiskModel {
    pub grid: SphericalGrid,
    pub wavelengths: WavelengthGrid,
    /// Stellar mass [g], from the profile
    pub stellar_mass: f64,
    /// Polar angle of every cell in its shell's local disk frame
    pub theta_local: Array3<f64>,
    /// Azimuth of every cell in its shell's local disk frame, in `[0, 2π)`
    pub phi_local: Array3<f64>,
    /// Dust density [g/cm^3], shape `(nr, ntheta, nphi)`
    pub dust_density: Array3<f64>,
}

impl WarpedDiskModel {
    pub fn build(profile: &DiskProfile, config: &SetupConfig) -> Result<Self> {
        profile.validate()?;
        config.validate()?;

        let grid = SphericalGrid::new(profile.radius_edges(), profile.radii(), &config.grid)?;
        let (nr, ntheta, nphi) = grid.shape();
        info!(nr, ntheta, nphi, cells = grid.len(), "Built spherical grid");

        let (theta, phi) = grid.angle_meshgrid();
        let normals = profile.normals()?;
        let (theta_local, phi_local) =
            warped_coordinate_transformation(&theta, &phi, &grid.radius_centers, &normals)?;

        let sigma = broadcast_radial(&profile.surface_density(), ntheta, nphi);
        let h = broadcast_radial(&profile.scale_height(), ntheta, nphi);
        let hr = broadcast_radial(&profile.aspect_ratio(), ntheta, nphi);
        let dust_density = dust_density(&sigma, &h, &hr, &theta_local)?;

        let wavelengths = WavelengthGrid::from_segments(&config.wavelength.segments)?;

        info!(
            wavelengths = wavelengths.len(),
            max_density = dust_density.iter().cloned().fold(f64::NAN, f64::max),
            "Assembled warped disk model"
        );

        Ok(Self {
            grid,
            wavelengths,
            stellar_mass: profile.m_star,
            theta_local,
            phi_local,
            dust_density,
        })
    }
}
