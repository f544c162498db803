//! Configuration for the disk setup.
//!
//! Every section has defaults, so an empty YAML document (or no file at
//! all) reproduces the standard single-disk setup.

use crate::{ModelError, Result};
use disk_common::constants::SOLAR_RADIUS;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;

/// Complete configuration for one setup run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub grid: GridConfig,
    pub star: StarConfig,
    pub wavelength: WavelengthConfig,
    pub dust: DustConfig,
    pub solver: SolverConfig,
}

/// Angular resolution of the spherical grid. The radial grid comes from
/// the disk profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of polar cells.
    pub ntheta: usize,

    /// Number of azimuthal cells.
    pub nphi: usize,

    /// Opening angle cut from each pole [rad]; theta spans
    /// `[theta_up, π - theta_up]`.
    pub theta_up: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            ntheta: 100,
            nphi: 180,
            theta_up: 0.2,
        }
    }
}

/// Central star. The mass is taken from the disk profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    /// Stellar radius [cm]
    pub radius: f64,

    /// Effective temperature [K]
    pub temperature: f64,

    /// Position [cm]
    pub position: [f64; 3],
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            radius: 1.54 * SOLAR_RADIUS,
            temperature: 7850.0,
            position: [0.0, 0.0, 0.0],
        }
    }
}

/// One log-spaced block of the wavelength grid [micron].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavelengthSegment {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// Whether `end` itself is part of the segment.
    #[serde(default)]
    pub include_end: bool,
}

impl WavelengthSegment {
    pub fn new(start: f64, end: f64, count: usize, include_end: bool) -> Self {
        Self {
            start,
            end,
            count,
            include_end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WavelengthConfig {
    pub segments: Vec<WavelengthSegment>,
}

impl Default for WavelengthConfig {
    fn default() -> Self {
        Self {
            segments: vec![
                WavelengthSegment::new(0.1, 7.0, 20, false),
                WavelengthSegment::new(7.0, 25.0, 100, false),
                WavelengthSegment::new(25.0, 1.0e4, 30, true),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DustConfig {
    /// Extension of the `dustkappa_<opacity>.inp` opacity table.
    pub opacity: String,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            opacity: "silicate".to_string(),
        }
    }
}

/// Monte Carlo settings written to `radmc3d.inp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Photon packages for the thermal Monte Carlo run.
    pub nphot: u64,

    /// Photon packages for scattering in image runs.
    pub nphot_scat: u64,

    /// 1 = isotropic scattering.
    pub scattering_mode_max: u32,

    pub iranfreqmode: u32,

    pub mc_scat_maxtauabs: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            nphot: 100_000,
            nphot_scat: 500_000,
            scattering_mode_max: 1,
            iranfreqmode: 1,
            mc_scat_maxtauabs: 5.0,
        }
    }
}

impl SetupConfig {
    /// Load configuration from a YAML file. Missing sections keep their
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Override grid and solver settings from environment variables.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WARP_NTHETA") {
            if let Ok(n) = val.parse() {
                self.grid.ntheta = n;
            }
        }

        if let Ok(val) = std::env::var("WARP_NPHI") {
            if let Ok(n) = val.parse() {
                self.grid.nphi = n;
            }
        }

        if let Ok(val) = std::env::var("WARP_THETA_UP") {
            if let Ok(angle) = val.parse() {
                self.grid.theta_up = angle;
            }
        }

        if let Ok(val) = std::env::var("WARP_NPHOT") {
            if let Ok(n) = val.parse() {
                self.solver.nphot = n;
            }
        }

        if let Ok(val) = std::env::var("WARP_NPHOT_SCAT") {
            if let Ok(n) = val.parse() {
                self.solver.nphot_scat = n;
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.grid.ntheta == 0 || self.grid.nphi == 0 {
            return Err(ModelError::config_error(format!(
                "grid resolution must be positive, got ntheta={} nphi={}",
                self.grid.ntheta, self.grid.nphi
            )));
        }

        if !(0.0..FRAC_PI_2).contains(&self.grid.theta_up) {
            return Err(ModelError::config_error(format!(
                "theta_up must lie in [0, π/2), got {}",
                self.grid.theta_up
            )));
        }

        if self.star.radius <= 0.0 || self.star.temperature <= 0.0 {
            return Err(ModelError::config_error(
                "stellar radius and temperature must be positive",
            ));
        }

        if self.wavelength.segments.is_empty() {
            return Err(ModelError::config_error("no wavelength segments configured"));
        }

        if self.dust.opacity.trim().is_empty() {
            return Err(ModelError::config_error("dust opacity name is empty"));
        }

        if self.solver.nphot == 0 {
            return Err(ModelError::config_error("nphot must be positive"));
        }

        Ok(())
    }
}
