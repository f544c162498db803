//! Writers for the RADMC-3D input files.
//!
//! Every `write_*` function targets any [`Write`] sink; [`RadmcInputWriter`]
//! binds them to the conventional file names inside a model directory.

use crate::error::{RadmcError, RadmcResult};
use crate::format::{format_fortran_double, format_sci};
use disk_model::{
    DustConfig, SetupConfig, SolverConfig, SphericalGrid, StarConfig, WarpedDiskModel,
    WavelengthGrid,
};
use ndarray::Array3;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const WAVELENGTH_FILE: &str = "wavelength_micron.inp";
pub const STARS_FILE: &str = "stars.inp";
pub const GRID_FILE: &str = "amr_grid.inp";
pub const DUST_DENSITY_FILE: &str = "dust_density.inp";
pub const DUST_OPACITY_FILE: &str = "dustopac.inp";
pub const CONTROL_FILE: &str = "radmc3d.inp";

/// Spherical coordinates in the `amr_grid.inp` coordinate-system code.
const SPHERICAL_COORDINATES: u32 = 100;

fn write_column<W: Write>(out: &mut W, values: impl IntoIterator<Item = f64>) -> RadmcResult<()> {
    for value in values {
        writeln!(out, "{}", format_sci(value))?;
    }
    Ok(())
}

pub fn write_wavelengths<W: Write>(out: &mut W, wavelengths: &WavelengthGrid) -> RadmcResult<()> {
    writeln!(out, "{}", wavelengths.len())?;
    write_column(out, wavelengths.values().iter().copied())
}

/// One star, blackbody spectrum (negative temperature entry).
pub fn write_stars<W: Write>(
    out: &mut W,
    star: &StarConfig,
    stellar_mass: f64,
    wavelengths: &WavelengthGrid,
) -> RadmcResult<()> {
    writeln!(out, "2")?;
    writeln!(out, "1 {}\n", wavelengths.len())?;
    writeln!(
        out,
        "{} {} {} {} {}\n",
        format_sci(star.radius),
        format_sci(stellar_mass),
        format_sci(star.position[0]),
        format_sci(star.position[1]),
        format_sci(star.position[2]),
    )?;
    write_column(out, wavelengths.values().iter().copied())?;
    writeln!(out, "\n{}", format_sci(-star.temperature))?;
    Ok(())
}

pub fn write_amr_grid<W: Write>(out: &mut W, grid: &SphericalGrid) -> RadmcResult<()> {
    let (nr, ntheta, nphi) = grid.shape();
    writeln!(out, "1")?;
    writeln!(out, "0")?;
    writeln!(out, "{}", SPHERICAL_COORDINATES)?;
    writeln!(out, "0")?;
    writeln!(out, "1 1 1")?;
    writeln!(out, "{} {} {}", nr, ntheta, nphi)?;
    write_column(out, grid.radius_edges.iter().copied())?;
    write_column(out, grid.theta_edges.iter().copied())?;
    write_column(out, grid.phi_edges.iter().copied())
}

/// Single dust species. The array is indexed `(r, theta, phi)`; RADMC-3D
/// expects the radial index to vary fastest, so it is written transposed.
pub fn write_dust_density<W: Write>(out: &mut W, density: &Array3<f64>) -> RadmcResult<()> {
    writeln!(out, "1")?;
    writeln!(out, "{}", density.len())?;
    writeln!(out, "1")?;
    write_column(out, density.t().iter().copied())
}

pub fn write_dust_opacity<W: Write>(out: &mut W, dust: &DustConfig) -> RadmcResult<()> {
    let rule = |c: char| c.to_string().repeat(76);
    writeln!(out, "{:<16}Format number of this file", 2)?;
    writeln!(out, "{:<16}Nr of dust species", 1)?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{:<16}Way in which this dust species is read", 1)?;
    writeln!(out, "{:<16}0=Thermal grain", 0)?;
    writeln!(out, "{:<16}Extension of name of dustkappa_***.inp file", dust.opacity)?;
    writeln!(out, "{}", rule('-'))?;
    Ok(())
}

pub fn write_control<W: Write>(out: &mut W, solver: &SolverConfig) -> RadmcResult<()> {
    writeln!(out, "nphot = {}", solver.nphot)?;
    writeln!(out, "nphot_scat = {}", solver.nphot_scat)?;
    writeln!(out, "scattering_mode_max = {}", solver.scattering_mode_max)?;
    writeln!(out, "iranfreqmode = {}", solver.iranfreqmode)?;
    writeln!(
        out,
        "mc_scat_maxtauabs = {}",
        format_fortran_double(solver.mc_scat_maxtauabs)
    )?;
    Ok(())
}

/// Writes the input file set into one directory.
#[derive(Debug, Clone)]
pub struct RadmcInputWriter {
    dir: PathBuf,
}

impl RadmcInputWriter {
    /// Creates the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> RadmcResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| RadmcError::Create {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_file<F>(&self, name: &str, body: F) -> RadmcResult<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> RadmcResult<()>,
    {
        let path = self.dir.join(name);
        let file = File::create(&path).map_err(|source| RadmcError::Create {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        body(&mut out)?;
        out.flush()?;
        debug!(path = %path.display(), "Wrote RADMC-3D input file");
        Ok(path)
    }

    pub fn wavelengths(&self, wavelengths: &WavelengthGrid) -> RadmcResult<PathBuf> {
        self.write_file(WAVELENGTH_FILE, |out| write_wavelengths(out, wavelengths))
    }

    pub fn stars(
        &self,
        star: &StarConfig,
        stellar_mass: f64,
        wavelengths: &WavelengthGrid,
    ) -> RadmcResult<PathBuf> {
        self.write_file(STARS_FILE, |out| {
            write_stars(out, star, stellar_mass, wavelengths)
        })
    }

    pub fn amr_grid(&self, grid: &SphericalGrid) -> RadmcResult<PathBuf> {
        self.write_file(GRID_FILE, |out| write_amr_grid(out, grid))
    }

    pub fn dust_density(&self, density: &Array3<f64>) -> RadmcResult<PathBuf> {
        self.write_file(DUST_DENSITY_FILE, |out| write_dust_density(out, density))
    }

    pub fn dust_opacity(&self, dust: &DustConfig) -> RadmcResult<PathBuf> {
        self.write_file(DUST_OPACITY_FILE, |out| write_dust_opacity(out, dust))
    }

    pub fn control(&self, solver: &SolverConfig) -> RadmcResult<PathBuf> {
        self.write_file(CONTROL_FILE, |out| write_control(out, solver))
    }

    /// Writes all six input files and returns their paths.
    pub fn write_all(
        &self,
        model: &WarpedDiskModel,
        config: &SetupConfig,
    ) -> RadmcResult<Vec<PathBuf>> {
        let paths = vec![
            self.wavelengths(&model.wavelengths)?,
            self.stars(&config.star, model.stellar_mass, &model.wavelengths)?,
            self.amr_grid(&model.grid)?,
            self.dust_density(&model.dust_density)?,
            self.dust_opacity(&config.dust)?,
            self.control(&config.solver)?,
        ];
        info!(dir = %self.dir.display(), files = paths.len(), "Wrote RADMC-3D inputs");
        Ok(paths)
    }
}
