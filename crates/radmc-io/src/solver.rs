//! Building and running `radmc3d` command lines.

use crate::error::{RadmcError, RadmcResult};
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

pub const DEFAULT_PROGRAM: &str = "radmc3d";

/// Parameters of a `radmc3d image` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub npix: u32,
    /// Inclination [deg]
    pub incl: f64,
    /// Observer azimuth [deg]
    pub phi: f64,
    /// Wavelength [micron]
    pub wavelength: f64,
    /// Full image width [au]
    pub size_au: f64,
    pub threads: u32,
    /// Exclude direct stellar light
    pub nostar: bool,
}

impl Default for ImageRequest {
    /// Scattered-light image at 1.65 micron, face-on.
    fn default() -> Self {
        Self {
            npix: 301,
            incl: 0.0,
            phi: 180.0,
            wavelength: 1.65,
            size_au: 200.0,
            threads: 8,
            nostar: true,
        }
    }
}

impl ImageRequest {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "image".to_string(),
            "npix".to_string(),
            self.npix.to_string(),
            "incl".to_string(),
            self.incl.to_string(),
            "phi".to_string(),
            self.phi.to_string(),
            "lambda".to_string(),
            self.wavelength.to_string(),
            "sizeau".to_string(),
            self.size_au.to_string(),
            "setthreads".to_string(),
            self.threads.to_string(),
        ];
        if self.nostar {
            args.push("nostar".to_string());
        }
        args
    }
}

/// A solver invocation: program plus arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverCommand {
    program: String,
    args: Vec<String>,
}

impl SolverCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Monte Carlo thermal run for the dust temperature.
    pub fn mctherm(program: impl Into<String>) -> Self {
        Self::new(program, vec!["mctherm".to_string()])
    }

    pub fn image(program: impl Into<String>, request: &ImageRequest) -> Self {
        Self::new(program, request.to_args())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run to completion in `workdir`, inheriting stdout and stderr.
    pub fn run(&self, workdir: &Path) -> RadmcResult<()> {
        info!(
            program = %self.program,
            args = %self.args.join(" "),
            workdir = %workdir.display(),
            "Running solver"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(workdir)
            .status()
            .map_err(|source| RadmcError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(program = %self.program, status = ?status.code(), "Solver failed");
            return Err(RadmcError::Solver {
                program: self.program.clone(),
                status: status.code(),
            });
        }
        Ok(())
    }
}
