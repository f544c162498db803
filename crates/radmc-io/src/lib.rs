//! File-level interface to the RADMC-3D radiative-transfer code.
//!
//! - [`inputs`]: plain-text input files (`amr_grid.inp`, `dust_density.inp`,
//!   `stars.inp`, ...)
//! - [`image`]: reader for `image.out`
//! - [`solver`]: building and running `radmc3d` command lines

pub mod error;
pub mod format;
pub mod image;
pub mod inputs;
pub mod solver;

pub use error::{RadmcError, RadmcResult};
pub use format::{format_fortran_double, format_sci};
pub use image::RadmcImage;
pub use inputs::RadmcInputWriter;
pub use solver::{ImageRequest, SolverCommand};
