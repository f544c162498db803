//! Model assembly for a warped disk on a spherical RADMC-3D grid.
//!
//! ```text
//! DiskProfile + SetupConfig
//!      │
//!      ├─► SphericalGrid::new        (cell edges / centers)
//!      │
//!      ├─► angle_meshgrid            (global theta, phi per cell)
//!      │
//!      ├─► warped_coordinate_transformation
//!      │
//!      └─► dust_density              (Gaussian in local colatitude)
//!               │
//!               ▼
//!          WarpedDiskModel
//! ```

pub mod config;
pub mod density;
pub mod error;
pub mod grid;
pub mod model;
pub mod wavelength;

pub use config::{
    DustConfig, GridConfig, SetupConfig, SolverConfig, StarConfig, WavelengthConfig,
    WavelengthSegment,
};
pub use density::{broadcast_radial, dust_density};
pub use error::{ModelError, Result};
pub use grid::SphericalGrid;
pub use model::WarpedDiskModel;
pub use wavelength::{logspace, WavelengthGrid};
