//! Warped-disk coordinate transformation.
//!
//! A warped disk has a normal vector that changes with radius. For every
//! radial shell of a spherical grid this crate rotates the global
//! `(theta, phi)` angles into the frame whose pole is the local disk normal,
//! so that a density law written for a flat disk can be evaluated on the
//! global grid.
//!
//! The rotation is decomposed into the azimuth of the tilt and its
//! inclination and applied as three plane rotations:
//!
//! ```text
//! (x, y)  --rotate(-azimuth)-->  (xt, yt)
//! (xt, z) --rotate(inclination)--> (xi, zi)
//! (xi, yt) --rotate(+azimuth)-->  (xn, yn)
//! ```

pub mod angle;
pub mod error;
pub mod tilt;
pub mod warp;

pub use angle::{angle_from_components, angles_from_components, rotate, rotate_arrays};
pub use error::{WarpError, WarpResult};
pub use tilt::{unit_normal, Tilt};
pub use warp::warped_coordinate_transformation;
