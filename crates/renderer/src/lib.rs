//! Image rendering for RADMC-3D output.
//!
//! - Colormaps (`hot`, `magma`, `gray`)
//! - Log/linear scaling with clipping
//! - PNG encoding (indexed or RGBA)

pub mod colormap;
pub mod error;
pub mod image;
pub mod png;

pub use colormap::{Color, Colormap};
pub use error::{RenderError, RenderResult};
pub use image::{render_image_png, render_rgba, Scale, ScaleOptions};
