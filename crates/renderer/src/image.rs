//! Scaling and colormapping of image planes.

use crate::colormap::{Color, Colormap};
use crate::error::{RenderError, RenderResult};
use crate::png::create_png_auto;
use ndarray::ArrayView2;
use radmc_io::RadmcImage;
use rayon::prelude::*;
use tracing::debug;

/// Number of distinct colors used when mapping values; fits an indexed PNG.
const LUT_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Log,
    Linear,
}

/// Value-to-color mapping. With [`Scale::Log`] the limits are in log10 units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    pub scale: Scale,
    pub vmin: f64,
    pub vmax: f64,
    pub colormap: Colormap,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            scale: Scale::Log,
            vmin: -15.0,
            vmax: -12.0,
            colormap: Colormap::Hot,
        }
    }
}

impl ScaleOptions {
    fn validate(&self) -> RenderResult<()> {
        if !(self.vmin.is_finite() && self.vmax.is_finite() && self.vmin < self.vmax) {
            return Err(RenderError::InvalidRange {
                vmin: self.vmin,
                vmax: self.vmax,
            });
        }
        Ok(())
    }

    /// Normalized position in `[0, 1]`, or `None` for NaN input.
    /// Non-positive values on a log scale map to the bottom of the range.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let v = match self.scale {
            Scale::Log if value > 0.0 => value.log10(),
            Scale::Log => return Some(0.0),
            Scale::Linear => value,
        };
        Some(((v - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0))
    }
}

/// Map an image plane indexed `[iy, ix]` to RGBA rows.
///
/// Row 0 of the output is the largest `y`, so the image origin ends up
/// at the bottom left.
pub fn render_rgba(data: ArrayView2<'_, f64>, options: &ScaleOptions) -> RenderResult<Vec<u8>> {
    options.validate()?;
    let (height, width) = data.dim();
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions {
            width,
            height,
            len: data.len(),
        });
    }

    let lut = options.colormap.lut(LUT_SIZE);
    let mut pixels = vec![0u8; width * height * 4];

    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(row, out)| {
            let iy = height - 1 - row;
            for (ix, px) in out.chunks_exact_mut(4).enumerate() {
                let color = match options.normalize(data[[iy, ix]]) {
                    Some(t) => lut[(t * (LUT_SIZE - 1) as f64).round() as usize],
                    None => Color::transparent(),
                };
                px.copy_from_slice(&color.to_bytes());
            }
        });

    Ok(pixels)
}

/// Render one wavelength of a RADMC-3D image to PNG bytes.
pub fn render_image_png(
    image: &RadmcImage,
    ilam: usize,
    options: &ScaleOptions,
) -> RenderResult<Vec<u8>> {
    let plane = image
        .intensity(ilam)
        .ok_or(RenderError::MissingWavelength {
            index: ilam,
            available: image.nlam(),
        })?;

    let pixels = render_rgba(plane, options)?;
    let png = create_png_auto(&pixels, image.nx(), image.ny())?;

    debug!(
        ilam,
        wavelength = image.wavelengths[ilam],
        colormap = %options.colormap,
        bytes = png.len(),
        "Rendered image"
    );
    Ok(png)
}
