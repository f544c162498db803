//! Reader for RADMC-3D `image.out` files.
//!
//! Layout (whitespace separated, blank lines insignificant):
//!
//! ```text
//! iformat                    1 = intensity, 3 = Stokes I Q U V
//! nx ny
//! nlam
//! pixsize_x pixsize_y        [cm]
//! lambda_1 ... lambda_nlam   [micron]
//! pixel values, x fastest, then y, then wavelength
//! ```

use crate::error::{RadmcError, RadmcResult};
use disk_common::constants::AU;
use ndarray::{s, Array3, ArrayView2};
use std::path::Path;
use tracing::debug;

pub const IMAGE_FILE: &str = "image.out";

const FORMAT_INTENSITY: i64 = 1;
const FORMAT_STOKES: i64 = 3;

/// A multi-wavelength image; only Stokes I is kept for polarized output.
#[derive(Debug, Clone)]
pub struct RadmcImage {
    /// Pixel size [cm] along x and y
    pub pixel_size: (f64, f64),
    /// Wavelengths [micron]
    pub wavelengths: Vec<f64>,
    /// Intensity [erg/s/cm^2/Hz/ster], shape `(nlam, ny, nx)`
    pub intensity: Array3<f64>,
    pub stokes: bool,
}

/// Token stream that remembers source line numbers for error reporting.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line: 0,
        }
    }

    fn next_token(&mut self, what: &str) -> RadmcResult<(usize, &'a str)> {
        match self.inner.next() {
            Some((line, tok)) => {
                self.last_line = line;
                Ok((line, tok))
            }
            None => Err(RadmcError::parse(
                self.last_line,
                format!("unexpected end of file, expected {}", what),
            )),
        }
    }

    fn int(&mut self, what: &str) -> RadmcResult<i64> {
        let (line, tok) = self.next_token(what)?;
        tok.parse()
            .map_err(|_| RadmcError::parse(line, format!("invalid {} '{}'", what, tok)))
    }

    fn count(&mut self, what: &str) -> RadmcResult<usize> {
        let value = self.int(what)?;
        usize::try_from(value)
            .map_err(|_| RadmcError::parse(self.last_line, format!("negative {}", what)))
    }

    fn float(&mut self, what: &str) -> RadmcResult<f64> {
        let (line, tok) = self.next_token(what)?;
        parse_float(tok)
            .ok_or_else(|| RadmcError::parse(line, format!("invalid {} '{}'", what, tok)))
    }
}

/// Accepts Fortran `D` exponents as well as `E`.
fn parse_float(token: &str) -> Option<f64> {
    token
        .parse()
        .ok()
        .or_else(|| token.replace(['D', 'd'], "e").parse().ok())
}

impl RadmcImage {
    pub fn from_path(path: impl AsRef<Path>) -> RadmcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let image = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            nx = image.nx(),
            ny = image.ny(),
            nlam = image.wavelengths.len(),
            "Read RADMC-3D image"
        );
        Ok(image)
    }

    pub fn parse(text: &str) -> RadmcResult<Self> {
        let mut tokens = Tokens::new(text);

        let iformat = tokens.int("format number")?;
        let stokes = match iformat {
            FORMAT_INTENSITY => false,
            FORMAT_STOKES => true,
            other => return Err(RadmcError::UnsupportedFormat(other)),
        };

        let nx = tokens.count("nx")?;
        let ny = tokens.count("ny")?;
        let nlam = tokens.count("nlam")?;
        if nx == 0 || ny == 0 || nlam == 0 {
            return Err(RadmcError::parse(
                tokens.last_line,
                format!("empty image dimensions {} x {} x {}", nx, ny, nlam),
            ));
        }
        let cells = nx
            .checked_mul(ny)
            .and_then(|n| n.checked_mul(nlam))
            .ok_or_else(|| {
                RadmcError::parse(
                    tokens.last_line,
                    format!("image dimensions {} x {} x {} overflow", nx, ny, nlam),
                )
            })?;
        let pixel_size = (tokens.float("pixel size")?, tokens.float("pixel size")?);

        let wavelengths = (0..nlam)
            .map(|_| tokens.float("wavelength"))
            .collect::<RadmcResult<Vec<_>>>()?;

        let per_pixel = if stokes { 4 } else { 1 };
        // every value takes at least two bytes of text
        let mut values = Vec::with_capacity(cells.min(text.len() / 2));
        for _ in 0..cells {
            values.push(tokens.float("pixel value")?);
            for _ in 1..per_pixel {
                tokens.float("Stokes component")?;
            }
        }

        let intensity = Array3::from_shape_vec((nlam, ny, nx), values)
            .map_err(|e| RadmcError::parse(tokens.last_line, e.to_string()))?;

        Ok(Self {
            pixel_size,
            wavelengths,
            intensity,
            stokes,
        })
    }

    pub fn nx(&self) -> usize {
        self.intensity.dim().2
    }

    pub fn ny(&self) -> usize {
        self.intensity.dim().1
    }

    pub fn nlam(&self) -> usize {
        self.intensity.dim().0
    }

    /// Image at one wavelength, indexed `[iy, ix]`.
    pub fn intensity(&self, ilam: usize) -> Option<ArrayView2<'_, f64>> {
        (ilam < self.nlam()).then(|| self.intensity.slice(s![ilam, .., ..]))
    }

    /// `[x_min, x_max, y_min, y_max]` in au, centered on the origin.
    pub fn extent_au(&self) -> [f64; 4] {
        let half_x = 0.5 * self.nx() as f64 * self.pixel_size.0 / AU;
        let half_y = 0.5 * self.ny() as f64 * self.pixel_size.1 / AU;
        [-half_x, half_x, -half_y, half_y]
    }
}
