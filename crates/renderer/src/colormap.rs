//! Matplotlib-style colormaps as piecewise-linear color stops.

use crate::error::RenderError;
use std::fmt;
use std::str::FromStr;

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Linear color interpolation
fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
    Color::new(
        mix(color1.r, color2.r),
        mix(color1.g, color2.g),
        mix(color1.b, color2.b),
        mix(color1.a, color2.a),
    )
}

// matplotlib "hot": red, then green, then blue ramp up in turn
const HOT: &[(f64, Color)] = &[
    (0.0, Color::rgb(11, 0, 0)),
    (0.365079, Color::rgb(255, 0, 0)),
    (0.746032, Color::rgb(255, 255, 0)),
    (1.0, Color::rgb(255, 255, 255)),
];

const MAGMA: &[(f64, Color)] = &[
    (0.0, Color::rgb(0, 0, 4)),
    (0.125, Color::rgb(28, 16, 68)),
    (0.25, Color::rgb(79, 18, 123)),
    (0.375, Color::rgb(129, 37, 129)),
    (0.5, Color::rgb(181, 54, 122)),
    (0.625, Color::rgb(229, 80, 100)),
    (0.75, Color::rgb(251, 135, 97)),
    (0.875, Color::rgb(254, 194, 135)),
    (1.0, Color::rgb(252, 253, 191)),
];

const GRAY: &[(f64, Color)] = &[(0.0, Color::rgb(0, 0, 0)), (1.0, Color::rgb(255, 255, 255))];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Hot,
    Magma,
    Gray,
}

impl Colormap {
    fn stops(self) -> &'static [(f64, Color)] {
        match self {
            Colormap::Hot => HOT,
            Colormap::Magma => MAGMA,
            Colormap::Gray => GRAY,
        }
    }

    /// Color for a normalized value; `t` is clamped to `[0, 1]`.
    pub fn color_at(self, t: f64) -> Color {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        for pair in stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                return interpolate_color(c0, c1, (t - t0) / (t1 - t0));
            }
        }
        stops[stops.len() - 1].1
    }

    /// `n` evenly spaced samples, first and last at the ends of the map.
    pub fn lut(self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.color_at(0.0)],
            _ => (0..n)
                .map(|i| self.color_at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hot" => Ok(Colormap::Hot),
            "magma" => Ok(Colormap::Magma),
            "gray" | "grey" => Ok(Colormap::Gray),
            _ => Err(RenderError::UnknownColormap(s.to_string())),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colormap::Hot => "hot",
            Colormap::Magma => "magma",
            Colormap::Gray => "gray",
        };
        f.write_str(name)
    }
}
