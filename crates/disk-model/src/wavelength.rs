//! Wavelength grid shared by the star and the dust opacities.

use crate::config::WavelengthSegment;
use crate::{ModelError, Result};

/// `count` values spaced evenly in log10 from `start` to `end`.
///
/// With `include_end = false` the last value stops one step short of `end`,
/// so consecutive segments can be concatenated without duplicates.
pub fn logspace(start: f64, end: f64, count: usize, include_end: bool) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }

    let (lo, hi) = (start.log10(), end.log10());
    let steps = if include_end { count - 1 } else { count };
    let step = (hi - lo) / steps as f64;

    (0..count)
        .map(|i| 10f64.powf(lo + step * i as f64))
        .collect()
}

/// Wavelength points in micron.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthGrid {
    values: Vec<f64>,
}

impl WavelengthGrid {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ModelError::config_error("empty wavelength grid"));
        }
        if values.iter().any(|&v| !(v > 0.0)) {
            return Err(ModelError::config_error("wavelengths must be positive"));
        }
        Ok(Self { values })
    }

    /// Concatenate log-spaced segments.
    pub fn from_segments(segments: &[WavelengthSegment]) -> Result<Self> {
        let mut values = Vec::with_capacity(segments.iter().map(|s| s.count).sum());

        for segment in segments {
            if !(segment.start > 0.0 && segment.end > 0.0) || segment.count == 0 {
                return Err(ModelError::config_error(format!(
                    "invalid wavelength segment {:?}",
                    segment
                )));
            }
            values.extend(logspace(
                segment.start,
                segment.end,
                segment.count,
                segment.include_end,
            ));
        }

        Self::new(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
