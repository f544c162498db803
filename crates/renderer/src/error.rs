use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height} for {len} values")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Invalid value range: vmin={vmin}, vmax={vmax}")]
    InvalidRange { vmin: f64, vmax: f64 },

    #[error("Wavelength index {index} out of range ({available} available)")]
    MissingWavelength { index: usize, available: usize },

    #[error("Unknown colormap '{0}'")]
    UnknownColormap(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Encode(err.to_string())
    }
}
