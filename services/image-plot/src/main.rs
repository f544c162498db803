//! Render a RADMC-3D `image.out` to PNG.
//!
//! With `--make-image` the imager is run first in the model directory
//! (scattered light at 1.65 micron, face-on, by default).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use radmc_io::{ImageRequest, RadmcImage, SolverCommand};
use renderer::{render_image_png, Colormap, Scale, ScaleOptions};

#[derive(Parser, Debug)]
#[command(name = "image-plot")]
#[command(about = "Render RADMC-3D images to PNG")]
struct Args {
    /// Directory holding the model inputs; relative paths resolve here
    #[arg(long, default_value = ".")]
    model_dir: PathBuf,

    /// Image file produced by the solver
    #[arg(long, default_value = radmc_io::image::IMAGE_FILE)]
    image: PathBuf,

    /// Output PNG
    #[arg(short, long, default_value = "disk_scattered_light.png")]
    output: PathBuf,

    /// Lower color limit (log10 units unless --linear)
    #[arg(long, default_value_t = -15.0, allow_negative_numbers = true)]
    vmin: f64,

    /// Upper color limit (log10 units unless --linear)
    #[arg(long, default_value_t = -12.0, allow_negative_numbers = true)]
    vmax: f64,

    /// Linear instead of log10 color scaling
    #[arg(long)]
    linear: bool,

    /// hot, magma or gray
    #[arg(long, default_value = "hot")]
    colormap: Colormap,

    /// Which wavelength of a multi-wavelength image to render
    #[arg(long, default_value_t = 0)]
    wavelength_index: usize,

    /// Run `radmc3d image` before rendering
    #[arg(long)]
    make_image: bool,

    #[arg(long, default_value_t = 301)]
    npix: u32,

    /// Inclination [deg]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    incl: f64,

    /// Observer azimuth [deg]
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    phi: f64,

    /// Wavelength [micron]
    #[arg(long, default_value_t = 1.65)]
    wav: f64,

    /// Image width [au]
    #[arg(long, default_value_t = 200.0)]
    sizeau: f64,

    #[arg(long, default_value_t = 8)]
    threads: u32,

    /// Leave out direct stellar light
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    nostar: bool,

    /// Solver executable
    #[arg(long, env = "RADMC3D_BIN", default_value = radmc_io::solver::DEFAULT_PROGRAM)]
    radmc3d: String,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn image_request(&self) -> ImageRequest {
        ImageRequest {
            npix: self.npix,
            incl: self.incl,
            phi: self.phi,
            wavelength: self.wav,
            size_au: self.sizeau,
            threads: self.threads,
            nostar: self.nostar,
        }
    }

    fn scale_options(&self) -> ScaleOptions {
        ScaleOptions {
            scale: if self.linear { Scale::Linear } else { Scale::Log },
            vmin: self.vmin,
            vmax: self.vmax,
            colormap: self.colormap,
        }
    }

    fn image_path(&self) -> PathBuf {
        if self.image.is_relative() {
            self.model_dir.join(&self.image)
        } else {
            self.image.clone()
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: &Args) -> Result<()> {
    if args.make_image {
        SolverCommand::image(&args.radmc3d, &args.image_request())
            .run(&args.model_dir)
            .context("imaging run failed")?;
    }

    let image_path = args.image_path();
    let image = RadmcImage::from_path(&image_path)
        .with_context(|| format!("reading {}", image_path.display()))?;
    let [x0, x1, y0, y1] = image.extent_au();
    info!(
        nx = image.nx(),
        ny = image.ny(),
        wavelengths = ?image.wavelengths,
        extent_au = ?(x0, x1, y0, y1),
        "Loaded image"
    );

    let png = render_image_png(&image, args.wavelength_index, &args.scale_options())?;
    fs::write(&args.output, &png)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(path = %args.output.display(), bytes = png.len(), "Wrote PNG");

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs);

    run(&args)
}
