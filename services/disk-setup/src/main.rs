//! Warped disk problem setup.
//!
//! Reads a per-radius disk profile, evaluates every grid cell in its
//! shell's tilted frame, and writes the RADMC-3D input files. Optionally
//! runs the thermal Monte Carlo step afterwards.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use disk_common::DiskProfile;
use disk_model::{SetupConfig, WarpedDiskModel};
use radmc_io::{RadmcInputWriter, SolverCommand};

#[derive(Parser, Debug)]
#[command(name = "disk-setup")]
#[command(about = "Write RADMC-3D inputs for a warped disk")]
struct Args {
    /// Disk profile (.json, .yaml or .yml)
    #[arg(short, long, env = "WARP_PROFILE")]
    profile: PathBuf,

    /// Setup configuration (YAML); built-in defaults when omitted
    #[arg(short, long, env = "WARP_CONFIG")]
    config: Option<PathBuf>,

    /// Directory receiving the input files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Run `radmc3d mctherm` in the output directory afterwards
    #[arg(long)]
    run_mctherm: bool,

    /// Solver executable
    #[arg(long, env = "RADMC3D_BIN", default_value = radmc_io::solver::DEFAULT_PROGRAM)]
    radmc3d: String,
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

fn load_config(path: Option<&PathBuf>) -> Result<SetupConfig> {
    let mut config = match path {
        Some(path) => SetupConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SetupConfig::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let profile = DiskProfile::from_path(&args.profile)
        .with_context(|| format!("loading profile {}", args.profile.display()))?;
    debug!(time = ?profile.time, "Profile snapshot time");

    let config = load_config(args.config.as_ref())?;
    let model = WarpedDiskModel::build(&profile, &config).context("building disk model")?;

    let writer = RadmcInputWriter::new(&args.output_dir)?;
    let written = writer.write_all(&model, &config)?;

    if args.run_mctherm {
        SolverCommand::mctherm(&args.radmc3d)
            .run(writer.dir())
            .context("thermal Monte Carlo run failed")?;
    }

    Ok(written)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs);

    info!("Starting warped disk setup");
    let written = run(&args)?;
    info!(files = written.len(), dir = %args.output_dir.display(), "Setup complete");

    Ok(())
}
