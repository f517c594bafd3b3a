// main.rs
//
// Computes the unrolled cutting template for a fixed elliptical-prism
// lampshade and writes it to elipticalprism_net_export.pdf in the current
// directory. Progress goes to stdout and to elipticalprism_net.log.
//
// Set RUST_LOG to adjust verbosity, e.g. RUST_LOG=prismnet=trace.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use prismnet::float_types::Real;
use prismnet::net::{CutSpec, NetParams, compute_net};
use prismnet::render::render_net;

// Lampshade dimensions, all lengths in mm, angles in degrees
const MAJOR_AXIS: Real = 12.0;
const MINOR_AXIS: Real = 4.0;
const HEIGHT: Real = 25.0;
const CUT1_ANGLE: Real = 45.0;
const CUT2_ANGLE: Real = 45.0;
const CUT1_START_HEIGHT: Real = 3.0;
const CUT2_START_HEIGHT: Real = 1.0;

const LOG_PATH: &str = "elipticalprism_net.log";
const PDF_PATH: &str = "elipticalprism_net_export.pdf";

/// Initialize the tracing subscriber: a compact layer on stdout mirrored by
/// an ANSI-free layer appending to the log file.
fn init_tracing(log_path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prismnet=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout).compact())
        .with(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn run() -> Result<()> {
    info!("starting net generation");

    let params = NetParams::new(
        MAJOR_AXIS,
        MINOR_AXIS,
        HEIGHT,
        CutSpec::new(CUT1_ANGLE, CUT1_START_HEIGHT),
        CutSpec::new(CUT2_ANGLE, CUT2_START_HEIGHT),
    );

    info!("starting geometry calculation");
    let net = compute_net(&params).context("geometry calculation failed")?;

    let pdf_path = Path::new(PDF_PATH);
    info!(path = %pdf_path.display(), "output path");

    render_net(&net, &params, pdf_path).context("failed to render template")?;
    Ok(())
}

fn main() {
    if let Err(err) = init_tracing(Path::new(LOG_PATH)) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}
