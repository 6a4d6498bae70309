// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line front end: `dft <dft|idft> <source> <dest-base>`.
//!
//! A malformed invocation prints the usage text and exits 0.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use image_dft::{Pipeline, RustFftTransform, VisualizeOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const USAGE: &str = "Usage:\n  DFT <dft|idft> <source file> <dest file>\n";

#[derive(Parser, Debug)]
#[command(name = "dft")]
#[command(about = "2D DFT/IDFT of grayscale images", long_about = None)]
struct Cli {
    #[arg(value_enum, ignore_case = true)]
    mode: Mode,
    #[arg(allow_hyphen_values = true)]
    source: PathBuf,
    #[arg(allow_hyphen_values = true)]
    dest: PathBuf,
    /// Extra positionals are accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
    /// Show linear magnitudes instead of ln(1 + |c|).
    #[arg(long)]
    linear_magnitude: bool,
    /// Zero the DC magnitude before scaling the magnitude image.
    #[arg(long)]
    zero_dc: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Dft,
    Idft,
}

static TRACING: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once. Filter comes from `RUST_LOG`,
/// defaulting to `warn`.
fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        // Another subscriber may already be installed (e.g. under a test harness).
        let _ = Registry::default().with(filter).with(fmt_layer).try_init();
    });
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    init_tracing();

    let options = VisualizeOptions {
        log_magnitude: VisualizeOptions::default().log_magnitude && !cli.linear_magnitude,
        zero_dc: VisualizeOptions::default().zero_dc || cli.zero_dc,
    };
    let pipeline = Pipeline::new(RustFftTransform, options);

    let (op, result) = match cli.mode {
        Mode::Dft => ("DFT", pipeline.dft(&cli.source, &cli.dest).map(|_| ())),
        Mode::Idft => ("IDFT", pipeline.idft(&cli.source, &cli.dest).map(|_| ())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "pipeline aborted");
            eprintln!("{op}(): {err}");
            ExitCode::FAILURE
        }
    }
}
