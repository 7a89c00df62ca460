// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command-line driver for spectrum, dispersion, and matrix-element
//! sweeps over a transmon qubit.
//!
//! # Usage
//!
//! ```bash
//! # Transmon spectrum vs offset charge
//! qubit-spectra spectrum --param ng --from 0 --to 1 --points 101 \
//!     --levels 6 --out spectrum.json
//!
//! # Charge dispersion of the 0-1 transition vs EJ
//! qubit-spectra dispersion --param ej --from 10 --to 50 --points 20 \
//!     --induced ng --transition 1,0 --out dispersion.json
//!
//! # Charge-operator matrix elements vs EJ
//! qubit-spectra matelem --operator n_operator --param ej \
//!     --from 10 --to 50 --points 20 --levels 4 --out matelem.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qubit_spectra::dispersion::{dispersion_vs_paramvals, DispersionOptions, DispersionSpec};
use qubit_spectra::matelem::matelem_vs_paramvals;
use qubit_spectra::sweep::{spectrum_vs_paramvals, SweepOptions};
use qubit_spectra::system::Transmon;
use qubit_spectra::{Error, Result, VERSION};

/// Spectrum and parameter-sweep engine for superconducting qubits
#[derive(Parser)]
#[command(name = "qubit-spectra")]
#[command(version = VERSION)]
#[command(about = "Compute qubit spectra, dispersions, and matrix elements")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Transmon parameters shared by all subcommands.
#[derive(Args)]
struct QubitArgs {
    /// Josephson energy
    #[arg(long, default_value_t = 30.0)]
    ej: f64,

    /// Charging energy
    #[arg(long, default_value_t = 1.2)]
    ec: f64,

    /// Offset charge
    #[arg(long, default_value_t = 0.0)]
    ng: f64,

    /// Charge-basis truncation (dimension is 2*ncut + 1)
    #[arg(long, default_value_t = 20)]
    ncut: usize,
}

/// Swept-parameter range shared by all subcommands.
#[derive(Args)]
struct RangeArgs {
    /// Name of the swept parameter (ej, ec, or ng)
    #[arg(long)]
    param: String,

    /// First swept value
    #[arg(long)]
    from: f64,

    /// Last swept value
    #[arg(long)]
    to: f64,

    /// Number of swept values
    #[arg(long, default_value_t = 51)]
    points: usize,

    /// Worker threads (1 = sequential)
    #[arg(long, default_value_t = 1, env = "QUBIT_SPECTRA_WORKERS")]
    workers: usize,

    /// Output JSON path
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Eigenvalues vs a swept parameter
    Spectrum {
        #[command(flatten)]
        qubit: QubitArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Number of eigenvalues per point
        #[arg(long, default_value_t = 6)]
        levels: usize,

        /// Report energies relative to the ground state
        #[arg(long)]
        subtract_ground: bool,
    },
    /// Dispersion of transition/level energies over an induced parameter
    Dispersion {
        #[command(flatten)]
        qubit: QubitArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Induced parameter scanned over [0, 1]
        #[arg(long, default_value = "ng")]
        induced: String,

        /// Transition as "upper,lower" (repeatable)
        #[arg(long, value_parser = parse_transition)]
        transition: Vec<(usize, usize)>,

        /// Bare level index (repeatable; overrides --transition)
        #[arg(long)]
        level: Vec<usize>,

        /// Induced samples used to bracket min and max
        #[arg(long, default_value_t = 50)]
        point_count: usize,

        /// Divide swept values by this parameter's current value
        #[arg(long)]
        ref_param: Option<String>,
    },
    /// Operator matrix elements vs a swept parameter
    Matelem {
        #[command(flatten)]
        qubit: QubitArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Registered operator name
        #[arg(long, default_value = "n_operator")]
        operator: String,

        /// Number of eigenstates per point
        #[arg(long, default_value_t = 4)]
        levels: usize,
    },
}

fn parse_transition(raw: &str) -> std::result::Result<(usize, usize), String> {
    let (upper, lower) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"upper,lower\", got \"{raw}\""))?;
    let upper = upper.trim().parse().map_err(|e| format!("bad level index: {e}"))?;
    let lower = lower.trim().parse().map_err(|e| format!("bad level index: {e}"))?;
    Ok((upper, lower))
}

fn sweep_values(range: &RangeArgs) -> Result<Vec<f64>> {
    if range.points < 2 {
        return Err(Error::Configuration("--points must be >= 2".into()));
    }
    let step = (range.to - range.from) / (range.points - 1) as f64;
    Ok((0..range.points).map(|k| range.from + k as f64 * step).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Spectrum {
            qubit,
            range,
            levels,
            subtract_ground,
        } => {
            let system = Transmon::new(qubit.ej, qubit.ec, qubit.ng, qubit.ncut);
            let vals = sweep_values(&range)?;
            let options = SweepOptions {
                evals_count: levels,
                subtract_ground,
                get_eigenstates: false,
                num_workers: range.workers,
            };
            let data = spectrum_vs_paramvals(&system, &range.param, &vals, &options)?;
            data.filewrite(&range.out)?;
            info!(out = %range.out.display(), points = vals.len(), "wrote spectrum sweep");
        }
        Commands::Dispersion {
            qubit,
            range,
            induced,
            transition,
            level,
            point_count,
            ref_param,
        } => {
            let system = Transmon::new(qubit.ej, qubit.ec, qubit.ng, qubit.ncut);
            let vals = sweep_values(&range)?;
            let spec = if !level.is_empty() {
                DispersionSpec::Levels(level)
            } else if !transition.is_empty() {
                DispersionSpec::Transitions(transition)
            } else {
                DispersionSpec::transition(1, 0)
            };
            let options = DispersionOptions {
                point_count,
                num_workers: range.workers,
                ref_param,
            };
            let data =
                dispersion_vs_paramvals(&system, &induced, &range.param, &vals, &spec, &options)?;
            data.filewrite(&range.out)?;
            info!(out = %range.out.display(), points = vals.len(), "wrote dispersion sweep");
        }
        Commands::Matelem {
            qubit,
            range,
            operator,
            levels,
        } => {
            let system = Transmon::new(qubit.ej, qubit.ec, qubit.ng, qubit.ncut);
            let vals = sweep_values(&range)?;
            let data = matelem_vs_paramvals(
                &system,
                &operator,
                &range.param,
                &vals,
                levels,
                range.workers,
            )?;
            data.filewrite(&range.out)?;
            info!(out = %range.out.display(), points = vals.len(), "wrote matrix-element sweep");
        }
    }

    Ok(())
}
