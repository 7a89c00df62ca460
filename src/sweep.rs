// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parameter sweep over a Hermitian system.
//!
//! A sweep is an embarrassingly parallel map: every parameter point is
//! solved on an independent clone of the system, so the caller's
//! instance is never mutated and no restore step is needed on any exit
//! path. Results are collected at the input index position, which makes
//! the output identical for sequential and parallel execution.

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::solver;
use crate::spectrum::SpectrumData;
use crate::system::HermitianSystem;

/// Options for a spectrum sweep.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Number of eigenvalues per point, sorted from smallest to largest.
    pub evals_count: usize,
    /// Shift each point's energies so the ground state sits at zero.
    /// Only valid without eigenstates (the shift does not renormalize
    /// eigenvectors).
    pub subtract_ground: bool,
    /// Also compute and store eigenvectors for every point.
    pub get_eigenstates: bool,
    /// Worker threads; 1 means a plain sequential map.
    pub num_workers: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            evals_count: 6,
            subtract_ground: false,
            get_eigenstates: false,
            num_workers: 1,
        }
    }
}

impl SweepOptions {
    /// Validate option consistency.
    pub fn validate(&self) -> Result<()> {
        if self.evals_count == 0 {
            return Err(Error::Configuration("evals_count must be > 0".into()));
        }
        if self.num_workers == 0 {
            return Err(Error::Configuration("num_workers must be > 0".into()));
        }
        if self.subtract_ground && self.get_eigenstates {
            return Err(Error::Configuration(
                "subtract_ground is a values-only operation and cannot be combined \
                 with get_eigenstates"
                    .into(),
            ));
        }
        Ok(())
    }
}

/// One solved parameter point.
struct SweepPoint {
    energies: Array1<f64>,
    eigenstates: Option<Array2<Complex64>>,
}

/// Compute eigenvalues (and optionally eigenvectors) for each value of a
/// named parameter.
///
/// `energy_table` row `i` of the returned container holds the spectrum
/// at `param_vals[i]`, independent of worker count and scheduling. A
/// failure at any point aborts the whole sweep; no partial results are
/// returned. The caller's `system` is left untouched in all cases.
pub fn spectrum_vs_paramvals<S: HermitianSystem>(
    system: &S,
    param_name: &str,
    param_vals: &[f64],
    options: &SweepOptions,
) -> Result<SpectrumData> {
    options.validate()?;
    system.param(param_name)?;
    if param_vals.is_empty() {
        return Err(Error::Configuration("param_vals must be non-empty".into()));
    }
    let dim = system.hilbertdim();
    if options.evals_count > dim {
        return Err(Error::Dimension {
            requested: options.evals_count,
            hilbertdim: dim,
        });
    }

    debug!(
        param = param_name,
        points = param_vals.len(),
        evals_count = options.evals_count,
        num_workers = options.num_workers,
        "starting spectrum sweep"
    );

    let solve_point = |value: f64| -> Result<SweepPoint> {
        let mut point_system = system.clone();
        point_system.set_param(param_name, value)?;
        if options.get_eigenstates {
            let (energies, eigenstates) = solver::eigensystem(&point_system, options.evals_count)?;
            Ok(SweepPoint {
                energies,
                eigenstates: Some(eigenstates),
            })
        } else {
            let energies = solver::eigenvalues(&point_system, options.evals_count)?;
            Ok(SweepPoint {
                energies,
                eigenstates: None,
            })
        }
    };

    let points: Vec<SweepPoint> = run_indexed_map(param_vals, options.num_workers, solve_point)?;

    let mut energy_table = Array2::zeros((param_vals.len(), options.evals_count));
    for (index, point) in points.iter().enumerate() {
        energy_table.row_mut(index).assign(&point.energies);
    }
    if options.subtract_ground {
        for mut row in energy_table.rows_mut() {
            let ground = row[0];
            row.mapv_inplace(|e| e - ground);
        }
    }

    let state_table = if options.get_eigenstates {
        Some(
            points
                .into_iter()
                .map(|point| {
                    point
                        .eigenstates
                        .unwrap_or_else(|| unreachable!("eigenstates requested"))
                })
                .collect(),
        )
    } else {
        None
    };

    debug!(param = param_name, "spectrum sweep finished");

    Ok(SpectrumData {
        energy_table,
        system_params: system.parameters(),
        param_name: Some(param_name.to_string()),
        param_vals: Some(param_vals.to_vec()),
        state_table,
        matrixelem_table: None,
    })
}

/// Map `solve_point` over the values, preserving input order in the
/// output. With one worker this is a plain sequential map; otherwise the
/// same map runs on a scoped thread pool of the requested size.
pub(crate) fn run_indexed_map<I, T, F>(
    values: &[I],
    num_workers: usize,
    solve_point: F,
) -> Result<Vec<T>>
where
    I: Copy + Send + Sync,
    T: Send,
    F: Fn(I) -> Result<T> + Send + Sync,
{
    if num_workers <= 1 {
        return values.iter().map(|&value| solve_point(value)).collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .map_err(|e| Error::Configuration(format!("failed to build worker pool: {e}")))?;

    pool.install(|| {
        values
            .par_iter()
            .map(|&value| solve_point(value))
            .collect()
    })
}
