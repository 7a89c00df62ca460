// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dispersion of transition and level energies.
//!
//! The dispersion quantifies how strongly an energy varies as an
//! "induced" parameter (typically an offset charge or threading flux) is
//! scanned over its canonical `[0, 1]` range, evaluated at each point of
//! an outer swept parameter. For a transition `(i, j)` at a fixed swept
//! value, it is
//!
//!   max over the induced scan of (E_i − E_j)  −  min of the same.
//!
//! The engine runs a nested grid sweep (induced × swept), solving for
//! the lowest `max requested index + 1` eigenvalues in every cell, and
//! collapses the resulting energy cube into a dispersion table.

use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::solver;
use crate::spectrum::DispersionData;
use crate::sweep::run_indexed_map;
use crate::system::HermitianSystem;

/// Which quantities the dispersion is computed for: energy differences
/// of transitions `(i, j)`, or bare level energies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispersionSpec {
    /// Transition energies `E_i − E_j`.
    Transitions(Vec<(usize, usize)>),
    /// Bare level energies `E_j`.
    Levels(Vec<usize>),
}

impl DispersionSpec {
    /// Singleton transition `(i, j)`.
    pub fn transition(upper: usize, lower: usize) -> Self {
        Self::Transitions(vec![(upper, lower)])
    }

    /// Singleton bare level.
    pub fn level(level: usize) -> Self {
        Self::Levels(vec![level])
    }

    /// Number of requested transitions or levels.
    pub fn count(&self) -> usize {
        match self {
            Self::Transitions(pairs) => pairs.len(),
            Self::Levels(levels) => levels.len(),
        }
    }

    /// Highest level index any entry refers to.
    pub fn max_level(&self) -> Result<usize> {
        let max = match self {
            Self::Transitions(pairs) => pairs
                .iter()
                .flat_map(|&(upper, lower)| [upper, lower])
                .max(),
            Self::Levels(levels) => levels.iter().copied().max(),
        };
        max.ok_or_else(|| {
            Error::Configuration("dispersion requires at least one transition or level".into())
        })
    }
}

/// Options for a dispersion sweep.
#[derive(Debug, Clone)]
pub struct DispersionOptions {
    /// Number of evenly spaced samples of the induced parameter over
    /// `[0, 1]` used to bracket min and max energies.
    pub point_count: usize,
    /// Worker threads for the grid sweep; 1 means sequential.
    pub num_workers: usize,
    /// Optional reference parameter: when set, the reported parameter
    /// name becomes `"name/ref"` and the swept values are divided by the
    /// reference parameter's current value (e.g. charge dispersion vs
    /// EJ/EC).
    pub ref_param: Option<String>,
}

impl Default for DispersionOptions {
    fn default() -> Self {
        Self {
            point_count: 50,
            num_workers: 1,
            ref_param: None,
        }
    }
}

impl DispersionOptions {
    /// Validate option consistency.
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 2 {
            return Err(Error::Configuration(
                "point_count must be >= 2 to bracket min and max".into(),
            ));
        }
        if self.num_workers == 0 {
            return Err(Error::Configuration("num_workers must be > 0".into()));
        }
        Ok(())
    }
}

/// Compute the dispersion of the requested transitions or levels for
/// each value of the outer swept parameter.
///
/// Returns the bare energy cube indexed `[induced_sample][swept_index]
/// [level]` together with the dispersion table `[swept_index][which]`.
/// The caller's `system` is left untouched in all cases.
pub fn dispersion_vs_paramvals<S: HermitianSystem>(
    system: &S,
    induced_name: &str,
    param_name: &str,
    param_vals: &[f64],
    spec: &DispersionSpec,
    options: &DispersionOptions,
) -> Result<DispersionData> {
    options.validate()?;
    system.param(induced_name)?;
    system.param(param_name)?;
    if param_vals.is_empty() {
        return Err(Error::Configuration("param_vals must be non-empty".into()));
    }

    let evals_count = spec.max_level()? + 1;
    let dim = system.hilbertdim();
    if evals_count > dim {
        return Err(Error::Dimension {
            requested: evals_count,
            hilbertdim: dim,
        });
    }

    // Resolve the reference parameter before doing any work, so a bad
    // name fails fast.
    let reported = match &options.ref_param {
        Some(ref_name) => {
            let ref_val = system.param(ref_name)?;
            if ref_val == 0.0 {
                return Err(Error::Configuration(format!(
                    "reference parameter '{ref_name}' is zero"
                )));
            }
            Some((format!("{param_name}/{ref_name}"), ref_val))
        }
        None => None,
    };

    let induced_vals: Vec<f64> = linspace_unit(options.point_count);
    let swept_count = param_vals.len();

    debug!(
        induced = induced_name,
        param = param_name,
        grid_cells = induced_vals.len() * swept_count,
        evals_count,
        num_workers = options.num_workers,
        "starting dispersion sweep"
    );

    // Flattened grid, induced-major: cell index = d·swept_count + s.
    let cells: Vec<(f64, f64)> = induced_vals
        .iter()
        .flat_map(|&disp_val| param_vals.iter().map(move |&sweep_val| (disp_val, sweep_val)))
        .collect();

    let solve_cell = |(disp_val, sweep_val): (f64, f64)| {
        let mut cell_system = system.clone();
        cell_system.set_param(induced_name, disp_val)?;
        cell_system.set_param(param_name, sweep_val)?;
        solver::eigenvalues(&cell_system, evals_count)
    };
    let rows = run_indexed_map(&cells, options.num_workers, solve_cell)?;

    let mut energy_cube = Array3::zeros((induced_vals.len(), swept_count, evals_count));
    for (cell_index, energies) in rows.iter().enumerate() {
        let induced_index = cell_index / swept_count;
        let swept_index = cell_index % swept_count;
        for (level, &energy) in energies.iter().enumerate() {
            energy_cube[[induced_index, swept_index, level]] = energy;
        }
    }

    let dispersion_table = collapse_cube(&energy_cube, spec);

    debug!(induced = induced_name, param = param_name, "dispersion sweep finished");

    let (param_name, param_vals) = match reported {
        Some((name, ref_val)) => (name, param_vals.iter().map(|v| v / ref_val).collect()),
        None => (param_name.to_string(), param_vals.to_vec()),
    };

    Ok(DispersionData {
        energy_cube,
        dispersion_table,
        labels: spec.clone(),
        system_params: system.parameters(),
        param_name,
        param_vals,
    })
}

/// Max − min over the induced axis for every requested transition or
/// level, per swept value.
fn collapse_cube(energy_cube: &Array3<f64>, spec: &DispersionSpec) -> Array2<f64> {
    let induced_count = energy_cube.shape()[0];
    let swept_count = energy_cube.shape()[1];
    let mut table = Array2::zeros((swept_count, spec.count()));

    for swept_index in 0..swept_count {
        for which in 0..spec.count() {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for induced_index in 0..induced_count {
                let energy = match spec {
                    DispersionSpec::Transitions(pairs) => {
                        let (upper, lower) = pairs[which];
                        energy_cube[[induced_index, swept_index, upper]]
                            - energy_cube[[induced_index, swept_index, lower]]
                    }
                    DispersionSpec::Levels(levels) => {
                        energy_cube[[induced_index, swept_index, levels[which]]]
                    }
                };
                min = min.min(energy);
                max = max.max(energy);
            }
            table[[swept_index, which]] = max - min;
        }
    }
    table
}

/// `count` evenly spaced samples over `[0, 1]`, endpoints included.
fn linspace_unit(count: usize) -> Vec<f64> {
    let step = 1.0 / (count - 1) as f64;
    (0..count).map(|k| k as f64 * step).collect()
}
