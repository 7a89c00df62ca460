// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Result containers for spectrum, sweep, and dispersion computations.
//!
//! Containers are self-describing: they carry the parameter snapshot and
//! the swept values used to produce them, so a caller can serialize or
//! re-derive quantities without re-running the solve. They are built
//! once by an engine and owned by the caller afterwards.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ndarray::{Array2, Array3};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::dispersion::DispersionSpec;
use crate::error::Result;

/// Energies (and optionally eigenvectors and matrix elements) from a
/// single-point solve or a parameter sweep.
///
/// `energy_table` is indexed `[param_index][level]`; rows are sorted
/// ascending by level. For a single-point result the table has one row
/// and `param_name`/`param_vals` are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrumData {
    /// Eigenenergies, `[param_index][level]`.
    pub energy_table: Array2<f64>,
    /// Snapshot of the system parameters at computation time.
    pub system_params: BTreeMap<String, f64>,
    /// Name of the swept parameter, if this is a sweep result.
    pub param_name: Option<String>,
    /// Swept parameter values, aligned with the rows of `energy_table`.
    pub param_vals: Option<Vec<f64>>,
    /// Per-point eigenvector records (columns are eigenvectors). Stored
    /// as an ordered sequence because the Hilbert-space dimension may
    /// legitimately differ between points for some system types.
    pub state_table: Option<Vec<Array2<Complex64>>>,
    /// Operator matrix elements, `[param_index][i][j]`.
    pub matrixelem_table: Option<Array3<Complex64>>,
}

impl SpectrumData {
    /// Container for a single-point result.
    pub fn single_point(
        energies: ndarray::Array1<f64>,
        system_params: BTreeMap<String, f64>,
        eigenstates: Option<Array2<Complex64>>,
    ) -> Self {
        Self {
            energy_table: energies.insert_axis(ndarray::Axis(0)),
            system_params,
            param_name: None,
            param_vals: None,
            state_table: eigenstates.map(|table| vec![table]),
            matrixelem_table: None,
        }
    }

    /// Number of parameter points in this container.
    pub fn param_count(&self) -> usize {
        self.energy_table.nrows()
    }

    /// Number of energy levels per point.
    pub fn level_count(&self) -> usize {
        self.energy_table.ncols()
    }

    /// Write the container to `path` as JSON.
    pub fn filewrite<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json(path, self)
    }
}

/// Bare energies and dispersions from a nested dispersion sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispersionData {
    /// Bare eigenenergies, `[induced_sample][swept_index][level]`.
    pub energy_cube: Array3<f64>,
    /// Dispersion (max − min over the induced scan),
    /// `[swept_index][which]` with `which` aligned with `labels`.
    pub dispersion_table: Array2<f64>,
    /// Transitions or levels the dispersions refer to.
    pub labels: DispersionSpec,
    /// Snapshot of the system parameters at computation time.
    pub system_params: BTreeMap<String, f64>,
    /// Name of the outer swept parameter (suffixed with `/ref` when a
    /// reference parameter was applied).
    pub param_name: String,
    /// Outer swept parameter values.
    pub param_vals: Vec<f64>,
}

impl DispersionData {
    /// Write the container to `path` as JSON.
    pub fn filewrite<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json(path, self)
    }
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}
