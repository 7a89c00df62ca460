// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Spectrum computation and parameter-sweep engine for superconducting
//! qubits.
//!
//! A qubit is modeled as a Hermitian eigenproblem: any type implementing
//! [`system::HermitianSystem`] exposes a dense Hamiltonian, a closed
//! registry of scalar parameters, and a closed registry of named
//! operators. On top of that contract the crate provides:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  dispersion            matelem                │
//! │  (nested grid sweep)   (⟨i|O|j⟩ tables)       │
//! ├───────────────────────────────────────────────┤
//! │  sweep (parallel map over parameter values)   │
//! ├───────────────────────────────────────────────┤
//! │  solver (Hermitian eigh, ordered,             │
//! │          phase-standardized)                  │
//! ├───────────────────────────────────────────────┤
//! │  system (HermitianSystem trait + Transmon,    │
//! │          Oscillator)                          │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Sweeps are value-oriented: every parameter point is solved on an
//! independent clone of the system, so engines never mutate the caller's
//! instance and results are deterministic for any worker count.
//!
//! # Example
//!
//! ```
//! use qubit_spectra::sweep::{spectrum_vs_paramvals, SweepOptions};
//! use qubit_spectra::system::Transmon;
//!
//! let qubit = Transmon::new(30.0, 1.2, 0.0, 15);
//! let ng_vals: Vec<f64> = (0..21).map(|k| k as f64 / 20.0).collect();
//! let options = SweepOptions { evals_count: 4, ..Default::default() };
//! let data = spectrum_vs_paramvals(&qubit, "ng", &ng_vals, &options).unwrap();
//! assert_eq!(data.energy_table.shape(), &[21, 4]);
//! ```
//!
//! # Modules
//!
//! - [`system`]: the `HermitianSystem` contract and shipped qubit types
//! - [`solver`]: single-point eigenvalue/eigenvector solve
//! - [`spectrum`]: self-describing result containers
//! - [`sweep`]: parameter sweep with sequential or parallel execution
//! - [`dispersion`]: max−min energy spread over an induced parameter
//! - [`matelem`]: operator matrix elements, single-point and swept
//! - [`error`]: error types

pub mod dispersion;
pub mod error;
pub mod matelem;
pub mod solver;
pub mod spectrum;
pub mod sweep;
pub mod system;

pub use error::{Error, Result};
pub use spectrum::{DispersionData, SpectrumData};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
