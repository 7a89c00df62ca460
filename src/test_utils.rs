// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::Result;
use crate::system::HermitianSystem;

/// Minimal two-level system: H = diag(0, splitting) + coupling·σx.
///
/// The extra `detune` parameter is registered but deliberately ignored
/// by the Hamiltonian, which makes every level energy invariant under a
/// scan of it — useful for dispersion tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoLevel {
    pub coupling: f64,
    pub splitting: f64,
    pub detune: f64,
}

const PARAMS: &[&str] = &["coupling", "splitting", "detune"];
const OPERATORS: &[&str] = &["sigma_x", "sigma_z"];

impl TwoLevel {
    pub fn new(coupling: f64, splitting: f64) -> Self {
        Self {
            coupling,
            splitting,
            detune: 0.0,
        }
    }
}

impl HermitianSystem for TwoLevel {
    fn hilbertdim(&self) -> usize {
        2
    }

    fn hamiltonian(&self) -> Array2<Complex64> {
        let mut h = Array2::zeros((2, 2));
        h[[0, 1]] = Complex64::new(self.coupling, 0.0);
        h[[1, 0]] = Complex64::new(self.coupling, 0.0);
        h[[1, 1]] = Complex64::new(self.splitting, 0.0);
        h
    }

    fn param_names(&self) -> &'static [&'static str] {
        PARAMS
    }

    fn param(&self, name: &str) -> Result<f64> {
        match name {
            "coupling" => Ok(self.coupling),
            "splitting" => Ok(self.splitting),
            "detune" => Ok(self.detune),
            _ => Err(self.unknown_param(name)),
        }
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "coupling" => self.coupling = value,
            "splitting" => self.splitting = value,
            "detune" => self.detune = value,
            _ => return Err(self.unknown_param(name)),
        }
        Ok(())
    }

    fn operator_names(&self) -> &'static [&'static str] {
        OPERATORS
    }

    fn operator(&self, name: &str) -> Result<Array2<Complex64>> {
        let mut op = Array2::zeros((2, 2));
        match name {
            "sigma_x" => {
                op[[0, 1]] = Complex64::new(1.0, 0.0);
                op[[1, 0]] = Complex64::new(1.0, 0.0);
            }
            "sigma_z" => {
                op[[0, 0]] = Complex64::new(1.0, 0.0);
                op[[1, 1]] = Complex64::new(-1.0, 0.0);
            }
            _ => return Err(self.unknown_operator(name)),
        }
        Ok(op)
    }
}
