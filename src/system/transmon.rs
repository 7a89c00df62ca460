// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Transmon / Cooper-pair-box qubit in the charge basis.
//!
//! Hamiltonian (charge number n truncated to |n| ≤ ncut):
//!
//!   H = Σ_n 4·EC·(n − ng)² |n⟩⟨n|  −  EJ/2 Σ_n (|n⟩⟨n+1| + |n+1⟩⟨n|)
//!
//! Ref: Koch et al. (2007), Phys. Rev. A 76, 042319.

use ndarray::Array2;
use num_complex::Complex64;

use super::HermitianSystem;
use crate::error::Result;

/// Transmon qubit with Josephson energy `ej`, charging energy `ec`, and
/// offset charge `ng`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transmon {
    /// Josephson energy.
    pub ej: f64,
    /// Charging energy.
    pub ec: f64,
    /// Offset charge.
    pub ng: f64,
    /// Charge-basis truncation; dimension is 2·ncut + 1.
    ncut: usize,
}

const PARAMS: &[&str] = &["ej", "ec", "ng"];
const OPERATORS: &[&str] = &["n_operator", "cos_phi_operator", "sin_phi_operator"];

impl Transmon {
    /// Create a transmon with the given energies and truncation.
    pub fn new(ej: f64, ec: f64, ng: f64, ncut: usize) -> Self {
        Self { ej, ec, ng, ncut }
    }

    /// Charge-basis truncation.
    pub fn ncut(&self) -> usize {
        self.ncut
    }

    /// Charge number operator, diag(-ncut, ..., ncut).
    fn n_operator(&self) -> Array2<Complex64> {
        let dim = self.hilbertdim();
        let mut op = Array2::zeros((dim, dim));
        for index in 0..dim {
            let n = index as f64 - self.ncut as f64;
            op[[index, index]] = Complex64::new(n, 0.0);
        }
        op
    }

    /// cos(φ) operator: ½ Σ (|n⟩⟨n+1| + |n+1⟩⟨n|).
    fn cos_phi_operator(&self) -> Array2<Complex64> {
        let dim = self.hilbertdim();
        let mut op = Array2::zeros((dim, dim));
        let half = Complex64::new(0.5, 0.0);
        for index in 0..dim - 1 {
            op[[index, index + 1]] = half;
            op[[index + 1, index]] = half;
        }
        op
    }

    /// sin(φ) operator: -i/2 Σ (|n⟩⟨n+1| − |n+1⟩⟨n|).
    fn sin_phi_operator(&self) -> Array2<Complex64> {
        let dim = self.hilbertdim();
        let mut op = Array2::zeros((dim, dim));
        let half_i = Complex64::new(0.0, 0.5);
        for index in 0..dim - 1 {
            op[[index, index + 1]] = -half_i;
            op[[index + 1, index]] = half_i;
        }
        op
    }
}

impl HermitianSystem for Transmon {
    fn hilbertdim(&self) -> usize {
        2 * self.ncut + 1
    }

    fn hamiltonian(&self) -> Array2<Complex64> {
        let dim = self.hilbertdim();
        let mut h = Array2::zeros((dim, dim));
        for index in 0..dim {
            let n = index as f64 - self.ncut as f64;
            let charging = 4.0 * self.ec * (n - self.ng) * (n - self.ng);
            h[[index, index]] = Complex64::new(charging, 0.0);
        }
        let tunneling = Complex64::new(-self.ej / 2.0, 0.0);
        for index in 0..dim - 1 {
            h[[index, index + 1]] = tunneling;
            h[[index + 1, index]] = tunneling;
        }
        h
    }

    fn param_names(&self) -> &'static [&'static str] {
        PARAMS
    }

    fn param(&self, name: &str) -> Result<f64> {
        match name {
            "ej" => Ok(self.ej),
            "ec" => Ok(self.ec),
            "ng" => Ok(self.ng),
            _ => Err(self.unknown_param(name)),
        }
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "ej" => self.ej = value,
            "ec" => self.ec = value,
            "ng" => self.ng = value,
            _ => return Err(self.unknown_param(name)),
        }
        Ok(())
    }

    fn operator_names(&self) -> &'static [&'static str] {
        OPERATORS
    }

    fn operator(&self, name: &str) -> Result<Array2<Complex64>> {
        match name {
            "n_operator" => Ok(self.n_operator()),
            "cos_phi_operator" => Ok(self.cos_phi_operator()),
            "sin_phi_operator" => Ok(self.sin_phi_operator()),
            _ => Err(self.unknown_operator(name)),
        }
    }
}
