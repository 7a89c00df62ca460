// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Truncated harmonic oscillator in the number basis.
//!
//! H = E_osc · diag(0, 1, ..., dim-1); the zero-point offset is dropped
//! so the ground state sits at zero energy.

use ndarray::Array2;
use num_complex::Complex64;

use super::HermitianSystem;
use crate::error::Result;

/// Harmonic oscillator with level spacing `e_osc` and a fixed basis
/// truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    /// Level spacing.
    pub e_osc: f64,
    dim: usize,
}

const PARAMS: &[&str] = &["e_osc"];
const OPERATORS: &[&str] = &["annihilation", "creation", "number", "position"];

impl Oscillator {
    /// Create an oscillator with the given level spacing and dimension.
    pub fn new(e_osc: f64, dim: usize) -> Self {
        Self { e_osc, dim }
    }

    /// Annihilation operator a: a|n⟩ = √n |n-1⟩.
    fn annihilation(&self) -> Array2<Complex64> {
        let mut op = Array2::zeros((self.dim, self.dim));
        for n in 1..self.dim {
            op[[n - 1, n]] = Complex64::new((n as f64).sqrt(), 0.0);
        }
        op
    }

    /// Creation operator a†.
    fn creation(&self) -> Array2<Complex64> {
        let mut op = Array2::zeros((self.dim, self.dim));
        for n in 1..self.dim {
            op[[n, n - 1]] = Complex64::new((n as f64).sqrt(), 0.0);
        }
        op
    }

    /// Number operator a†a.
    fn number(&self) -> Array2<Complex64> {
        let mut op = Array2::zeros((self.dim, self.dim));
        for n in 0..self.dim {
            op[[n, n]] = Complex64::new(n as f64, 0.0);
        }
        op
    }

    /// Dimensionless position operator (a + a†)/√2.
    fn position(&self) -> Array2<Complex64> {
        let inv_sqrt2 = Complex64::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        (self.annihilation() + self.creation()) * inv_sqrt2
    }
}

impl HermitianSystem for Oscillator {
    fn hilbertdim(&self) -> usize {
        self.dim
    }

    fn hamiltonian(&self) -> Array2<Complex64> {
        let mut h = Array2::zeros((self.dim, self.dim));
        for n in 0..self.dim {
            h[[n, n]] = Complex64::new(self.e_osc * n as f64, 0.0);
        }
        h
    }

    fn param_names(&self) -> &'static [&'static str] {
        PARAMS
    }

    fn param(&self, name: &str) -> Result<f64> {
        match name {
            "e_osc" => Ok(self.e_osc),
            _ => Err(self.unknown_param(name)),
        }
    }

    fn set_param(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "e_osc" => {
                self.e_osc = value;
                Ok(())
            }
            _ => Err(self.unknown_param(name)),
        }
    }

    fn operator_names(&self) -> &'static [&'static str] {
        OPERATORS
    }

    fn operator(&self, name: &str) -> Result<Array2<Complex64>> {
        match name {
            "annihilation" => Ok(self.annihilation()),
            "creation" => Ok(self.creation()),
            "number" => Ok(self.number()),
            "position" => Ok(self.position()),
            _ => Err(self.unknown_operator(name)),
        }
    }
}
