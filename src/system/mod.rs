// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! The Hermitian-system contract and the concrete systems shipped with
//! the crate.
//!
//! A [`HermitianSystem`] is any object exposing a finite-dimensional
//! Hermitian operator (its Hamiltonian) together with a closed registry
//! of named scalar parameters and named operator capabilities. Parameter
//! and operator lookup go through explicit registry methods rather than
//! any reflective dispatch, so an unknown name is a typed error, not a
//! panic.
//!
//! Systems are value types. The sweep engines clone a system per
//! parameter point and mutate only the clone, which is what makes sweeps
//! embarrassingly parallel: the caller's instance is never touched, and
//! its parameters read back unchanged after any engine call, success or
//! failure.

pub mod oscillator;
pub mod transmon;

pub use oscillator::Oscillator;
pub use transmon::Transmon;

use std::collections::BTreeMap;

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};

/// Contract for a finite-dimensional Hermitian eigenproblem.
///
/// `hamiltonian()` must return a Hermitian matrix of shape
/// `(hilbertdim(), hilbertdim())`, recomputed from the current parameter
/// state on every call. Implementations must not cache the Hamiltonian
/// or any derived eigensystem keyed by parameter values.
pub trait HermitianSystem: Clone + Send + Sync {
    /// Dimension of the Hilbert space.
    fn hilbertdim(&self) -> usize;

    /// Dense Hamiltonian matrix in the system's internal basis.
    fn hamiltonian(&self) -> Array2<Complex64>;

    /// Names of the mutable scalar parameters, in a fixed order.
    fn param_names(&self) -> &'static [&'static str];

    /// Current value of a registered parameter.
    fn param(&self, name: &str) -> Result<f64>;

    /// Set a registered parameter to a new value.
    fn set_param(&mut self, name: &str, value: f64) -> Result<()>;

    /// Names of the operator capabilities, in a fixed order.
    ///
    /// Default: no operators registered.
    fn operator_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Operator matrix in the same basis as the Hamiltonian.
    fn operator(&self, name: &str) -> Result<Array2<Complex64>> {
        Err(self.unknown_operator(name))
    }

    /// Snapshot of all registered parameters.
    fn parameters(&self) -> BTreeMap<String, f64> {
        self.param_names()
            .iter()
            .map(|&name| {
                let value = self
                    .param(name)
                    .unwrap_or_else(|_| unreachable!("registered parameter must resolve"));
                (name.to_string(), value)
            })
            .collect()
    }

    /// Typed error for a parameter lookup miss.
    fn unknown_param(&self, name: &str) -> Error {
        Error::UnknownParameter {
            name: name.to_string(),
            known: self.param_names().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Typed error for an operator lookup miss.
    fn unknown_operator(&self, name: &str) -> Error {
        Error::UnknownOperator {
            name: name.to_string(),
            known: self
                .operator_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
