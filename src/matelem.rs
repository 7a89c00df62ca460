// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Operator matrix elements in the eigenbasis.
//!
//! A matrix element is the amplitude `⟨i|O|j⟩` of a registered operator
//! `O` between eigenstates `i` and `j` of the Hamiltonian. The swept
//! form computes the full table for every value of a named parameter,
//! re-evaluating the operator at each point so parameter-dependent
//! operators stay consistent with the eigenbasis they are sandwiched in.

use ndarray::{Array2, Array3};
use num_complex::Complex64;
use tracing::debug;

use crate::error::{Error, Result};
use crate::solver;
use crate::spectrum::SpectrumData;
use crate::sweep::{spectrum_vs_paramvals, SweepOptions};
use crate::system::HermitianSystem;

/// Selection of matrix elements, either by eigenvalue count (all pairs
/// `(i, j)` with `i, j < count`) or by explicit index pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectElems {
    /// All pairs up to (but excluding) this level count.
    Count(usize),
    /// Specific `(i, j)` index pairs.
    Pairs(Vec<(usize, usize)>),
}

impl SelectElems {
    /// Number of eigenvectors needed to cover the selection.
    pub fn evals_count(&self) -> Result<usize> {
        match self {
            Self::Count(0) => Err(Error::Configuration("element count must be > 0".into())),
            Self::Count(count) => Ok(*count),
            Self::Pairs(pairs) => pairs
                .iter()
                .flat_map(|&(i, j)| [i, j])
                .max()
                .map(|max_index| max_index + 1)
                .ok_or_else(|| {
                    Error::Configuration("element selection must be non-empty".into())
                }),
        }
    }
}

/// Matrix elements of a registered operator between eigenstates.
///
/// When `eigenstates` is supplied (columns are eigenvectors), the table
/// covers all of its columns and no solve is performed; otherwise the
/// lowest `evals_count` eigenvectors are computed first. The result is
/// `V† O V`.
pub fn matrixelement_table<S: HermitianSystem>(
    system: &S,
    operator_name: &str,
    eigenstates: Option<&Array2<Complex64>>,
    evals_count: usize,
) -> Result<Array2<Complex64>> {
    let operator = system.operator(operator_name)?;
    match eigenstates {
        Some(evecs) => {
            if evecs.nrows() != operator.nrows() {
                return Err(Error::Configuration(format!(
                    "eigenvector dimension {} does not match operator dimension {}",
                    evecs.nrows(),
                    operator.nrows()
                )));
            }
            Ok(sandwich(&operator, evecs))
        }
        None => {
            let (_, evecs) = solver::eigensystem(system, evals_count)?;
            Ok(sandwich(&operator, &evecs))
        }
    }
}

/// Matrix elements for each value of a named parameter.
///
/// Delegates to the spectrum sweep with eigenstates, then forms the
/// per-point element tables into `matrixelem_table[param][i][j]` on the
/// returned container (which also carries energies and eigenstates).
pub fn matelem_vs_paramvals<S: HermitianSystem>(
    system: &S,
    operator_name: &str,
    param_name: &str,
    param_vals: &[f64],
    evals_count: usize,
    num_workers: usize,
) -> Result<SpectrumData> {
    // Resolve the operator up front so an unknown name fails before any
    // eigensolve is attempted.
    system.operator(operator_name)?;

    let options = SweepOptions {
        evals_count,
        subtract_ground: false,
        get_eigenstates: true,
        num_workers,
    };
    let mut data = spectrum_vs_paramvals(system, param_name, param_vals, &options)?;

    debug!(
        operator = operator_name,
        param = param_name,
        points = param_vals.len(),
        "computing matrix-element tables"
    );

    let state_table = data
        .state_table
        .as_ref()
        .unwrap_or_else(|| unreachable!("sweep ran with eigenstates"));

    let mut matelem_table = Array3::zeros((param_vals.len(), evals_count, evals_count));
    for (index, &value) in param_vals.iter().enumerate() {
        let mut point_system = system.clone();
        point_system.set_param(param_name, value)?;
        let operator = point_system.operator(operator_name)?;
        let table = sandwich(&operator, &state_table[index]);
        matelem_table
            .index_axis_mut(ndarray::Axis(0), index)
            .assign(&table);
    }

    data.matrixelem_table = Some(matelem_table);
    Ok(data)
}

/// `V† O V` for eigenvector columns `V`.
fn sandwich(operator: &Array2<Complex64>, evecs: &Array2<Complex64>) -> Array2<Complex64> {
    let adjoint = evecs.t().mapv(|z| z.conj());
    adjoint.dot(&operator.dot(evecs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{Oscillator, Transmon};
    use crate::test_utils::TwoLevel;
    use approx::assert_relative_eq;

    #[test]
    fn test_select_elems_count() {
        assert_eq!(SelectElems::Count(4).evals_count().unwrap(), 4);
    }

    #[test]
    fn test_select_elems_pairs_imply_count() {
        let select = SelectElems::Pairs(vec![(0, 1), (2, 5)]);
        assert_eq!(select.evals_count().unwrap(), 6);
    }

    #[test]
    fn test_select_elems_empty_rejected() {
        assert!(SelectElems::Pairs(vec![]).evals_count().is_err());
        assert!(SelectElems::Count(0).evals_count().is_err());
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let system = TwoLevel::new(0.2, 1.0);
        let err = matrixelement_table(&system, "parity", None, 2).unwrap_err();
        assert!(matches!(err, Error::UnknownOperator { .. }));
    }

    #[test]
    fn test_oscillator_position_elements_match_closed_form() {
        // The oscillator Hamiltonian is diagonal, so its eigenbasis is
        // the number basis and ⟨m|x|n⟩ = √(n/2)·δ_{m,n-1} + √((n+1)/2)·δ_{m,n+1}.
        let osc = Oscillator::new(1.0, 6);
        let table = matrixelement_table(&osc, "position", None, 4).unwrap();
        for m in 0..4 {
            for n in 0..4 {
                let expected = if m + 1 == n {
                    (n as f64 / 2.0).sqrt()
                } else if m == n + 1 {
                    ((n as f64 + 1.0) / 2.0).sqrt()
                } else {
                    0.0
                };
                assert_relative_eq!(table[[m, n]].re, expected, epsilon = 1e-10);
                assert_relative_eq!(table[[m, n]].im, 0.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_supplied_eigenstates_skip_the_solve() {
        let system = TwoLevel::new(0.3, 1.0);
        let (_, evecs) = solver::eigensystem(&system, 2).unwrap();
        let from_supplied = matrixelement_table(&system, "sigma_x", Some(&evecs), 2).unwrap();
        let from_scratch = matrixelement_table(&system, "sigma_x", None, 2).unwrap();
        for ((i, j), val) in from_supplied.indexed_iter() {
            assert!((val - from_scratch[[i, j]]).norm() < 1e-12);
        }
    }

    #[test]
    fn test_mismatched_eigenstates_rejected() {
        let system = TwoLevel::new(0.3, 1.0);
        let wrong = Array2::<Complex64>::zeros((3, 2));
        let err = matrixelement_table(&system, "sigma_x", Some(&wrong), 2).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_swept_table_shape_and_hermiticity() {
        let qubit = Transmon::new(25.0, 1.0, 0.3, 8);
        let vals = [20.0, 25.0, 30.0, 35.0];
        let data = matelem_vs_paramvals(&qubit, "n_operator", "ej", &vals, 5, 1).unwrap();

        let table = data.matrixelem_table.as_ref().unwrap();
        assert_eq!(table.shape(), &[4, 5, 5]);

        // n_operator is Hermitian, so each point's table must be
        // conjugate-symmetric.
        for point in table.outer_iter() {
            for i in 0..5 {
                for j in 0..5 {
                    assert!((point[[i, j]] - point[[j, i]].conj()).norm() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_swept_table_carries_energies_and_states() {
        let system = TwoLevel::new(0.0, 1.0);
        let data =
            matelem_vs_paramvals(&system, "sigma_x", "coupling", &[0.0, 0.4], 2, 1).unwrap();
        assert_eq!(data.energy_table.shape(), &[2, 2]);
        assert_eq!(data.state_table.as_ref().unwrap().len(), 2);
        assert_eq!(data.param_name.as_deref(), Some("coupling"));
    }

    #[test]
    fn test_swept_unknown_operator_fails_before_sweep() {
        let system = TwoLevel::new(0.0, 1.0);
        let err = matelem_vs_paramvals(&system, "parity", "coupling", &[0.0], 2, 1).unwrap_err();
        assert!(matches!(err, Error::UnknownOperator { .. }));
    }
}
