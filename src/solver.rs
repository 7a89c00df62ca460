// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dense Hermitian eigensolver with deterministic post-processing.
//!
//! The raw decomposition comes back from the factorization in no
//! particular order and with an arbitrary overall phase per eigenvector.
//! Both are standardized here so that repeated solves of the same
//! Hamiltonian are reproducible:
//!
//! - eigenvalues are sorted ascending and eigenvectors reordered to match;
//! - each eigenvector is rotated so its largest-magnitude component is
//!   real and positive.

use nalgebra::DMatrix;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::system::HermitianSystem;

/// Iteration cap for the symmetric eigensolver; 0 lets it run until
/// convergence, which for Hermitian matrices is effectively guaranteed
/// unless the input contains non-finite entries.
const MAX_EIGEN_ITERATIONS: usize = 0;

/// Convergence threshold for off-diagonal elements.
const EIGEN_EPS: f64 = 1e-14;

/// Lowest `evals_count` eigenvalues of the system's Hamiltonian, sorted
/// ascending.
pub fn eigenvalues<S: HermitianSystem>(system: &S, evals_count: usize) -> Result<Array1<f64>> {
    let (evals, _) = solve(system, evals_count, false)?;
    Ok(evals)
}

/// Lowest `evals_count` eigenpairs of the system's Hamiltonian.
///
/// Eigenvalues are sorted ascending; the returned matrix holds the
/// matching eigenvectors as columns (`hilbertdim() × evals_count`), each
/// with the standardized phase convention.
pub fn eigensystem<S: HermitianSystem>(
    system: &S,
    evals_count: usize,
) -> Result<(Array1<f64>, Array2<Complex64>)> {
    let (evals, evecs) = solve(system, evals_count, true)?;
    Ok((evals, evecs.unwrap_or_else(|| unreachable!("eigenvectors requested"))))
}

fn solve<S: HermitianSystem>(
    system: &S,
    evals_count: usize,
    want_eigenvectors: bool,
) -> Result<(Array1<f64>, Option<Array2<Complex64>>)> {
    let dim = system.hilbertdim();
    if evals_count == 0 || evals_count > dim {
        return Err(Error::Dimension {
            requested: evals_count,
            hilbertdim: dim,
        });
    }

    let h = system.hamiltonian();
    if h.nrows() != dim || h.ncols() != dim {
        return Err(Error::Numerical(format!(
            "hamiltonian shape {:?} does not match hilbertdim {}",
            h.shape(),
            dim
        )));
    }
    if h.iter().any(|z| !z.re.is_finite() || !z.im.is_finite()) {
        return Err(Error::Numerical(
            "hamiltonian contains non-finite entries".into(),
        ));
    }

    let matrix = DMatrix::from_fn(dim, dim, |row, col| h[[row, col]]);
    let eig = matrix
        .try_symmetric_eigen(EIGEN_EPS, MAX_EIGEN_ITERATIONS)
        .ok_or_else(|| Error::Numerical("hermitian eigensolver did not converge".into()))?;

    // Ascending order of eigenvalues; eigenvectors follow the same
    // permutation.
    let mut order: Vec<usize> = (0..dim).collect();
    order.sort_by(|&a, &b| {
        eig.eigenvalues[a]
            .partial_cmp(&eig.eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let evals = Array1::from_iter(order[..evals_count].iter().map(|&i| eig.eigenvalues[i]));

    let evecs = if want_eigenvectors {
        let mut table = Array2::zeros((dim, evals_count));
        for (out_col, &src_col) in order[..evals_count].iter().enumerate() {
            let column = eig.eigenvectors.column(src_col);
            let phase = dominant_phase(column.iter());
            for row in 0..dim {
                table[[row, out_col]] = column[row] * phase;
            }
        }
        Some(table)
    } else {
        None
    };

    Ok((evals, evecs))
}

/// Phase factor that rotates the largest-magnitude component of a vector
/// onto the positive real axis.
fn dominant_phase<'a>(components: impl Iterator<Item = &'a Complex64>) -> Complex64 {
    let mut dominant = Complex64::new(1.0, 0.0);
    let mut best = 0.0;
    for &z in components {
        let mag = z.norm();
        if mag > best {
            best = mag;
            dominant = z;
        }
    }
    if best == 0.0 {
        Complex64::new(1.0, 0.0)
    } else {
        dominant.conj() / best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Transmon;
    use crate::test_utils::TwoLevel;
    use approx::assert_relative_eq;

    #[test]
    fn test_uncoupled_two_level_spectrum_is_exact() {
        let system = TwoLevel::new(0.0, 1.0);
        let evals = eigenvalues(&system, 2).unwrap();
        assert_eq!(evals[0], 0.0);
        assert_eq!(evals[1], 1.0);
    }

    #[test]
    fn test_coupled_two_level_matches_closed_form() {
        // H = diag(0, 1) + g·σx has eigenvalues 1/2 ∓ sqrt(1/4 + g²).
        let g = 0.7;
        let system = TwoLevel::new(g, 1.0);
        let evals = eigenvalues(&system, 2).unwrap();
        let root = (0.25 + g * g).sqrt();
        assert_relative_eq!(evals[0], 0.5 - root, epsilon = 1e-12);
        assert_relative_eq!(evals[1], 0.5 + root, epsilon = 1e-12);
    }

    #[test]
    fn test_eigenvalues_ascending() {
        let qubit = Transmon::new(30.0, 1.2, 0.3, 10);
        let evals = eigenvalues(&qubit, 8).unwrap();
        for pair in evals.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_count_exceeding_hilbertdim_is_dimension_error() {
        let system = TwoLevel::new(0.3, 1.0);
        let err = eigenvalues(&system, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Dimension {
                requested: 3,
                hilbertdim: 2
            }
        ));
    }

    #[test]
    fn test_zero_count_is_dimension_error() {
        let system = TwoLevel::new(0.3, 1.0);
        assert!(matches!(
            eigenvalues(&system, 0),
            Err(Error::Dimension { .. })
        ));
    }

    #[test]
    fn test_eigenvectors_satisfy_eigen_equation() {
        let qubit = Transmon::new(25.0, 1.0, 0.2, 6);
        let (evals, evecs) = eigensystem(&qubit, 4).unwrap();
        let h = qubit.hamiltonian();
        let hv = h.dot(&evecs);
        for col in 0..4 {
            for row in 0..qubit.hilbertdim() {
                let expected = evecs[[row, col]] * Complex64::new(evals[col], 0.0);
                assert!((hv[[row, col]] - expected).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_eigenvectors_are_normalized() {
        let qubit = Transmon::new(25.0, 1.0, 0.2, 6);
        let (_, evecs) = eigensystem(&qubit, 4).unwrap();
        for col in evecs.columns() {
            let norm_sqr: f64 = col.iter().map(|z| z.norm_sqr()).sum();
            assert_relative_eq!(norm_sqr, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_phase_standardization_is_reproducible() {
        let qubit = Transmon::new(30.0, 1.2, 0.3, 8);
        let (_, first) = eigensystem(&qubit, 5).unwrap();
        let (_, second) = eigensystem(&qubit, 5).unwrap();
        for ((i, j), val) in first.indexed_iter() {
            assert!((val - second[[i, j]]).norm() < 1e-10);
        }
    }

    #[test]
    fn test_dominant_component_is_real_positive() {
        let qubit = Transmon::new(30.0, 1.2, 0.3, 8);
        let (_, evecs) = eigensystem(&qubit, 3).unwrap();
        for col in evecs.columns() {
            let dominant = col
                .iter()
                .max_by(|a, b| a.norm().partial_cmp(&b.norm()).unwrap())
                .unwrap();
            assert!(dominant.re > 0.0);
            assert!(dominant.im.abs() < 1e-10);
        }
    }

    #[test]
    fn test_solve_leaves_system_unchanged() {
        let system = TwoLevel::new(0.4, 1.0);
        let before = system.clone();
        let _ = eigenvalues(&system, 2).unwrap();
        assert_eq!(system, before);
    }
}
