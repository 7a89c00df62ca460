// Copyright 2026 Qubit Spectra Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for spectrum and sweep computations.

use std::fmt;

/// Result type alias for spectrum computations.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type.
#[derive(Debug)]
pub enum Error {
    /// Requested eigenvalue count exceeds the Hilbert-space dimension
    Dimension {
        requested: usize,
        hilbertdim: usize,
    },
    /// Eigensolver non-convergence or ill-conditioned Hamiltonian
    Numerical(String),
    /// Sweep parameter name is not registered on the system
    UnknownParameter { name: String, known: Vec<String> },
    /// Named operator capability is not registered on the system
    UnknownOperator { name: String, known: Vec<String> },
    /// Malformed options, transitions, levels, or element selections
    Configuration(String),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Dimension {
                requested,
                hilbertdim,
            } => write!(
                f,
                "Dimension error: requested {} eigenvalues of a {}-dimensional Hilbert space",
                requested, hilbertdim
            ),
            Error::Numerical(msg) => write!(f, "Numerical error: {}", msg),
            Error::UnknownParameter { name, known } => write!(
                f,
                "Unknown parameter '{}' (registered parameters: {})",
                name,
                known.join(", ")
            ),
            Error::UnknownOperator { name, known } => write!(
                f,
                "Unknown operator '{}' (registered operators: {})",
                name,
                known.join(", ")
            ),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_dimension() {
        let e = Error::Dimension {
            requested: 8,
            hilbertdim: 2,
        };
        assert_eq!(
            e.to_string(),
            "Dimension error: requested 8 eigenvalues of a 2-dimensional Hilbert space"
        );
    }

    #[test]
    fn test_error_display_unknown_parameter() {
        let e = Error::UnknownParameter {
            name: "flux".into(),
            known: vec!["ej".into(), "ec".into(), "ng".into()],
        };
        assert_eq!(
            e.to_string(),
            "Unknown parameter 'flux' (registered parameters: ej, ec, ng)"
        );
    }

    #[test]
    fn test_error_display_unknown_operator() {
        let e = Error::UnknownOperator {
            name: "phi".into(),
            known: vec!["n_operator".into()],
        };
        assert_eq!(
            e.to_string(),
            "Unknown operator 'phi' (registered operators: n_operator)"
        );
    }

    #[test]
    fn test_error_display_configuration() {
        let e = Error::Configuration("point_count must be > 0".into());
        assert_eq!(e.to_string(), "Configuration error: point_count must be > 0");
    }

    #[test]
    fn test_io_error_source_preserved() {
        use std::error::Error as StdError;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e = Error::from(io);
        assert!(e.source().is_some());
    }
}
