//! Errors for kinematic-grid compatibility checks.
//!
//! A failed check names *which* grid mismatched and the first offending
//! value, so a driver can report the incompatibility without re-deriving it.
//! There is no partial-success mode; any variant aborts the run.
#[cfg(feature = "python-bindings")]
use pyo3::PyErr;
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;

/// Result alias for compatibility checks.
pub type CompatResult<T> = Result<T, CompatError>;

/// Error type for operator/grid compatibility verdicts.
#[derive(Debug, Clone, PartialEq)]
pub enum CompatError {
    // ---- Grid mismatches ----
    /// An operator scale-grid value is not tolerantly contained in the
    /// grid's required Q² set.
    ScaleGridMismatch { value: f64, index: usize },

    /// An operator target momentum-fraction value is not tolerantly
    /// contained in the grid's x-values.
    XGridMismatch { value: f64, index: usize },

    // ---- Degenerate projections ----
    /// The grid projection produced an empty reference sequence; there is
    /// nothing to compare against.
    EmptyReferenceGrid { which: &'static str },
}

impl std::fmt::Display for CompatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatError::ScaleGridMismatch { value, index } => {
                write!(
                    f,
                    "Q2 grids of the operator and the coefficient grid are NOT compatible: \
                     operator value {value} (distinct index {index}) has no tolerant match"
                )
            }
            CompatError::XGridMismatch { value, index } => {
                write!(
                    f,
                    "x grids of the operator and the coefficient grid are NOT compatible: \
                     operator value {value} (distinct index {index}) has no tolerant match"
                )
            }
            CompatError::EmptyReferenceGrid { which } => {
                write!(f, "The coefficient grid's {which} projection is empty.")
            }
        }
    }
}

impl std::error::Error for CompatError {}

#[cfg(feature = "python-bindings")]
impl From<CompatError> for PyErr {
    fn from(err: CompatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_grid() {
        let q2 = CompatError::ScaleGridMismatch { value: 15.0, index: 0 };
        let x = CompatError::XGridMismatch { value: 0.5, index: 2 };
        assert!(q2.to_string().contains("Q2 grids"));
        assert!(x.to_string().contains("x grids"));
    }

    #[test]
    fn display_reports_the_offending_value() {
        let err = CompatError::ScaleGridMismatch { value: 25.0, index: 1 };
        assert!(err.to_string().contains("25"));
    }

    #[test]
    fn error_trait_works() {
        let err = CompatError::EmptyReferenceGrid { which: "x-grid" };
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.to_string().contains("x-grid"));
    }
}
