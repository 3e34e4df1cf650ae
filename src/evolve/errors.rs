//! Errors for the evolution orchestration layer.
//!
//! The orchestrator normalizes everything that can go wrong between "two
//! artifact paths" and "one written FK table" into a single enum: its own
//! precondition failures, the wrapped verdicts of the order and
//! compatibility layers, and failures reported by the external grid and
//! operator collaborators. None of these are retried and none degrade to
//! warnings; each aborts the run as a distinguishable failure.
use crate::compat::errors::CompatError;
use crate::orders::errors::OrderError;
#[cfg(feature = "python-bindings")]
use pyo3::PyErr;
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;

/// Result alias for orchestration operations.
pub type EvolveResult<T> = Result<T, EvolveError>;

/// Unified error type for the evolution orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolveError {
    // ---- Input validation ----
    /// A referenced grid, operator, or card path does not exist.
    InputNotFound { path: String },

    /// A scale-variation factor must be finite and strictly positive.
    InvalidScaleFactor { name: &'static str, value: f64 },

    // ---- Scheme and basis ----
    /// A scale-variation scheme was declared while the factorization factor
    /// is 1.0.
    SchemeConflict { scheme: String },

    /// The operator's flavor basis is neither the physical flavor basis nor
    /// the evolution basis.
    BasisIncompatible,

    // ---- Wrapped layer verdicts ----
    /// Order-selection or availability failure.
    Order(OrderError),

    /// Kinematic-grid compatibility failure.
    Compat(CompatError),

    // ---- Card I/O ----
    /// Reading or writing an operator card failed.
    CardIo { path: String, message: String },

    // ---- External collaborators ----
    /// A delegated grid or operator operation failed.
    External { context: &'static str, message: String },
}

impl std::fmt::Display for EvolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolveError::InputNotFound { path } => {
                write!(f, "Input path does not exist: {path}")
            }
            EvolveError::InvalidScaleFactor { name, value } => {
                write!(f, "Scale factor {name} must be finite and > 0; got: {value}")
            }
            EvolveError::SchemeConflict { scheme } => {
                write!(
                    f,
                    "Scale-variation scheme {scheme:?} is declared but the factorization \
                     factor is 1.0"
                )
            }
            EvolveError::BasisIncompatible => {
                write!(f, "The operator is neither in flavor nor in evolution basis.")
            }
            EvolveError::Order(err) => write!(f, "{err}"),
            EvolveError::Compat(err) => write!(f, "{err}"),
            EvolveError::CardIo { path, message } => {
                write!(f, "Operator card I/O failed for {path}: {message}")
            }
            EvolveError::External { context, message } => {
                write!(f, "External {context} operation failed: {message}")
            }
        }
    }
}

impl std::error::Error for EvolveError {}

impl From<OrderError> for EvolveError {
    fn from(err: OrderError) -> Self {
        EvolveError::Order(err)
    }
}

impl From<CompatError> for EvolveError {
    fn from(err: CompatError) -> Self {
        EvolveError::Compat(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<EvolveError> for PyErr {
    fn from(err: EvolveError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_input_not_found() {
        let err = EvolveError::InputNotFound { path: "grids/dy.lz4".to_string() };
        assert!(err.to_string().contains("grids/dy.lz4"));
    }

    #[test]
    fn display_scheme_conflict() {
        let err = EvolveError::SchemeConflict { scheme: "exponentiated".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("exponentiated"));
        assert!(msg.contains("1.0"));
    }

    #[test]
    fn wrapped_verdicts_keep_their_message() {
        let order: EvolveError = OrderError::EmptyOrderList.into();
        let compat: EvolveError =
            CompatError::XGridMismatch { value: 0.5, index: 0 }.into();
        assert_eq!(order.to_string(), OrderError::EmptyOrderList.to_string());
        assert!(compat.to_string().contains("x grids"));
    }

    #[test]
    fn error_trait_works() {
        let err = EvolveError::BasisIncompatible;
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.to_string().contains("basis"));
    }
}
