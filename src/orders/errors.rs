//! Errors for perturbative-order bookkeeping (order selection and
//! scale-variation availability checks).
//!
//! The availability checker refuses to answer on an empty order list (there
//! is no quantity to compare), and the Python bridge needs a structured error
//! for unrecognized scale-kind names. Both are collected in [`OrderError`].
#[cfg(feature = "python-bindings")]
use pyo3::PyErr;
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;

/// Result alias for order-selection and availability operations.
pub type OrderResult<T> = Result<T, OrderError>;

/// Error type for the order model and the availability checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    // ---- Preconditions ----
    /// Availability check invoked on an empty filtered order list.
    EmptyOrderList,

    // ---- Parsing ----
    /// Unrecognized scale-kind name (expected a renormalization or
    /// factorization spelling).
    InvalidScaleKind { name: String, reason: &'static str },
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::EmptyOrderList => {
                write!(f, "Filtered order list is empty; there is no order to check.")
            }
            OrderError::InvalidScaleKind { name, reason } => {
                write!(f, "Invalid scale kind {name:?}. {reason}")
            }
        }
    }
}

impl std::error::Error for OrderError {}

#[cfg(feature = "python-bindings")]
impl From<OrderError> for PyErr {
    fn from(err: OrderError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_order_list() {
        let err = OrderError::EmptyOrderList;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn display_invalid_scale_kind() {
        let err = OrderError::InvalidScaleKind {
            name: "central".to_string(),
            reason: "Valid kinds are 'ren' and 'fact'.",
        };
        let msg = err.to_string();
        assert!(msg.contains("central"));
        assert!(msg.contains("'ren'"));
    }

    #[test]
    fn error_trait_works() {
        let err = OrderError::EmptyOrderList;
        let dyn_err: &dyn std::error::Error = &err;
        assert!(dyn_err.to_string().contains("order"));
    }
}
