#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::orders::{errors::OrderError, order::Order, scale::ScaleKind};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn orders_from_tuples(tuples: &[(u32, u32, u32, u32)]) -> Vec<Order> {
    tuples
        .iter()
        .map(|&(alphas, alpha, logxir, logxif)| Order::new(alphas, alpha, logxir, logxif))
        .collect()
}

#[cfg(feature = "python-bindings")]
pub fn extract_scale_kind(name: &str) -> PyResult<ScaleKind> {
    name.parse::<ScaleKind>().map_err(|err: OrderError| err.into())
}
