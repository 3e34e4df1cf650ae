//! rust_fktables — grid/operator bookkeeping for FK-table production, with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the compatibility-checking and order-selection engine to Python
//! via the `_rust_fktables` extension module. The crate combines a
//! perturbative-order coefficient grid and a PDF-evolution operator into a
//! precomputed FK table; everything numeric is delegated to the external
//! grid and evolution libraries, while this crate owns the bookkeeping that
//! must never silently produce a physically wrong combination.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`orders`, `compat`, `evolve`) as the
//!   public crate surface.
//! - Define `#[pyclass]`/`#[pyfunction]` wrappers and the `#[pymodule]`
//!   initializer for the `_rust_fktables` Python extension.
//! - Create and register Python submodules (`orders`, `checks`) under
//!   `rust_fktables` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All decision logic lives in the inner Rust modules; this file performs
//!   only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible functions mirror
//!   the invariants and signatures of their Rust counterparts (tolerant
//!   membership, order masks, availability verdicts, grid compatibility).
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_rust_fktables.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `rust_fktables` package.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - Drivers implement the `evolve::traits` seams for the concrete grid and
//!   operator libraries and call `evolve::orchestrator::evolve_grid`.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   integration tests driving the fold pipeline through fake
//!   collaborators.

pub mod compat;
pub mod evolve;
pub mod orders;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    compat::{
        grids::check_kinematic_grids,
        membership::{DEFAULT_ATOL, DEFAULT_RTOL, tolerant_in1d},
    },
    orders::{
        availability::{AvailableAtMax, scale_variation_availability},
        order::{Order, create_mask, filtered_orders},
        scale::ScaleKind,
    },
    utils::{extract_f64_array, extract_scale_kind, orders_from_tuples},
};

/// GridOrder — Python-facing view of a single perturbative order.
///
/// Purpose
/// -------
/// Expose the `(alphas, alpha, logxir, logxif)` tuple of a grid order to
/// Python callers and forward all semantics to [`Order`].
///
/// Key behaviors
/// -------------
/// - Construct from the four powers and expose them as read-only
///   properties.
/// - Round-trip back to a plain tuple via `as_tuple` for numpy-side
///   consumers.
///
/// Invariants
/// ----------
/// - Immutable after construction, like its Rust counterpart.
///
/// Notes
/// -----
/// - Native Rust code should use [`Order`] directly; this type exists
///   solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_fktables.orders")]
pub struct GridOrder {
    /// The wrapped order.
    inner: Order,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GridOrder {
    #[new]
    #[pyo3(text_signature = "(alphas, alpha, logxir, logxif, /)")]
    pub fn new(alphas: u32, alpha: u32, logxir: u32, logxif: u32) -> Self {
        GridOrder { inner: Order::new(alphas, alpha, logxir, logxif) }
    }

    /// Power of the strong coupling.
    #[getter]
    pub fn alphas(&self) -> u32 {
        self.inner.alphas
    }

    /// Power of the electroweak coupling.
    #[getter]
    pub fn alpha(&self) -> u32 {
        self.inner.alpha
    }

    /// Renormalization-scale log marker (0 for the central contribution).
    #[getter]
    pub fn logxir(&self) -> u32 {
        self.inner.logxir
    }

    /// Factorization-scale log marker (0 for the central contribution).
    #[getter]
    pub fn logxif(&self) -> u32 {
        self.inner.logxif
    }

    /// The order as a plain `(alphas, alpha, logxir, logxif)` tuple.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        self.inner.as_tuple()
    }
}

/// Build the positional order mask for a `(max_as, max_al)` request.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "create_mask", text_signature = "(orders, max_as, max_al, /)")]
fn py_create_mask(orders: Vec<(u32, u32, u32, u32)>, max_as: u32, max_al: u32) -> Vec<bool> {
    create_mask(&orders_from_tuples(&orders), max_as, max_al)
}

/// Check which contributions a grid makes available for a scale variation.
///
/// Returns the verdict as one of `"both"`, `"central"`, or `"scvar"`,
/// together with the effective maximum order (1-indexed above the tower's
/// floor).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "contains_sv",
    signature = (orders, max_as, max_al, sv_type),
    text_signature = "(orders, max_as, max_al, sv_type, /)"
)]
fn py_contains_sv(
    orders: Vec<(u32, u32, u32, u32)>, max_as: u32, max_al: u32, sv_type: &str,
) -> PyResult<(String, u32)> {
    let kind: ScaleKind = extract_scale_kind(sv_type)?;
    let order_list = filtered_orders(&orders_from_tuples(&orders), max_as, max_al);
    let (verdict, effective) = scale_variation_availability(&order_list, kind)?;
    let label = match verdict {
        AvailableAtMax::Both => "both",
        AvailableAtMax::CentralOnly => "central",
        AvailableAtMax::ScvarOnly => "scvar",
    };
    Ok((label.to_string(), effective))
}

/// Tolerant membership of each element of `b` in the sorted reference `a`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "in1d",
    signature = (a, b, rtol = None, atol = None),
    text_signature = "(a, b, /, rtol=1e-5, atol=1e-8)"
)]
fn py_in1d<'py>(
    py: Python<'py>, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>, rtol: Option<f64>,
    atol: Option<f64>,
) -> PyResult<Vec<bool>> {
    let a_arr = extract_f64_array(py, a)?;
    let b_arr = extract_f64_array(py, b)?;
    let a_slice = a_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("a must be a 1-D contiguous float64 array"))?;
    let b_slice = b_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("b must be a 1-D contiguous float64 array"))?;
    if a_slice.is_empty() {
        return Err(PyValueError::new_err("reference sequence a must not be empty"));
    }
    Ok(tolerant_in1d(
        a_slice,
        b_slice,
        rtol.unwrap_or(DEFAULT_RTOL),
        atol.unwrap_or(DEFAULT_ATOL),
    ))
}

/// Check operator/grid kinematic compatibility on raw arrays.
///
/// Raises `ValueError` naming the failing grid; returns `None` on success.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "check_kinematic_grids",
    signature = (x_grid, muf2_grid, op_mu2_grid, op_target_xgrid, xif = 1.0),
    text_signature = "(x_grid, muf2_grid, op_mu2_grid, op_target_xgrid, /, xif=1.0)"
)]
fn py_check_kinematic_grids<'py>(
    py: Python<'py>, x_grid: &Bound<'py, PyAny>, muf2_grid: &Bound<'py, PyAny>,
    op_mu2_grid: &Bound<'py, PyAny>, op_target_xgrid: &Bound<'py, PyAny>, xif: f64,
) -> PyResult<()> {
    let x = extract_f64_array(py, x_grid)?;
    let muf2 = extract_f64_array(py, muf2_grid)?;
    let op_mu2 = extract_f64_array(py, op_mu2_grid)?;
    let op_x = extract_f64_array(py, op_target_xgrid)?;
    let as_slice = |arr: &numpy::PyReadonlyArray1<'py, f64>, name: &str| {
        arr.as_slice()
            .map(<[f64]>::to_vec)
            .map_err(|_| PyValueError::new_err(format!("{name} must be a 1-D float64 array")))
    };
    check_kinematic_grids(
        &as_slice(&x, "x_grid")?,
        &as_slice(&muf2, "muf2_grid")?,
        &as_slice(&op_mu2, "op_mu2_grid")?,
        &as_slice(&op_x, "op_target_xgrid")?,
        xif,
    )?;
    Ok(())
}

/// _rust_fktables — PyO3 module initializer for the Python extension.
///
/// Creates the `orders` and `checks` submodules, attaches them to the
/// parent `_rust_fktables` module, and registers them in `sys.modules` so
/// they are importable via dotted paths from Python. Invoked automatically
/// by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_fktables<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let orders_mod = PyModule::new(_py, "orders")?;
    let checks_mod = PyModule::new(_py, "checks")?;
    orders_submodule(_py, m, &orders_mod)?;
    checks_submodule(_py, m, &checks_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_fktables.orders", orders_mod)?;
    _py.import("sys")?.getattr("modules")?.set_item("rust_fktables.checks", checks_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn orders_submodule<'py>(
    _py: Python, rust_fktables: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GridOrder>()?;
    m.add_function(wrap_pyfunction!(py_create_mask, m)?)?;
    m.add_function(wrap_pyfunction!(py_contains_sv, m)?)?;
    rust_fktables.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn checks_submodule<'py>(
    _py: Python, rust_fktables: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_in1d, m)?)?;
    m.add_function(wrap_pyfunction!(py_check_kinematic_grids, m)?)?;
    rust_fktables.add_submodule(m)?;
    Ok(())
}
