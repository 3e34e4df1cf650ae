//! evolve::types — shared numeric aliases for the orchestration layer.
//!
//! Purpose
//! -------
//! Centralize the container types flowing between the orchestrator and the
//! external collaborators, so the rest of the evolution code stays agnostic
//! to the concrete `ndarray` shapes and can evolve with the collaborators'
//! interfaces.
//!
//! Conventions
//! -----------
//! - Kinematic grids (momentum fractions, squared scales) are 1-D `f64`
//!   arrays, sorted ascending in the producing artifact.
//! - Auxiliary grid metadata is a flat string-to-string map; keys are owned
//!   by the producing tool and treated as opaque here except for the
//!   documented integrability marker.
//! - The `(xir, xif)` pair travels together; both components are validated
//!   once by the orchestrator options and never re-checked downstream.
use ndarray::Array1;
use std::collections::HashMap;

/// A kinematic grid: momentum fractions `x` or squared scales `Q²`.
pub type KinematicGrid = Array1<f64>;

/// Auxiliary key-value metadata attached to a coefficient grid.
pub type MetadataMap = HashMap<String, String>;

/// The `(xir, xif)` scale-variation factor pair.
pub type Xi = (f64, f64);

/// Metadata key marking a grid whose x-grid needs the integrability
/// treatment (appended `x = 1.0` endpoint, linear interpolation).
pub const INTEGRABILITY_KEY: &str = "integrability_version";
