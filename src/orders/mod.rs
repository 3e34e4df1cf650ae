//! orders — perturbative-order model, selection, and scale-variation checks.
//!
//! Purpose
//! -------
//! Represent the perturbative orders of a coefficient grid and answer the two
//! bookkeeping questions every fold must settle before any numeric work:
//! which orders participate for a requested `(max_as, max_al)` pair, and
//! whether the orders needed for a requested scale variation are actually
//! present in the grid.
//!
//! Key behaviors
//! -------------
//! - Model a single order as an immutable 4-tuple of coupling powers and
//!   scale-variation log markers ([`order::Order`]).
//! - Build positional order masks and filtered order lists for a
//!   `(max_as, max_al)` request (`order::create_mask`,
//!   `order::filtered_orders`), plus the pure-QCD tower projection
//!   (`order::pure_qcd_orders`).
//! - Decide, per scale kind, whether central and/or scale-varied orders are
//!   simultaneously available at the top of the tower
//!   ([`availability::scale_variation_availability`]).
//! - Surface malformed requests as structured errors ([`errors::OrderError`])
//!   rather than panics.
//!
//! Invariants & assumptions
//! ------------------------
//! - Order lists are read-only snapshots in the grid's native enumeration;
//!   masks are positional and never reordered (position maps to an external
//!   array index).
//! - `mask.len() == orders.len()` always; filtering preserves native order.
//! - The availability checker requires a non-empty filtered order list; an
//!   empty list is a caller error, reported as
//!   [`errors::OrderError::EmptyOrderList`].
//!
//! Conventions
//! -----------
//! - Coupling powers are 0-indexed internal exponents; the effective max
//!   order returned by the availability checker is renormalized to the
//!   1-indexed external convention (`max - min + 1`).
//! - Scale-variation markers are `0` for the central contribution and
//!   non-zero for a variation contribution at that order.
//!
//! Downstream usage
//! ----------------
//! - The compatibility checker and the evolution orchestrator build their
//!   order masks here before projecting grid kinematics.
//! - Drivers call [`availability::scale_variation_availability`] to decide
//!   whether a requested `(xir, xif)` variation is legal for a given grid.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules encode the fixed truth tables for the
//!   five-branch availability decision tree, the mask invariants, and the
//!   pure-QCD tower projection.

pub mod availability;
pub mod errors;
pub mod order;
pub mod scale;

pub mod prelude {
    pub use super::availability::{AvailableAtMax, scale_variation_availability};
    pub use super::errors::{OrderError, OrderResult};
    pub use super::order::{Order, OrderMask, create_mask, filtered_orders, pure_qcd_orders};
    pub use super::scale::{ScaleInfo, ScaleKind};
}
