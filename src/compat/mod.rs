//! compat — tolerant grid matching and operator/grid compatibility verdicts.
//!
//! Purpose
//! -------
//! Answer whether the kinematic grids of a coefficient grid and an evolution
//! operator are numerically aligned closely enough for a fold to be
//! physically meaningful. Exact floating-point equality is the wrong test for
//! grids produced by independent tools, so membership is decided under a
//! combined relative/absolute tolerance, and any mismatch is a structured,
//! fatal verdict, never a warning.
//!
//! Key behaviors
//! -------------
//! - Approximate set membership between a sorted reference sequence and a
//!   sequence under test ([`membership::tolerant_in1d`]).
//! - The all-or-nothing compatibility verdict over the operator's scale grid
//!   and target momentum-fraction grid against the coefficient grid's
//!   projected kinematics ([`grids::check_kinematic_grids`]).
//! - Channel-content helpers used by drivers to classify deep-inelastic
//!   FONLL-B tables ([`channels`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Reference sequences are sorted ascending and non-empty; the checker
//!   guards degenerate projections with a structured error, while the
//!   membership primitive documents the non-empty precondition.
//! - The subset direction is fixed: the *operator's* grids must be contained
//!   in the grid's required sets, not the reverse, because an operator may
//!   legitimately supply more scales than one order selection needs.
//! - Inputs are read-only snapshots; re-running a check on unmutated inputs
//!   yields the same verdict.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the tolerance rule (including the exact-equality limit
//!   at zero tolerances), the subset direction, and the fixed pass/fail
//!   vectors for the scale-grid check.

pub mod channels;
pub mod errors;
pub mod grids;
pub mod membership;

pub mod prelude {
    pub use super::channels::{is_dis_fonll_b, is_lepton_pid};
    pub use super::errors::{CompatError, CompatResult};
    pub use super::grids::check_kinematic_grids;
    pub use super::membership::{DEFAULT_ATOL, DEFAULT_RTOL, tolerant_in1d};
}
