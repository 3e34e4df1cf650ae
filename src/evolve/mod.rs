//! evolve — orchestration of the fold between a coefficient grid and an
//! evolution operator.
//!
//! Purpose
//! -------
//! Provide the glue that turns a validated (coefficient grid, evolution
//! operator) pair into a written FK table: scheme inference and operator
//! cards, the collaborator seams, and the step sequence of one fold. The
//! tensor arithmetic itself belongs to the external libraries behind the
//! [`traits`] seams; this layer owns the bookkeeping that must be correct
//! for any physics built on top of it to be trustworthy.
//!
//! Key behaviors
//! -------------
//! - Infer the scale-variation scheme from theory parameters and derive the
//!   operator card a grid needs ([`card`]).
//! - Define the seams to the grid, operator, output-table, and comparison
//!   collaborators ([`traits`]).
//! - Sequence one fold end-to-end with all-or-nothing validation
//!   ([`orchestrator::evolve_grid`]).
//! - Normalize every failure into [`errors::EvolveError`], including the
//!   wrapped order and compatibility verdicts.
//!
//! Invariants & assumptions
//! ------------------------
//! - No ambient state: tolerances, max orders, and scale factors arrive as
//!   explicit per-call parameters or in validated options.
//! - Path existence is checked at this boundary before delegating reads to
//!   the external libraries.
//! - A failed check aborts the run immediately; resources scoped to the run
//!   are released on all exit paths by construction (RAII, no manual
//!   cleanup).
//!
//! Downstream usage
//! ----------------
//! - Drivers implement the [`traits`] seams for the concrete grid and
//!   operator libraries, then call [`orchestrator::evolve_grid`] per run;
//!   batch processing parallelizes across runs at the process level.
//!
//! Testing notes
//! -------------
//! - Unit tests cover scheme inference, card derivation, and options
//!   validation; the integration tests drive the full sequence through fake
//!   collaborators.

pub mod card;
pub mod errors;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub mod prelude {
    pub use super::card::{
        OperatorCard, OperatorConfigs, SvScheme, derive_operator_card, sv_scheme,
        write_operator_card_from_file,
    };
    pub use super::errors::{EvolveError, EvolveResult};
    pub use super::orchestrator::{EvolveOptions, check_grid_operator_compatible, evolve_grid};
    pub use super::traits::{
        CoefficientGrid, EvolutionOperator, EvolveInfo, FkTable, GridRead, InputBasis,
        NoReference, ReferencePdf, TheoryParams,
    };
    pub use super::types::{INTEGRABILITY_KEY, KinematicGrid, MetadataMap, Xi};
}
