//! Collaborator seams for the evolution orchestrator.
//!
//! - [`CoefficientGrid`] / [`GridRead`]: the external coefficient-grid
//!   library (order enumeration, kinematic projections, the tensor fold).
//! - [`EvolutionOperator`]: the external evolution library (scale and
//!   momentum-fraction grids, basis rotation, the coupling evaluator).
//! - [`FkTable`]: the folded output artifact (optimization, metadata,
//!   serialization).
//! - [`ReferencePdf`]: the optional before/after comparison provider.
//!
//! Convention: the orchestrator owns the bookkeeping (masks, verdicts,
//! scale arithmetic) and delegates every tensor operation through these
//! traits. Implementations report their own failures as
//! [`EvolveError::External`](crate::evolve::errors::EvolveError::External);
//! the orchestrator never inspects collaborator internals.
use crate::evolve::{
    card::SvScheme,
    errors::EvolveResult,
    types::{KinematicGrid, MetadataMap, Xi},
};
use crate::orders::order::Order;
use std::path::Path;

/// The evolve-relevant kinematic projection of a coefficient grid.
///
/// All three grids are filtered by the positional order mask the projection
/// was computed with, and sorted ascending by the producing library.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolveInfo {
    /// Momentum-fraction values.
    pub x1: KinematicGrid,
    /// Squared factorization-scale values.
    pub fac1: KinematicGrid,
    /// Squared renormalization-scale values.
    pub ren1: KinematicGrid,
}

/// Theory parameters read by this crate.
///
/// Only the fields the bookkeeping layer itself decides on are carried here;
/// couplings, quark masses, and matching ratios stay behind the operator's
/// [`EvolutionOperator::strong_coupling`] evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoryParams {
    /// Factorization scale-variation factor declared by the theory.
    pub xif: f64,
    /// Declared scale-variation method label, if any.
    pub scale_variation_method: Option<String>,
}

/// Flavor-space basis an operator declares for its input rotation.
///
/// The orchestrator accepts the physical flavor basis (and rotates it) or an
/// already-rotated evolution basis; anything else is a fatal
/// incompatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBasis {
    Flavor,
    Evolution,
    Other,
}

/// External coefficient-grid collaborator.
pub trait CoefficientGrid {
    /// Folded output artifact produced by this grid library.
    type Fk: FkTable;
    /// Opaque operator tensor layout handed through to the fold.
    type Layout;

    /// The grid's native order enumeration.
    fn orders(&self) -> Vec<Order>;

    /// The evolve-relevant kinematic projection for a positional order mask.
    fn evolve_info(&self, order_mask: &[bool]) -> EvolveInfo;

    /// Auxiliary key-value metadata attached to the grid.
    fn metadata(&self) -> MetadataMap;

    /// Perform the tensor fold with the evolution operator.
    ///
    /// # Parameters
    /// - `layout`: the operator's tensor layout.
    /// - `mur2_grid`: squared renormalization scales, already shifted by
    ///   `xir²`.
    /// - `alphas`: strong-coupling values per scale point of the operator's
    ///   scale grid.
    /// - `basis`: flavor-space basis label of the operator.
    /// - `order_mask`: positional order selection for the run.
    /// - `xi`: the `(xir, xif)` factor pair.
    fn fold(
        &self, layout: &Self::Layout, mur2_grid: &KinematicGrid, alphas: &[f64], basis: &str,
        order_mask: &[bool], xi: Xi,
    ) -> EvolveResult<Self::Fk>;
}

/// Loading a coefficient grid from a path.
///
/// Kept separate from [`CoefficientGrid`] so orchestration code that already
/// holds a grid does not require a loader.
pub trait GridRead: CoefficientGrid + Sized {
    fn read(path: &Path) -> EvolveResult<Self>;
}

/// External evolution-operator collaborator.
pub trait EvolutionOperator {
    /// Opaque operator tensor layout consumed by the fold.
    type Layout;

    /// Scale-variation scheme the operator was generated with, if any.
    fn scvar_method(&self) -> Option<SvScheme>;

    /// The operator's available squared-scale grid.
    fn mu2_grid(&self) -> KinematicGrid;

    /// The operator's target momentum-fraction grid.
    fn target_xgrid(&self) -> KinematicGrid;

    /// Flavor-space basis of the operator's input rotation.
    fn input_basis(&self) -> InputBasis;

    /// Version of the producing evolution library, for provenance metadata.
    fn version(&self) -> String;

    /// Running-coupling evaluator `a_s(μ²)`.
    fn strong_coupling(&self, mu2: f64) -> f64;

    /// Rotate the operator from the physical flavor basis to the evolution
    /// basis, in place.
    fn rotate_to_evolution_basis(&mut self) -> EvolveResult<()>;

    /// Reshape the operator's target momentum-fraction grid, in place.
    fn reshape_target_xgrid(&mut self, xgrid: &KinematicGrid) -> EvolveResult<()>;

    /// The operator's tensor layout, in the form the grid library consumes.
    fn layout(&self) -> Self::Layout;
}

/// The folded output artifact.
pub trait FkTable {
    /// Apply the post-fold structural optimization for a flavor-assumption
    /// label.
    fn optimize(&mut self, assumptions: &str);

    /// Attach a string metadata key-value pair.
    fn set_key_value(&mut self, key: &str, value: &str);

    /// Serialize the table at the given path.
    fn write(&self, path: &Path) -> EvolveResult<()>;
}

/// Optional reference-PDF comparison provider.
pub trait ReferencePdf<G: CoefficientGrid> {
    /// PDF set name, recorded as provenance metadata.
    fn name(&self) -> &str;

    /// Compare the unfolded grid against the folded table and render the
    /// comparison report.
    fn compare(
        &self, grid: &G, fktable: &G::Fk, max_as: u32, max_al: u32, xir: f64, xif: f64,
    ) -> EvolveResult<String>;
}

/// Placeholder comparison provider for runs without a reference PDF.
///
/// Lets callers spell `None::<&NoReference>` without naming a concrete
/// provider type; its methods are never reached.
#[derive(Debug, Clone, Copy)]
pub struct NoReference;

impl<G: CoefficientGrid> ReferencePdf<G> for NoReference {
    fn name(&self) -> &str {
        "none"
    }

    fn compare(
        &self, _grid: &G, _fktable: &G::Fk, _max_as: u32, _max_al: u32, _xir: f64, _xif: f64,
    ) -> EvolveResult<String> {
        Ok(String::new())
    }
}
