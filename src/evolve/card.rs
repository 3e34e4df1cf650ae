//! Scale-variation scheme inference and operator-card generation.
//!
//! Purpose
//! -------
//! Derive the operator specification an evolution run needs (target
//! momentum-fraction grid, shifted scale grid, interpolation settings, and
//! scale-variation method) from the coefficient grid's own evolve-relevant
//! kinematics and the theory parameters, and write it as a YAML card.
//!
//! Key behaviors
//! -------------
//! - Infer the factorization scale-variation scheme from the theory
//!   parameters, rejecting the contradictory "scheme declared but
//!   `xif = 1.0`" configuration ([`sv_scheme`]).
//! - Compute the card's scale grid as the square roots of the
//!   `xif²`-shifted factorization scales, absorbing the factor so operator
//!   generation sees central scales when a scheme is active.
//! - Apply the integrability treatment when the grid carries the marker:
//!   append an `x = 1.0` endpoint and force linear interpolation.
//! - Check path existence explicitly at this boundary before delegating any
//!   read to the external grid library, whose failures are less
//!   diagnosable.
//!
//! Conventions
//! -----------
//! - Recognized scheme labels are `"exponentiated"` and `"expanded"`; any
//!   other declared label means no recognized scheme and is passed over
//!   silently (the unvaried-operator case).
//! - The card is (de)serialized with `serde_yaml`; unknown keys in a
//!   default card are not preserved.
use crate::compat::membership::{DEFAULT_ATOL, DEFAULT_RTOL, is_close};
use crate::evolve::{
    errors::{EvolveError, EvolveResult},
    traits::{CoefficientGrid, GridRead, TheoryParams},
    types::{INTEGRABILITY_KEY, KinematicGrid},
};
use crate::orders::order::create_mask;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Factorization scale-variation scheme of an evolution operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SvScheme {
    #[serde(rename = "exponentiated")]
    Exponentiated,
    #[serde(rename = "expanded")]
    Expanded,
}

impl SvScheme {
    /// The scheme's declared label.
    pub fn label(&self) -> &'static str {
        match self {
            SvScheme::Exponentiated => "exponentiated",
            SvScheme::Expanded => "expanded",
        }
    }

    /// Parse a declared label; `None` for labels this checker does not
    /// recognize.
    pub fn from_label(label: &str) -> Option<SvScheme> {
        match label {
            "exponentiated" => Some(SvScheme::Exponentiated),
            "expanded" => Some(SvScheme::Expanded),
            _ => None,
        }
    }
}

/// Infer the factorization scale-variation scheme from theory parameters.
///
/// # Behavior
/// - `xif ≈ 1.0`: no scheme is active. A declared *recognized* scheme is a
///   contradiction and fails; an unrecognized label is ignored.
/// - `xif != 1.0`: the declared scheme when recognized, `None` otherwise.
///
/// # Errors
/// - [`EvolveError::SchemeConflict`] for the contradictory configuration.
pub fn sv_scheme(theory: &TheoryParams) -> EvolveResult<Option<SvScheme>> {
    let declared = theory.scale_variation_method.as_deref().and_then(SvScheme::from_label);
    if is_close(theory.xif, 1.0, DEFAULT_RTOL, DEFAULT_ATOL) {
        if let Some(scheme) = declared {
            return Err(EvolveError::SchemeConflict { scheme: scheme.label().to_string() });
        }
        return Ok(None);
    }
    Ok(declared)
}

/// Interpolation and scheme settings of an operator card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorConfigs {
    pub scvar_method: Option<SvScheme>,
    pub interpolation_polynomial_degree: u32,
}

impl Default for OperatorConfigs {
    fn default() -> Self {
        Self { scvar_method: None, interpolation_polynomial_degree: 4 }
    }
}

/// Operator specification written for the evolution library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorCard {
    /// Interpolation momentum-fraction grid.
    pub xgrid: Vec<f64>,
    /// Final scales `μ` (not squared) the operator must reach.
    pub mugrid: Vec<f64>,
    pub configs: OperatorConfigs,
}

/// Derive the operator card for a grid from its own evolve-relevant
/// kinematics.
///
/// # Parameters
/// - `grid`: the coefficient grid to evolve.
/// - `default_card`: base card supplying settings this derivation does not
///   own (notably the interpolation grid and degree).
/// - `theory`: theory parameters; decides the scheme and the `xif` shift.
///
/// # Returns
/// The written x-grid, the `xif²`-shifted Q² grid, and the derived card.
///
/// # Errors
/// - Propagates [`sv_scheme`] conflicts.
pub fn derive_operator_card<G: CoefficientGrid>(
    grid: &G, default_card: &OperatorCard, theory: &TheoryParams,
) -> EvolveResult<(KinematicGrid, Vec<f64>, OperatorCard)> {
    // The all-true mask is enough until electroweak maxima enter the card
    // derivation; the fold itself always builds the real mask.
    let orders = grid.orders();
    let mock_mask = create_mask(&orders, u32::MAX, u32::MAX);
    let evolve_info = grid.evolve_info(&mock_mask);

    let scheme = sv_scheme(theory)?;
    let xif = if scheme.is_some() { 1.0 } else { theory.xif };

    let q2_grid: Vec<f64> = evolve_info.fac1.iter().map(|&muf2| xif * xif * muf2).collect();
    let mut card = default_card.clone();
    card.configs.scvar_method = scheme;
    card.mugrid = q2_grid.iter().map(|&q2| q2.sqrt()).collect();

    let mut x_grid = evolve_info.x1;
    if grid.metadata().contains_key(INTEGRABILITY_KEY) {
        let mut extended = x_grid.to_vec();
        extended.push(1.0);
        x_grid = KinematicGrid::from(extended);
        card.configs.interpolation_polynomial_degree = 1;
        card.xgrid = x_grid.to_vec();
    }

    Ok((x_grid, q2_grid, card))
}

/// Derive and write the operator card for a grid stored at a path.
///
/// The existence of `grid_path` is checked here, before any delegated read:
/// failures raised by the external grid library are less diagnosable than a
/// plain missing-path report.
///
/// # Errors
/// - [`EvolveError::InputNotFound`] if `grid_path` does not exist.
/// - [`EvolveError::CardIo`] for unreadable default cards or card-write
///   failures.
/// - Propagates [`sv_scheme`] conflicts and grid-read failures.
pub fn write_operator_card_from_file<G: GridRead>(
    grid_path: &Path, default_card_path: &Path, card_path: &Path, theory: &TheoryParams,
) -> EvolveResult<(KinematicGrid, Vec<f64>)> {
    if !grid_path.exists() {
        return Err(EvolveError::InputNotFound { path: grid_path.display().to_string() });
    }
    let default_text = std::fs::read_to_string(default_card_path).map_err(|err| {
        EvolveError::CardIo {
            path: default_card_path.display().to_string(),
            message: err.to_string(),
        }
    })?;
    let default_card: OperatorCard = serde_yaml::from_str(&default_text).map_err(|err| {
        EvolveError::CardIo {
            path: default_card_path.display().to_string(),
            message: err.to_string(),
        }
    })?;

    let grid = G::read(grid_path)?;
    let (x_grid, q2_grid, card) = derive_operator_card(&grid, &default_card, theory)?;

    let card_text = serde_yaml::to_string(&card).map_err(|err| EvolveError::CardIo {
        path: card_path.display().to_string(),
        message: err.to_string(),
    })?;
    std::fs::write(card_path, card_text).map_err(|err| EvolveError::CardIo {
        path: card_path.display().to_string(),
        message: err.to_string(),
    })?;

    Ok((x_grid, q2_grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolve::traits::{EvolveInfo, FkTable};
    use crate::evolve::types::{MetadataMap, Xi};
    use crate::orders::order::Order;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The sv_scheme truth table, including the scheme-conflict failure.
    // - Card derivation with and without the integrability marker, and the
    //   xif² absorption into the mugrid.
    // - YAML round-tripping of the card, including the scheme labels.
    //
    // They intentionally DO NOT cover:
    // - The from-file path, exercised in the integration tests.
    // -------------------------------------------------------------------------

    struct StubFk;

    impl FkTable for StubFk {
        fn optimize(&mut self, _assumptions: &str) {}
        fn set_key_value(&mut self, _key: &str, _value: &str) {}
        fn write(&self, _path: &Path) -> EvolveResult<()> {
            Ok(())
        }
    }

    struct StubGrid {
        integrability: bool,
    }

    impl CoefficientGrid for StubGrid {
        type Fk = StubFk;
        type Layout = ();

        fn orders(&self) -> Vec<Order> {
            vec![Order::new(0, 0, 0, 0), Order::new(1, 0, 0, 0)]
        }

        fn evolve_info(&self, order_mask: &[bool]) -> EvolveInfo {
            assert_eq!(order_mask.len(), self.orders().len());
            EvolveInfo {
                x1: array![1e-3, 1e-1],
                fac1: array![10.0, 20.0],
                ren1: array![10.0, 20.0],
            }
        }

        fn metadata(&self) -> MetadataMap {
            let mut map = MetadataMap::new();
            if self.integrability {
                map.insert(INTEGRABILITY_KEY.to_string(), "2".to_string());
            }
            map
        }

        fn fold(
            &self, _layout: &(), _mur2_grid: &KinematicGrid, _alphas: &[f64], _basis: &str,
            _order_mask: &[bool], _xi: Xi,
        ) -> EvolveResult<StubFk> {
            Ok(StubFk)
        }
    }

    fn theory(xif: f64, method: Option<&str>) -> TheoryParams {
        TheoryParams { xif, scale_variation_method: method.map(str::to_string) }
    }

    #[test]
    // Purpose
    // -------
    // The scheme inference must reject the contradictory configuration and
    // stay silent on everything else.
    //
    // Given
    // -----
    // - All four combinations of `xif ≈ 1` and declared labels.
    //
    // Expect
    // ------
    // - Conflict only for a recognized label at `xif = 1`; a recognized
    //   label at `xif != 1` maps to its scheme; unrecognized labels map to
    //   `None` either way.
    fn sv_scheme_truth_table() {
        // Arrange + Act + Assert
        assert_eq!(
            sv_scheme(&theory(1.0, Some("exponentiated"))),
            Err(EvolveError::SchemeConflict { scheme: "exponentiated".to_string() })
        );
        assert_eq!(sv_scheme(&theory(1.0, Some("unknown"))), Ok(None));
        assert_eq!(sv_scheme(&theory(1.0, None)), Ok(None));
        assert_eq!(
            sv_scheme(&theory(2.0, Some("expanded"))),
            Ok(Some(SvScheme::Expanded))
        );
        assert_eq!(sv_scheme(&theory(2.0, Some("unknown"))), Ok(None));
        assert_eq!(sv_scheme(&theory(2.0, None)), Ok(None));
    }

    #[test]
    // Purpose
    // -------
    // Without the integrability marker the default card's interpolation
    // settings survive and the mugrid carries the xif-shifted scales.
    //
    // Given
    // -----
    // - A stub grid with scales `{10, 20}` and `xif = 2` with no declared
    //   scheme.
    //
    // Expect
    // ------
    // - `q2_grid = {40, 80}`, `mugrid = {√40, √80}`, degree 4, unchanged
    //   default xgrid, `scvar_method = None`.
    fn derive_card_shifts_scales_by_xif() {
        // Arrange
        let grid = StubGrid { integrability: false };
        let default_card = OperatorCard {
            xgrid: vec![1e-4, 1e-2, 1.0],
            mugrid: Vec::new(),
            configs: OperatorConfigs::default(),
        };

        // Act
        let (x_grid, q2_grid, card) =
            derive_operator_card(&grid, &default_card, &theory(2.0, None)).unwrap();

        // Assert
        assert_eq!(x_grid, array![1e-3, 1e-1]);
        assert_eq!(q2_grid, vec![40.0, 80.0]);
        assert_eq!(card.mugrid, vec![40.0_f64.sqrt(), 80.0_f64.sqrt()]);
        assert_eq!(card.configs.interpolation_polynomial_degree, 4);
        assert_eq!(card.xgrid, vec![1e-4, 1e-2, 1.0]);
        assert_eq!(card.configs.scvar_method, None);
    }

    #[test]
    // Purpose
    // -------
    // An active scheme absorbs the xif shift: the card is generated at
    // central scales with the scheme recorded.
    //
    // Given
    // -----
    // - `xif = 2` with the `exponentiated` label declared.
    //
    // Expect
    // ------
    // - `q2_grid` equals the unshifted scales and the scheme is recorded.
    fn derive_card_absorbs_xif_when_scheme_is_active() {
        // Arrange
        let grid = StubGrid { integrability: false };

        // Act
        let (_, q2_grid, card) = derive_operator_card(
            &grid,
            &OperatorCard::default(),
            &theory(2.0, Some("exponentiated")),
        )
        .unwrap();

        // Assert
        assert_eq!(q2_grid, vec![10.0, 20.0]);
        assert_eq!(card.configs.scvar_method, Some(SvScheme::Exponentiated));
    }

    #[test]
    // Purpose
    // -------
    // The integrability marker appends the `x = 1.0` endpoint and forces
    // linear interpolation, overriding the default card.
    //
    // Given
    // -----
    // - A stub grid carrying the marker.
    //
    // Expect
    // ------
    // - `x_grid` ends at exactly 1.0, the card's xgrid matches it, and the
    //   interpolation degree is 1.
    fn derive_card_applies_integrability_treatment() {
        // Arrange
        let grid = StubGrid { integrability: true };

        // Act
        let (x_grid, _, card) =
            derive_operator_card(&grid, &OperatorCard::default(), &theory(1.0, None)).unwrap();

        // Assert
        assert_eq!(x_grid, array![1e-3, 1e-1, 1.0]);
        assert_eq!(card.xgrid, vec![1e-3, 1e-1, 1.0]);
        assert_eq!(card.configs.interpolation_polynomial_degree, 1);
    }

    #[test]
    fn card_round_trips_through_yaml() {
        let card = OperatorCard {
            xgrid: vec![1e-3, 1.0],
            mugrid: vec![10.0_f64.sqrt()],
            configs: OperatorConfigs {
                scvar_method: Some(SvScheme::Expanded),
                interpolation_polynomial_degree: 1,
            },
        };
        let text = serde_yaml::to_string(&card).unwrap();
        assert!(text.contains("expanded"));
        let back: OperatorCard = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, card);
    }
}
