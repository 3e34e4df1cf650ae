//! The operator/grid compatibility verdict over projected kinematics.
//!
//! Purpose
//! -------
//! Decide whether an evolution operator can be folded with a coefficient
//! grid: every distinct scale the operator supplies must be tolerantly
//! contained in the grid's required Q² set (`xif² ×` its factorization
//! scales), and every distinct target momentum fraction must be tolerantly
//! contained in the grid's x-values. Compatibility is all-or-nothing per
//! run; the first mismatch is reported and the run aborts.
//!
//! Conventions
//! -----------
//! - The subset direction is operator-contained-in-required, never the
//!   reverse: an operator may legitimately carry more scales than one order
//!   selection needs.
//! - Operator grids are compared as *distinct* value sets (sorted, exact
//!   duplicates removed) so repeated scale points cannot mask or duplicate a
//!   mismatch report.
//! - The caller passes the grid projections already filtered by the order
//!   mask of the run; this module takes no tunables from ambient state.
use crate::compat::{
    errors::{CompatError, CompatResult},
    membership::{DEFAULT_ATOL, DEFAULT_RTOL, tolerant_in1d},
};

/// Sorted distinct values of a sequence (exact-equality deduplication).
fn unique_sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted
}

/// Check that the operator's kinematic grids are compatible with the
/// coefficient grid's projected kinematics.
///
/// # Parameters
/// - `x_grid`: the grid's momentum-fraction values for the run's order
///   selection, sorted ascending.
/// - `muf2_grid`: the grid's squared factorization-scale values for the
///   selection, sorted ascending.
/// - `op_mu2_grid`: the evolution operator's available scale grid.
/// - `op_target_xgrid`: the operator's target momentum-fraction grid.
/// - `xif`: factorization scale-variation factor; the required Q² set is
///   `xif² × muf2_grid`.
///
/// # Errors
/// - [`CompatError::ScaleGridMismatch`] if some distinct operator scale has
///   no tolerant match in the required Q² set.
/// - [`CompatError::XGridMismatch`] if some distinct operator momentum
///   fraction has no tolerant match in the grid's x-values.
/// - [`CompatError::EmptyReferenceGrid`] if either grid projection is
///   empty; a degenerate selection cannot be validated.
pub fn check_kinematic_grids(
    x_grid: &[f64], muf2_grid: &[f64], op_mu2_grid: &[f64], op_target_xgrid: &[f64], xif: f64,
) -> CompatResult<()> {
    if muf2_grid.is_empty() {
        return Err(CompatError::EmptyReferenceGrid { which: "factorization-scale" });
    }
    if x_grid.is_empty() {
        return Err(CompatError::EmptyReferenceGrid { which: "x-grid" });
    }

    let required_q2: Vec<f64> = muf2_grid.iter().map(|&muf2| xif * xif * muf2).collect();
    let distinct_mu2 = unique_sorted(op_mu2_grid);
    let found = tolerant_in1d(&required_q2, &distinct_mu2, DEFAULT_RTOL, DEFAULT_ATOL);
    if let Some(index) = found.iter().position(|&ok| !ok) {
        return Err(CompatError::ScaleGridMismatch { value: distinct_mu2[index], index });
    }

    let distinct_x = unique_sorted(op_target_xgrid);
    let found = tolerant_in1d(x_grid, &distinct_x, DEFAULT_RTOL, DEFAULT_ATOL);
    if let Some(index) = found.iter().position(|&ok| !ok) {
        return Err(CompatError::XGridMismatch { value: distinct_x[index], index });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The fixed pass/fail scale-grid vectors, including the xif² shift.
    // - The x-grid subset check and its mismatch report.
    // - Duplicate operator values, the subset direction, idempotence, and
    //   the degenerate empty-projection guards.
    // -------------------------------------------------------------------------

    const X: [f64; 3] = [1e-3, 1e-1, 1.0];

    #[test]
    // Purpose
    // -------
    // An operator scale grid tolerantly contained in the required Q² set
    // passes even when the grid supplies more scales than the operator.
    //
    // Given
    // -----
    // - Operator scales `{10.0, 20.0}` at `xif = 1` against grid scales
    //   `{10.00000001, 20.0, 30.0}`.
    //
    // Expect
    // ------
    // - Success.
    fn scale_grid_within_tolerance_passes() {
        // Arrange
        let muf2 = [10.000_000_01, 20.0, 30.0];
        let op_mu2 = [10.0, 20.0];

        // Act
        let verdict = check_kinematic_grids(&X, &muf2, &op_mu2, &X, 1.0);

        // Assert
        assert_eq!(verdict, Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // Scales with no tolerant counterpart must fail with the Q² verdict
    // and the first offending distinct value.
    //
    // Given
    // -----
    // - Operator scales `{15.0, 25.0}` against grid scales
    //   `{10.00000001, 20.0, 30.0}`.
    //
    // Expect
    // ------
    // - `ScaleGridMismatch` reporting `15.0` at distinct index 0.
    fn scale_grid_outside_tolerance_fails() {
        // Arrange
        let muf2 = [10.000_000_01, 20.0, 30.0];
        let op_mu2 = [15.0, 25.0];

        // Act
        let verdict = check_kinematic_grids(&X, &muf2, &op_mu2, &X, 1.0);

        // Assert
        assert_eq!(verdict, Err(CompatError::ScaleGridMismatch { value: 15.0, index: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // The required Q² set is the xif²-shifted factorization-scale set: an
    // operator matching the shifted scales passes, and the same operator
    // fails at the central factor.
    //
    // Given
    // -----
    // - Grid scales `{10.0, 20.0}`, operator scales `{40.0, 80.0}`,
    //   `xif = 2`.
    //
    // Expect
    // ------
    // - Success at `xif = 2`, `ScaleGridMismatch` at `xif = 1`.
    fn required_scales_are_shifted_by_xif_squared() {
        // Arrange
        let muf2 = [10.0, 20.0];
        let op_mu2 = [40.0, 80.0];

        // Act + Assert
        assert_eq!(check_kinematic_grids(&X, &muf2, &op_mu2, &X, 2.0), Ok(()));
        assert!(matches!(
            check_kinematic_grids(&X, &muf2, &op_mu2, &X, 1.0),
            Err(CompatError::ScaleGridMismatch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Target momentum fractions outside the grid's x-values must fail with
    // the x-grid verdict.
    //
    // Given
    // -----
    // - Operator target `{1e-3, 0.5}` against grid x-values
    //   `{1e-3, 1e-1, 1.0}`.
    //
    // Expect
    // ------
    // - `XGridMismatch` reporting `0.5`.
    fn target_x_outside_grid_fails() {
        // Arrange
        let muf2 = [10.0];
        let op_x = [1e-3, 0.5];

        // Act
        let verdict = check_kinematic_grids(&X, &muf2, &[10.0], &op_x, 1.0);

        // Assert
        assert_eq!(verdict, Err(CompatError::XGridMismatch { value: 0.5, index: 1 }));
    }

    #[test]
    // Purpose
    // -------
    // Operator grids are compared as distinct value sets: exact duplicates
    // neither hide a mismatch nor produce duplicate reports.
    //
    // Given
    // -----
    // - Operator scales `{20.0, 20.0, 10.0}` against grid scales
    //   `{10.0, 20.0}`.
    //
    // Expect
    // ------
    // - Success; duplicates collapse onto their distinct value.
    fn duplicate_operator_values_are_collapsed() {
        // Arrange
        let muf2 = [10.0, 20.0];
        let op_mu2 = [20.0, 20.0, 10.0];

        // Act
        let verdict = check_kinematic_grids(&X, &muf2, &op_mu2, &X, 1.0);

        // Assert
        assert_eq!(verdict, Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // The verdict is a pure function of its inputs: checking twice on the
    // same unmutated grids yields the same result.
    //
    // Given
    // -----
    // - A passing and a failing configuration, each checked twice.
    //
    // Expect
    // ------
    // - Identical verdicts across repetitions.
    fn verdict_is_idempotent() {
        // Arrange
        let muf2 = [10.0, 20.0, 30.0];
        let passing = [10.0, 20.0];
        let failing = [15.0, 25.0];

        // Act + Assert
        assert_eq!(
            check_kinematic_grids(&X, &muf2, &passing, &X, 1.0),
            check_kinematic_grids(&X, &muf2, &passing, &X, 1.0)
        );
        assert_eq!(
            check_kinematic_grids(&X, &muf2, &failing, &X, 1.0),
            check_kinematic_grids(&X, &muf2, &failing, &X, 1.0)
        );
    }

    #[test]
    fn empty_projections_are_rejected() {
        assert_eq!(
            check_kinematic_grids(&X, &[], &[10.0], &X, 1.0),
            Err(CompatError::EmptyReferenceGrid { which: "factorization-scale" })
        );
        assert_eq!(
            check_kinematic_grids(&[], &[10.0], &[10.0], &X, 1.0),
            Err(CompatError::EmptyReferenceGrid { which: "x-grid" })
        );
    }
}
