//! Scale-variation availability: is the order needed for a requested
//! variation actually present at the top of the grid's QCD tower?
//!
//! Purpose
//! -------
//! Decide, for a filtered order list and a scale kind, whether the central
//! order and the scale-variation order are simultaneously available at the
//! highest strong-coupling power of the pure-QCD tower. Drivers use the
//! answer to refuse a `(xir, xif)` request the grid cannot honor, instead of
//! silently producing a physically wrong table.
//!
//! Key behaviors
//! -------------
//! - Project the filtered list onto its pure-QCD tower and compare the
//!   maximum powers of the central and varied contributions against the
//!   tower's overall maximum.
//! - Apply the two documented special cases: a tower consisting only of its
//!   lowest order carries no variation orders by construction, and for
//!   renormalization variations the next-to-leading variation order is not
//!   expected to exist when the tower starts at zero coupling power.
//! - Report the effective maximum order in the 1-indexed external
//!   convention, relative to the tower's floor.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input order list is the already-filtered selection for the run; an
//!   empty list is a precondition violation reported as
//!   [`OrderError::EmptyOrderList`], never a silent default.
//! - The renormalization special case is a domain rule replicated exactly as
//!   documented; it is intentionally **not** applied to factorization
//!   variations.
//!
//! Testing notes
//! -------------
//! - The unit tests encode the decision tree as fixed truth-table vectors,
//!   one per branch, including both special cases and the empty-list error.
use crate::orders::{
    errors::{OrderError, OrderResult},
    order::{Order, pure_qcd_orders},
    scale::ScaleKind,
};

/// Result of a scale-variation availability check.
///
/// - `Both`: the central order and the scale-variation order are both
///   contained in the grid at the tower's maximum power.
/// - `CentralOnly`: only the central order is present at the maximum.
/// - `ScvarOnly`: only the scale-variation order is present at the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailableAtMax {
    Both,
    CentralOnly,
    ScvarOnly,
}

/// Check which contributions are available at the top of the pure-QCD tower.
///
/// # Behavior
/// - Projects `order_list` onto its pure-QCD tower ([`pure_qcd_orders`]) and
///   computes the tower's maximum and minimum strong-coupling powers, plus
///   the maximum powers of the central (`marker == 0`) and varied
///   (`marker != 0`) contributions selected by `kind`.
/// - Decides availability:
///   - central maximum equals the tower maximum:
///     - varied maximum also equals it → [`AvailableAtMax::Both`];
///     - the tower has only its lowest order (a pure leading-order tower has
///       no variation orders by construction) → `Both`;
///     - renormalization kind with tower maximum 1 and floor 0 (the
///       next-to-leading renormalization-variation order is not expected to
///       exist when the lowest order has zero coupling power) → `Both`;
///     - otherwise → [`AvailableAtMax::CentralOnly`];
///   - otherwise → [`AvailableAtMax::ScvarOnly`].
///
/// # Parameters
/// - `order_list`: filtered, non-empty order selection for the run.
/// - `kind`: which scale's variation markers to inspect.
///
/// # Returns
/// The availability verdict together with the effective maximum order,
/// `max - min + 1`, i.e. a 1-indexed count above the tower's floor matching
/// the external max-order convention.
///
/// # Errors
/// - [`OrderError::EmptyOrderList`] if the pure-QCD tower is empty, which
///   for a well-formed grid only happens when `order_list` itself is empty.
pub fn scale_variation_availability(
    order_list: &[Order], kind: ScaleKind,
) -> OrderResult<(AvailableAtMax, u32)> {
    let as_orders = pure_qcd_orders(order_list);
    if as_orders.is_empty() {
        return Err(OrderError::EmptyOrderList);
    }
    let max_as_all = as_orders.iter().map(|order| order.alphas).max().unwrap_or(0);
    let min_as = as_orders.iter().map(|order| order.alphas).min().unwrap_or(0);
    let max_as_central = as_orders
        .iter()
        .filter(|order| kind.marker(order) == 0)
        .map(|order| order.alphas)
        .max()
        .unwrap_or(0);
    let max_as_varied = as_orders
        .iter()
        .filter(|order| kind.marker(order) != 0)
        .map(|order| order.alphas)
        .max()
        .unwrap_or(0);

    let verdict = if max_as_central == max_as_all {
        if max_as_varied == max_as_all {
            AvailableAtMax::Both
        } else if max_as_all == min_as {
            AvailableAtMax::Both
        } else if kind == ScaleKind::Renormalization && max_as_all == 1 && min_as == 0 {
            AvailableAtMax::Both
        } else {
            AvailableAtMax::CentralOnly
        }
    } else {
        AvailableAtMax::ScvarOnly
    };

    Ok((verdict, max_as_all - min_as + 1))
}
