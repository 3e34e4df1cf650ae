//! Perturbative-order model: the 4-tuple of coupling powers and scale-log
//! markers, plus mask construction and filtering utilities.
//!
//! This module provides:
//! - [`Order`], an immutable `(alphas, alpha, logxir, logxif)` tuple.
//! - [`create_mask`], the positional boolean filter for a `(max_as, max_al)`
//!   request, one entry per order in the grid's native enumeration.
//! - [`filtered_orders`], the surviving orders themselves, in native sequence.
//! - [`pure_qcd_orders`], the projection onto the tower with the lowest
//!   electroweak power present.
//!
//! Conventions:
//! - Powers are 0-indexed internal exponents (`alphas = 0` is a Born-level
//!   QCD contribution), in contrast to the 1-indexed max-order convention of
//!   external drivers; the availability checker does the conversion.
//! - Masks are positional, never reordered: entry `i` refers to the grid's
//!   `i`-th native order and is used to select sub-arrays downstream.

/// A single perturbative order of a coefficient grid.
///
/// Fields:
/// - `alphas`: power of the strong coupling.
/// - `alpha`: power of the electroweak coupling.
/// - `logxir`: renormalization-scale log marker; `0` for the central
///   contribution, non-zero for a scale-variation contribution.
/// - `logxif`: factorization-scale log marker, same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order {
    pub alphas: u32,
    pub alpha: u32,
    pub logxir: u32,
    pub logxif: u32,
}

/// Positional boolean filter over a grid's native order enumeration.
///
/// Invariant: `mask.len()` equals the number of native orders; the mask is
/// only ever used to select sub-arrays, never reordered.
pub type OrderMask = Vec<bool>;

impl Order {
    /// Create an order from its four powers.
    pub fn new(alphas: u32, alpha: u32, logxir: u32, logxif: u32) -> Self {
        Self { alphas, alpha, logxir, logxif }
    }

    /// The order as a plain `(alphas, alpha, logxir, logxif)` tuple.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.alphas, self.alpha, self.logxir, self.logxif)
    }
}

/// Build the positional order mask for a `(max_as, max_al)` request.
///
/// Entry `i` is `true` iff `orders[i].alphas <= max_as` and
/// `orders[i].alpha <= max_al`. The mask preserves native order and length,
/// so it can be handed to external array selection as-is.
pub fn create_mask(orders: &[Order], max_as: u32, max_al: u32) -> OrderMask {
    orders.iter().map(|order| order.alphas <= max_as && order.alpha <= max_al).collect()
}

/// Return the orders surviving the `(max_as, max_al)` filter, in native
/// sequence.
///
/// This is the mask of [`create_mask`] applied to the list itself, for
/// consumers (such as the availability checker) that need the orders rather
/// than the positional filter.
pub fn filtered_orders(orders: &[Order], max_as: u32, max_al: u32) -> Vec<Order> {
    orders
        .iter()
        .zip(create_mask(orders, max_as, max_al))
        .filter_map(|(order, keep)| keep.then_some(*order))
        .collect()
}

/// Return the pure-QCD tower of an order list: the subset whose electroweak
/// power equals the minimum electroweak power present.
///
/// The minimum is typically but not necessarily zero; a grid whose lowest
/// electroweak power is 1 still has a well-defined QCD tower at `alpha == 1`.
/// An empty input yields an empty tower.
pub fn pure_qcd_orders(order_list: &[Order]) -> Vec<Order> {
    let Some(min_al) = order_list.iter().map(|order| order.alpha).min() else {
        return Vec::new();
    };
    order_list.iter().filter(|order| order.alpha == min_al).copied().collect()
}
