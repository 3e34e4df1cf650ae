//! Scale kinds and their fixed per-kind metadata.
//!
//! A scale-variation check is parameterized by *which* scale is varied. Each
//! kind carries two fixed pieces of information: a human-readable description
//! (used in driver output and error text) and the position of its variation
//! marker within the order tuple: index 2 for renormalization, index 3 for
//! factorization. This is a fixed mapping from a tagged variant to a small
//! record, not a type hierarchy.
use crate::orders::{
    errors::{OrderError, OrderResult},
    order::Order,
};
use std::str::FromStr;

/// Fixed metadata attached to a scale kind.
///
/// - `description`: human-readable name of the variation family.
/// - `index`: position of the variation marker within the
///   `(alphas, alpha, logxir, logxif)` order tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleInfo {
    pub description: &'static str,
    pub index: usize,
}

/// The two scale-variation families a grid can carry.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive short and
/// long spellings (`"ren"`/`"renormalization"`, `"fact"`/`"factorization"`).
/// Unknown names return [`OrderError::InvalidScaleKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Renormalization,
    Factorization,
}

impl ScaleKind {
    /// The fixed `{description, marker index}` record for this kind.
    pub fn info(&self) -> ScaleInfo {
        match self {
            ScaleKind::Renormalization => {
                ScaleInfo { description: "renormalization scale variations", index: 2 }
            }
            ScaleKind::Factorization => {
                ScaleInfo { description: "factorization scale variations", index: 3 }
            }
        }
    }

    /// Human-readable description of the variation family.
    pub fn description(&self) -> &'static str {
        self.info().description
    }

    /// Select this kind's variation marker from an order.
    ///
    /// Returns `order.logxir` for renormalization and `order.logxif` for
    /// factorization; `0` means the central contribution.
    pub fn marker(&self, order: &Order) -> u32 {
        match self {
            ScaleKind::Renormalization => order.logxir,
            ScaleKind::Factorization => order.logxif,
        }
    }
}

impl FromStr for ScaleKind {
    type Err = OrderError;

    fn from_str(s: &str) -> OrderResult<Self> {
        match s.to_lowercase().as_str() {
            "ren" | "renormalization" => Ok(ScaleKind::Renormalization),
            "fact" | "factorization" => Ok(ScaleKind::Factorization),
            _ => Err(OrderError::InvalidScaleKind {
                name: s.to_string(),
                reason: "Valid kinds are 'ren'/'renormalization' and 'fact'/'factorization'.",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The marker selector must agree with the documented tuple index for
    // both kinds.
    //
    // Given
    // -----
    // - An order with distinct renormalization and factorization markers.
    //
    // Expect
    // ------
    // - `marker` returns `logxir` for REN and `logxif` for FACT, and the
    //   `info` indices point at positions 2 and 3 of the tuple.
    fn marker_selection_matches_tuple_index() {
        // Arrange
        let order = Order::new(2, 0, 1, 2);
        let tuple = [order.alphas, order.alpha, order.logxir, order.logxif];

        // Act + Assert
        assert_eq!(ScaleKind::Renormalization.marker(&order), 1);
        assert_eq!(ScaleKind::Factorization.marker(&order), 2);
        assert_eq!(tuple[ScaleKind::Renormalization.info().index], 1);
        assert_eq!(tuple[ScaleKind::Factorization.info().index], 2);
    }

    #[test]
    fn descriptions_name_the_variation_family() {
        assert!(ScaleKind::Renormalization.description().contains("renormalization"));
        assert!(ScaleKind::Factorization.description().contains("factorization"));
    }

    #[test]
    fn from_str_accepts_short_and_long_spellings() {
        assert_eq!("ren".parse::<ScaleKind>().unwrap(), ScaleKind::Renormalization);
        assert_eq!("Factorization".parse::<ScaleKind>().unwrap(), ScaleKind::Factorization);
        assert!("central".parse::<ScaleKind>().is_err());
    }
}
