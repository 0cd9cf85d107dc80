//! Host edits as data.
//!
//! An [`Edit`] is one host mutation of a [`Lattice`]. Batching them lets
//! [`Simulation::step`](crate::Simulation::step) validate a whole frame's
//! input before applying any of it.

use seep_core::{CellKind, LatticeError};

use crate::lattice::Lattice;

/// One host mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edit {
    /// Make a cell open.
    SetOpen {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Make a cell an obstacle, dropping its liquid.
    SetObstacle {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
    /// Inject liquid into a cell.
    AddLiquid {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// Quantity to add. Must be finite and non-negative.
        amount: f64,
    },
}

impl Edit {
    /// Coordinates this edit targets.
    pub fn position(&self) -> (i32, i32) {
        match *self {
            Self::SetOpen { x, y } | Self::SetObstacle { x, y } | Self::AddLiquid { x, y, .. } => {
                (x, y)
            }
        }
    }

    /// Check that this edit would succeed against `lattice`, without
    /// applying it.
    pub fn check(&self, lattice: &Lattice) -> Result<(), LatticeError> {
        let (x, y) = self.position();
        lattice.index_of(x, y)?;
        if let Self::AddLiquid { amount, .. } = *self {
            if !amount.is_finite() || amount < 0.0 {
                return Err(LatticeError::InvalidAmount { amount });
            }
        }
        Ok(())
    }

    /// Apply this edit to `lattice`.
    pub fn apply(&self, lattice: &mut Lattice) -> Result<(), LatticeError> {
        match *self {
            Self::SetOpen { x, y } => lattice.set_kind(x, y, CellKind::Open),
            Self::SetObstacle { x, y } => lattice.set_kind(x, y, CellKind::Obstacle),
            Self::AddLiquid { x, y, amount } => lattice.add_liquid_at(x, y, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_matches_apply() {
        let l = Lattice::new(5, 5).unwrap();
        let cases = [
            Edit::SetOpen { x: 2, y: 2 },
            Edit::SetObstacle { x: 0, y: 0 },
            Edit::AddLiquid {
                x: 1,
                y: 3,
                amount: 0.5,
            },
            Edit::SetOpen { x: 5, y: 2 },
            Edit::AddLiquid {
                x: 1,
                y: 1,
                amount: -2.0,
            },
            Edit::AddLiquid {
                x: -1,
                y: 1,
                amount: f64::NAN,
            },
        ];
        for edit in cases {
            let mut scratch = l.clone();
            assert_eq!(
                edit.check(&l).is_ok(),
                edit.apply(&mut scratch).is_ok(),
                "{edit:?}"
            );
        }
    }

    #[test]
    fn out_of_bounds_wins_over_bad_amount() {
        let l = Lattice::new(4, 4).unwrap();
        let edit = Edit::AddLiquid {
            x: 9,
            y: 9,
            amount: -1.0,
        };
        match edit.check(&l) {
            Err(LatticeError::OutOfBounds { x: 9, y: 9, .. }) => {}
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn apply_forwards_to_lattice() {
        let mut l = Lattice::new(5, 5).unwrap();
        Edit::SetObstacle { x: 2, y: 2 }.apply(&mut l).unwrap();
        Edit::AddLiquid {
            x: 1,
            y: 1,
            amount: 0.25,
        }
        .apply(&mut l)
        .unwrap();
        assert_eq!(l.kind_at(2, 2), Some(CellKind::Obstacle));
        assert_eq!(l.total_liquid(), 0.25);
        Edit::SetOpen { x: 2, y: 2 }.apply(&mut l).unwrap();
        assert_eq!(l.kind_at(2, 2), Some(CellKind::Open));
    }
}
