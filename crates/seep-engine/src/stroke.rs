//! Drag-painting of obstacles.
//!
//! A stroke decides once, at the cell where it starts, whether it paints
//! or erases: starting on an open cell paints obstacles, starting on an
//! obstacle erases them. Every later cell the pointer crosses gets that
//! same treatment, so one drag never toggles back and forth.

use seep_core::CellKind;

use crate::lattice::Lattice;

/// What a [`WallStroke`] does to the cells it crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeMode {
    /// Turn cells into obstacles.
    Paint,
    /// Turn cells back into open cells.
    Erase,
}

impl StrokeMode {
    /// Kind written by this mode.
    pub fn target(self) -> CellKind {
        match self {
            Self::Paint => CellKind::Obstacle,
            Self::Erase => CellKind::Open,
        }
    }
}

/// An in-progress drag over the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallStroke {
    mode: StrokeMode,
}

impl WallStroke {
    /// Start a stroke at `(x, y)`.
    ///
    /// Returns `None` when the start lies outside the lattice. The
    /// border counts as an obstacle, so a stroke starting there erases
    /// (and leaves the border itself untouched).
    pub fn begin(lattice: &Lattice, x: i32, y: i32) -> Option<Self> {
        let mode = match lattice.kind_at(x, y)? {
            CellKind::Open => StrokeMode::Paint,
            CellKind::Obstacle => StrokeMode::Erase,
        };
        Some(Self { mode })
    }

    /// The mode chosen when the stroke began.
    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    /// Apply the stroke to `(x, y)`.
    ///
    /// Out-of-range coordinates and border cells are ignored. Returns
    /// whether the cell's kind actually changed.
    pub fn apply(&self, lattice: &mut Lattice, x: i32, y: i32) -> bool {
        if !lattice.is_interior(x, y) {
            return false;
        }
        let target = self.mode.target();
        if lattice.kind_at(x, y) == Some(target) {
            return false;
        }
        lattice.set_kind(x, y, target).is_ok()
    }
}
