//! Cell classification.

use std::fmt;

/// Whether a cell can hold liquid.
///
/// Obstacle cells never hold liquid; converting a cell to `Obstacle`
/// drops whatever it contained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Free space that liquid can occupy and flow through.
    #[default]
    Open,
    /// A static wall. Always dry.
    Obstacle,
}

impl CellKind {
    /// `true` for [`CellKind::Open`].
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// `true` for [`CellKind::Obstacle`].
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Self::Obstacle)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Obstacle => write!(f, "obstacle"),
        }
    }
}
