//! Strongly-typed identifiers.

use std::fmt;

/// Position of a cell in a lattice's dense row-major storage.
///
/// `CellIndex(y * width + x)`. Indices are only meaningful for the
/// lattice that produced them and are invalidated by a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// The index as a `usize`, for slice access.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time a solver advances a lattice by one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_get_widens() {
        assert_eq!(CellIndex(17).get(), 17usize);
        assert_eq!(CellIndex::from(3), CellIndex(3));
    }

    #[test]
    fn tick_id_next_increments() {
        assert_eq!(TickId::default(), TickId(0));
        assert_eq!(TickId(41).next(), TickId(42));
        assert_eq!(TickId(7).to_string(), "7");
    }
}
