//! Flow directions and the per-cell flow bitmask.
//!
//! Renderers select a flow sprite from the packed mask, so the bit
//! layout is part of the public contract: Top=1, Right=2, Bottom=4,
//! Left=8.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// One of the four lattice directions.
///
/// `y` grows downwards, so [`Direction::Bottom`] is `y + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `y - 1`.
    Top,
    /// `x + 1`.
    Right,
    /// `y + 1`.
    Bottom,
    /// `x - 1`.
    Left,
}

impl Direction {
    /// All directions in bit order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Position of this direction in per-cell neighbour tables.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// The bit this direction occupies in a [`FlowBits`] mask.
    #[inline]
    pub fn bit(self) -> u8 {
        1 << self.slot()
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// `(dx, dy)` step for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// Set of directions liquid left a cell towards during the last tick.
///
/// Purely observational. The solver rewrites it every time it processes
/// the cell; nothing in the simulation reads it back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlowBits(u8);

impl FlowBits {
    /// Mask covering all four direction bits.
    pub const MASK: u8 = 0b1111;

    /// No flow.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from a packed mask. Bits above the four direction bits are dropped.
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & Self::MASK)
    }

    /// Packed mask in `0..=15`, suitable for indexing a sprite table.
    #[inline]
    pub fn mask(self) -> u8 {
        self.0
    }

    /// `true` when no direction is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `dir` is set.
    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Set `dir`.
    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// Clear `dir`.
    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    /// Clear every direction.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate the set directions in bit order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for FlowBits {
    fn from(dir: Direction) -> Self {
        Self(dir.bit())
    }
}

impl BitOr for FlowBits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Direction> for FlowBits {
    type Output = Self;

    fn bitor(self, rhs: Direction) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign<Direction> for FlowBits {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.insert(rhs);
    }
}

impl FromIterator<Direction> for FlowBits {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut bits = Self::empty();
        for dir in iter {
            bits.insert(dir);
        }
        bits
    }
}
