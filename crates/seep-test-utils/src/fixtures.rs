//! Reusable lattice fixtures.
//!
//! - [`open_box`]: an empty container of any size.
//! - [`narrow_shaft`]: a one-cell-wide, two-cell-deep shaft holding 2.0.
//! - [`pillar_basin`]: two basins split by a pillar, with liquid poured
//!   on top of the pillar; [`pillar_basin_with`] picks the amount.

use seep_engine::Lattice;

/// Empty `width × height` container: obstacle border, open interior.
pub fn open_box(width: u32, height: u32) -> Lattice {
    Lattice::new(width, height).expect("fixture dimensions are valid")
}

/// Liquid injected by [`narrow_shaft`].
pub const SHAFT_LIQUID: f64 = 2.0;

/// 5×5 lattice whose only open cells are `(2, 1)` and `(2, 2)`, with
/// [`SHAFT_LIQUID`] injected at `(2, 1)`.
///
/// Settles with both shaft cells holding exactly one unit.
pub fn narrow_shaft() -> Lattice {
    let mut lattice = open_box(5, 5);
    for (x, y) in [(1, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
        lattice.set_obstacle(x, y).expect("interior coordinate");
    }
    lattice
        .add_liquid_at(2, 1, SHAFT_LIQUID)
        .expect("interior coordinate");
    lattice
}

/// Liquid injected by [`pillar_basin`].
pub const BASIN_LIQUID: f64 = 10.5;

/// 7×6 lattice with a two-cell pillar at `x = 3` on the floor and
/// [`BASIN_LIQUID`] poured on top of it at `(3, 2)`.
///
/// Interior columns 1..=5, rows 1..=4. The pillar occupies `(3, 3)` and
/// `(3, 4)`, leaving a 2×2 basin on each side (4 units of capacity
/// each). What does not fit in the basins spreads over row 2.
pub fn pillar_basin() -> Lattice {
    pillar_basin_with(BASIN_LIQUID)
}

/// [`pillar_basin`] with `amount` poured on the pillar instead.
pub fn pillar_basin_with(amount: f64) -> Lattice {
    let mut lattice = open_box(7, 6);
    lattice.set_obstacle(3, 3).expect("interior coordinate");
    lattice.set_obstacle(3, 4).expect("interior coordinate");
    lattice
        .add_liquid_at(3, 2, amount)
        .expect("interior coordinate");
    lattice
}
