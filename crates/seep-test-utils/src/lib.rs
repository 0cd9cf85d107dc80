//! Test utilities for Seep development.
//!
//! Provides fixture lattices ([`fixtures`]), seeded random scenarios
//! ([`scenario`]), and the invariant checks every solver test leans on.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod scenario;

pub use fixtures::{narrow_shaft, open_box, pillar_basin, pillar_basin_with};
pub use scenario::{random_scenario, Scenario};

use seep_engine::{Lattice, Solver};

/// Default tolerance for liquid conservation checks.
pub const CONSERVATION_TOL: f64 = 1e-9;

/// Check the lattice-wide invariants.
///
/// - every cell holds a finite, non-negative amount
/// - every obstacle is dry
/// - total liquid is within `tol` of `expected_total`
///
/// Returns a description of the first violation.
pub fn check_invariants(lattice: &Lattice, expected_total: f64, tol: f64) -> Result<(), String> {
    for cell in lattice.iter() {
        let (x, y) = (cell.x(), cell.y());
        if !cell.liquid().is_finite() || cell.liquid() < 0.0 {
            return Err(format!("cell ({x}, {y}) holds {}", cell.liquid()));
        }
        if cell.kind().is_obstacle() && cell.liquid() != 0.0 {
            return Err(format!("obstacle ({x}, {y}) holds {}", cell.liquid()));
        }
    }
    let total = lattice.total_liquid();
    if (total - expected_total).abs() > tol {
        return Err(format!(
            "total liquid {total} drifted from {expected_total} by more than {tol}"
        ));
    }
    Ok(())
}

/// Panicking wrapper around [`check_invariants`].
pub fn assert_invariants(lattice: &Lattice, expected_total: f64) {
    if let Err(msg) = check_invariants(lattice, expected_total, CONSERVATION_TOL) {
        panic!("invariant violated: {msg}");
    }
}

/// Tick until fully settled, checking invariants after every tick.
///
/// Returns the number of ticks run, or `None` if the lattice was still
/// active after `max_ticks`.
pub fn run_until_settled(
    solver: &mut Solver,
    lattice: &mut Lattice,
    max_ticks: usize,
) -> Option<usize> {
    let total = lattice.total_liquid();
    for n in 1..=max_ticks {
        solver.simulate(lattice);
        assert_invariants(lattice, total);
        if lattice.is_fully_settled() {
            return Some(n);
        }
    }
    None
}

/// Sum of liquid over the cells in `xs × ys`.
pub fn region_liquid(
    lattice: &Lattice,
    xs: std::ops::RangeInclusive<i32>,
    ys: std::ops::RangeInclusive<i32>,
) -> f64 {
    let mut total = 0.0;
    for y in ys {
        for x in xs.clone() {
            if let Ok(cell) = lattice.cell_at(x, y) {
                total += cell.liquid();
            }
        }
    }
    total
}
