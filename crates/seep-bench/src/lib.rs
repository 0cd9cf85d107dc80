//! Benchmark profiles for the Seep liquid simulation.
//!
//! Provides pre-built lattices for benchmarking and examples:
//!
//! - [`reference_profile`]: 100x100 lattice (10K cells), obstacles and liquid scattered
//! - [`stress_profile`]: 316x316 lattice (~100K cells) for stress testing
//! - [`scatter_positions`]: deterministic interior placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seep_core::LatticeError;
use seep_engine::Lattice;

/// Share of interior cells turned into obstacles, in percent.
const OBSTACLE_PERCENT: usize = 15;
/// Share of interior cells receiving an injection, in percent.
const WET_PERCENT: usize = 10;
/// Liquid added per wet cell.
const DROP: f64 = 1.5;

/// Build a reference benchmark lattice: 100x100 (10K cells).
///
/// 15% of the interior is obstacle, 10% receives 1.5 units of liquid,
/// so the first few hundred ticks keep most cells active.
pub fn reference_profile(seed: u64) -> Result<Lattice, LatticeError> {
    build_profile(100, 100, seed)
}

/// Build a stress benchmark lattice: 316x316 (~100K cells).
///
/// Same mix as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Result<Lattice, LatticeError> {
    build_profile(316, 316, seed)
}

fn build_profile(width: u32, height: u32, seed: u64) -> Result<Lattice, LatticeError> {
    let mut lattice = Lattice::new(width, height)?;
    let iw = width as usize - 2;
    let interior = iw * (height as usize - 2);
    let walls = interior * OBSTACLE_PERCENT / 100;
    let drops = interior * WET_PERCENT / 100;

    let positions = scatter_positions(interior, walls + drops, seed);
    let (wall_pos, drop_pos) = positions.split_at(walls);
    for &p in wall_pos {
        let (x, y) = interior_coord(p, iw);
        lattice.set_obstacle(x, y)?;
    }
    for &p in drop_pos {
        let (x, y) = interior_coord(p, iw);
        lattice.add_liquid_at(x, y, DROP)?;
    }
    Ok(lattice)
}

fn interior_coord(p: usize, interior_width: usize) -> (i32, i32) {
    ((p % interior_width) as i32 + 1, (p / interior_width) as i32 + 1)
}

/// Generate `n` distinct deterministic positions in `0..cell_count`.
///
/// Uses a simple hash of the seed with linear probing on collision.
/// `n` is clamped to `cell_count`.
pub fn scatter_positions(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    let n = n.min(cell_count);
    let mut positions = Vec::with_capacity(n);
    let mut occupied = vec![false; cell_count];

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;

        // Linear probe to avoid collisions
        while occupied[pos] {
            pos = (pos + 1) % cell_count;
        }
        occupied[pos] = true;
        positions.push(pos);
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_builds() {
        let l = reference_profile(42).unwrap();
        assert_eq!(l.len(), 10_000);
        let drops = 98 * 98 * WET_PERCENT / 100;
        assert!((l.total_liquid() - drops as f64 * DROP).abs() < 1e-9);
    }

    #[test]
    fn stress_profile_builds() {
        let l = stress_profile(42).unwrap();
        assert_eq!(l.len(), 316 * 316);
    }

    #[test]
    fn scatter_positions_no_collisions() {
        let positions = scatter_positions(100, 10, 42);
        assert_eq!(positions.len(), 10);

        let unique: std::collections::HashSet<usize> = positions.iter().copied().collect();
        assert_eq!(unique.len(), 10, "all positions should be unique");

        for &idx in &positions {
            assert!(idx < 100, "position {idx} out of bounds");
        }
    }

    #[test]
    fn scatter_positions_clamps_and_is_deterministic() {
        assert_eq!(scatter_positions(5, 9, 1).len(), 5);
        assert_eq!(scatter_positions(1000, 5, 42), scatter_positions(1000, 5, 42));
    }
}
