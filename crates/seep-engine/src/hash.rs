//! Hashing of lattice state for determinism checks.
//!
//! Uses FNV-1a over the dimensions, each cell's kind, and the exact bit
//! pattern of each cell's liquid. Not cryptographically secure; it is
//! meant for fast "did these two runs diverge" comparisons.

use seep_core::CellKind;

use crate::lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the observable state of `lattice`.
///
/// Two lattices hash equal when they have the same dimensions and every
/// cell has the same kind and bit-identical liquid. Settle bookkeeping
/// and flow bits are not included.
pub fn state_hash(lattice: &Lattice) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &lattice.width().to_le_bytes());
    hash = fnv1a_bytes(hash, &lattice.height().to_le_bytes());
    for cell in lattice.iter() {
        let tag = match cell.kind() {
            CellKind::Open => 0,
            CellKind::Obstacle => 1,
        };
        hash = fnv1a_byte(hash, tag);
        hash = fnv1a_bytes(hash, &cell.liquid().to_bits().to_le_bytes());
    }
    hash
}
