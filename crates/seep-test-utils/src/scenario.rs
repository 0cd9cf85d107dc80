//! Seeded random scenarios.
//!
//! Uses a ChaCha8 RNG so the same seed always builds the same lattice,
//! on every platform.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use seep_engine::{Edit, Lattice};

/// A random container plus the edits that fill it.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    /// Obstacle edits first, then liquid injections.
    pub edits: Vec<Edit>,
}

impl Scenario {
    /// Build the lattice and apply every edit.
    pub fn build(&self) -> Lattice {
        let mut lattice =
            Lattice::new(self.width, self.height).expect("scenario dimensions are valid");
        for edit in &self.edits {
            edit.apply(&mut lattice).expect("scenario edits are in bounds");
        }
        lattice
    }

    /// Liquid the scenario injects into cells that are open once all
    /// obstacles are placed.
    pub fn expected_total(&self) -> f64 {
        self.build().total_liquid()
    }
}

/// Generate a random scenario from `seed`.
///
/// Dimensions are in `4..=12`. About a fifth of the interior becomes
/// obstacles; up to eight injections add between 0.05 and 2.0 each.
pub fn random_scenario(seed: u64) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = rng.gen_range(4..=12u32);
    let height = rng.gen_range(4..=12u32);
    let interior = |rng: &mut ChaCha8Rng| {
        (
            rng.gen_range(1..width as i32 - 1),
            rng.gen_range(1..height as i32 - 1),
        )
    };

    let mut edits = Vec::new();
    let walls = ((width - 2) * (height - 2)) as usize / 5;
    for _ in 0..walls {
        let (x, y) = interior(&mut rng);
        edits.push(Edit::SetObstacle { x, y });
    }
    let drops = rng.gen_range(1..=8);
    for _ in 0..drops {
        let (x, y) = interior(&mut rng);
        let amount = rng.gen_range(0.05..2.0);
        edits.push(Edit::AddLiquid { x, y, amount });
    }

    Scenario {
        seed,
        width,
        height,
        edits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_lattice() {
        let a = random_scenario(7).build();
        let b = random_scenario(7).build();
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn dimensions_in_range_and_edits_valid() {
        for seed in 0..50 {
            let s = random_scenario(seed);
            assert!((4..=12).contains(&s.width));
            assert!((4..=12).contains(&s.height));
            let l = Lattice::new(s.width, s.height).unwrap();
            for edit in &s.edits {
                assert!(edit.check(&l).is_ok(), "seed {seed}: {edit:?}");
            }
        }
    }
}
