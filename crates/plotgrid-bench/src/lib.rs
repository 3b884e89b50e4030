//! Benchmark profiles and utilities for the PlotGrid tile engine.
//!
//! - [`reference_profile`]: 64x64 grid (4K spots) with default tuning
//! - [`stress_profile`]: 256x256 grid (~65K spots) for stress testing
//! - [`random_script`]: deterministic place/remove script via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plotgrid_core::{AreaTag, Pos};
use plotgrid_engine::{GridConfig, GridRegistry};
use plotgrid_space::SpotSpec;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a benchmark script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptOp {
    /// Place a tile with the given tag.
    Place(Pos, AreaTag),
    /// Remove whatever sits at the position.
    Remove(Pos),
}

/// Reference profile: 64x64 grid.
pub fn reference_profile() -> GridConfig {
    GridConfig::new(SpotSpec::grid(64, 64))
}

/// Stress profile: 256x256 grid with a larger area-list reservation.
pub fn stress_profile() -> GridConfig {
    GridConfig::new(SpotSpec::grid(256, 256)).area_capacity(1024)
}

/// Generate a deterministic script of `len` operations on a `side` x `side`
/// grid.
///
/// Roughly one in four operations is a removal. Tags are drawn uniformly,
/// so merges and splits both occur regularly.
pub fn random_script(side: u32, len: usize, seed: u64) -> Vec<ScriptOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = u64::from(side.max(1));
    (0..len)
        .map(|_| {
            let roll = rng.next_u64();
            let x = (rng.next_u64() % side) as i32;
            let y = (rng.next_u64() % side) as i32;
            let pos = Pos::new(x, y);
            if roll % 4 == 0 {
                ScriptOp::Remove(pos)
            } else {
                ScriptOp::Place(pos, AreaTag::ALL[(roll % 3) as usize])
            }
        })
        .collect()
}

/// Apply `script` to `registry`, ignoring rejected calls.
///
/// Returns the number of calls that succeeded.
pub fn run_script(registry: &mut GridRegistry<u32>, script: &[ScriptOp]) -> usize {
    let mut ok = 0;
    for (i, op) in script.iter().enumerate() {
        let done = match *op {
            ScriptOp::Place(pos, tag) => registry.place(pos, i as u32, tag).is_ok(),
            ScriptOp::Remove(pos) => registry.remove(pos).is_ok(),
        };
        ok += usize::from(done);
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_profile().validate().unwrap();
        stress_profile().validate().unwrap();
    }

    #[test]
    fn random_script_is_deterministic() {
        assert_eq!(random_script(16, 200, 42), random_script(16, 200, 42));
        assert_ne!(random_script(16, 200, 42), random_script(16, 200, 43));
    }

    #[test]
    fn random_script_stays_in_bounds() {
        for op in random_script(8, 500, 7) {
            let pos = match op {
                ScriptOp::Place(pos, _) | ScriptOp::Remove(pos) => pos,
            };
            assert!((0..8).contains(&pos.x) && (0..8).contains(&pos.y));
        }
    }

    #[test]
    fn run_script_places_tiles() {
        let mut g = GridRegistry::new(reference_profile()).unwrap();
        let script = random_script(64, 1000, 1);
        let ok = run_script(&mut g, &script);
        assert!(ok > 0);
        assert_eq!(
            g.metrics().placements + g.metrics().removals,
            ok as u64
        );
    }
}
