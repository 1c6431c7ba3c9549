use largrect::grid::Mask;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random `w × h` mask where each cell is set with probability `density`.
pub fn random_mask(rng: &mut StdRng, w: usize, h: usize, density: f64) -> Mask {
    Mask::from_fn(w, h, |_, _| rng.random_bool(density))
}

/// Deterministic stream of small random masks (up to 8×8, including empty
/// shapes) with varying densities.
pub fn small_masks(seed: u64, count: usize) -> Vec<Mask> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let w = rng.random_range(0..=8);
            let h = rng.random_range(0..=8);
            let density = rng.random_range(0.2..=0.95);
            random_mask(&mut rng, w, h, density)
        })
        .collect()
}

/// Checkerboard of `cell × cell` blocks, top-left block set.
pub fn checkerboard_mask(w: usize, h: usize, cell: usize) -> Mask {
    assert!(cell > 0, "cell size must be positive");
    Mask::from_fn(w, h, |x, y| ((x / cell) + (y / cell)) % 2 == 0)
}
