use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slothtest_core::flair::Picker;

/// Uniform picks from a standard RNG.
pub struct RngPicker {
    rng: StdRng,
}

impl RngPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Picker for RngPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
