//! Linear-congruential generator known as "The Central Randomizer".

pub const MULTIPLIER: u64 = 9301;
pub const INCREMENT: u64 = 49297;
pub const MODULUS: u32 = 233_280;

/// A small linear-congruential generator producing floats in `[0, 1)`.
///
/// The whole state is one integer below [`MODULUS`], so the sequence repeats after
/// at most that many draws. Drawing requires `&mut self`: callers that need
/// independent sequences must each own a separately seeded instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Randomizer {
    state: u32,
}

impl Randomizer {
    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Resets the generator as if it had just been created with `seed`.
    pub fn seed(&mut self, seed: u32) {
        self.state = seed % MODULUS;
    }

    /// Current internal state, i.e. the seed the next draw is computed from.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns a value in `[0, 1)`.
    #[allow(clippy::cast_possible_truncation)] // reduced below MODULUS
    pub fn next_f64(&mut self) -> f64 {
        let next = (u64::from(self.state) * MULTIPLIER + INCREMENT) % u64::from(MODULUS);
        self.state = next as u32;
        f64::from(self.state) / f64::from(MODULUS)
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for Randomizer {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
