//! Sampling helpers over the discrete color wheel.

use super::Randomizer;

/// One full turn of the color wheel, in degrees.
pub const FULL_TURN: u32 = 360;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid sample size: requested {requested} items from a pool of {available}")]
    InvalidSampleSize { requested: usize, available: usize },
    #[error("angle separation must be greater than zero")]
    ZeroSeparation,
}

/// Picks an index into a pool of `len` items, consuming one draw.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn draw_index(rng: &mut Randomizer, len: usize) -> usize {
    (rng.next_f64() * len as f64).floor() as usize
}

/// Selects `n` distinct items from `items`, preserving draw order.
///
/// Each step draws `floor(rand * remaining)` as an index into the remaining pool and
/// removes the chosen item. Asking for more items than the pool holds fails before
/// any draw is consumed.
pub fn sample_without_replacement<T: Clone>(
    rng: &mut Randomizer,
    n: usize,
    items: &[T],
) -> Result<Vec<T>, PaletteError> {
    if n > items.len() {
        return Err(PaletteError::InvalidSampleSize {
            requested: n,
            available: items.len(),
        });
    }
    let mut pool = items.to_vec();
    let mut sampled = Vec::with_capacity(n);
    for _ in 0..n {
        let index = draw_index(rng, pool.len());
        sampled.push(pool.remove(index));
    }
    Ok(sampled)
}

/// Draws a single item. An empty slice yields `None` without consuming a draw.
pub fn sample_one<'a, T>(rng: &mut Randomizer, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(draw_index(rng, items.len()))
}

/// Angles `0, step, 2 * step, ...` strictly below a full turn.
pub fn angles_with_separation(step: u32) -> Result<Vec<u32>, PaletteError> {
    if step == 0 {
        return Err(PaletteError::ZeroSeparation);
    }
    Ok((0..FULL_TURN).step_by(step as usize).collect())
}
