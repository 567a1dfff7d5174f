//! Seeded randomness for the swatch gallery.
//!
//! Everything here is deterministic: a [`Randomizer`] seeded with the same value
//! always produces the same draws, and the sampling helpers consume draws in a
//! fixed order.

pub mod randomizer;
pub mod sample;

pub use randomizer::Randomizer;
pub use sample::{PaletteError, angles_with_separation, sample_one, sample_without_replacement};
