//! Deterministic avatar badges derived from arbitrary text.
//!
//! The MD5 digest of the text is split into three 40-bit fields (the first thirty
//! hex digits, ten at a time). Each field divided by `2^40` gives a fraction in
//! `[0, 1)`, which in turn picks the gradient direction, the anchor hue and how far
//! the second hue sweeps past the anchor.

use crate::util::color::Gradient;

/// Bytes per digest field; five bytes are ten hex digits.
const FIELD_BYTES: usize = 5;
/// `2^40`, the exclusive upper bound of a field.
const FIELD_BASE: f64 = 1_099_511_627_776.0;
/// The second hue sits at least this many degrees past the anchor.
const SWEEP_OFFSET: f64 = 80.0;
/// ...and at most this many degrees further.
const SWEEP_RANGE: f64 = 40.0;

/// Everything needed to draw a badge for one piece of text.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeIdentity {
    /// Direction of the gradient line, in degrees.
    pub angle: f64,
    /// First hue.
    pub anchor: f64,
    /// Second hue, 80 to 120 degrees past `anchor`. Not reduced modulo 360.
    pub sweep: f64,
    /// First character of the text, upper-cased. Empty for empty text.
    pub glyph: String,
}

impl BadgeIdentity {
    pub fn from_text(text: &str) -> Self {
        let digest = md5::compute(text.as_bytes());
        let [a, b, c] = [0, 1, 2].map(|field| fraction(&digest.0, field));

        let anchor = b * 360.0;
        Self {
            angle: a * 360.0,
            anchor,
            sweep: anchor + SWEEP_OFFSET + c * SWEEP_RANGE,
            glyph: glyph(text),
        }
    }

    pub fn gradient(&self) -> Gradient {
        Gradient::linear_clockwise(self.angle, [self.anchor, self.sweep])
    }
}

/// Reads the `field`-th 40-bit big-endian integer of the digest as a fraction.
#[allow(clippy::cast_precision_loss)] // 40 bits fit the f64 mantissa
fn fraction(digest: &[u8; 16], field: usize) -> f64 {
    let start = field * FIELD_BYTES;
    let value = digest[start..start + FIELD_BYTES]
        .iter()
        .fold(0_u64, |acc, &byte| (acc << 8) | u64::from(byte));
    value as f64 / FIELD_BASE
}

fn glyph(text: &str) -> String {
    text.chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}
