//! Slider-driven swatches: a fixed color wheel recolored by one angle.

use crate::util::color::Gradient;

/// Initial "spread" between the two hues, in degrees.
pub const INITIAL_SPREAD: f64 = 80.0;
/// Initial "split" around the complement, in degrees.
pub const INITIAL_SPLIT: f64 = 60.0;
/// Direction shared by every interactive linear swatch.
pub const LINEAR_DIRECTION: f64 = 37.0;

/// Range inputs run from 0 to 100; this maps their position onto a full turn.
pub fn degrees_from_percent(percent: f64) -> f64 {
    percent / 100.0 * 360.0
}

pub fn percent_from_degrees(degrees: f64) -> f64 {
    degrees / 360.0 * 100.0
}

/// Label shown next to a slider: the angle rounded to whole degrees.
pub fn degrees_label(degrees: f64) -> String {
    degrees.round().to_string()
}

pub fn two_color_hues(angle: f64, spread: f64) -> [f64; 2] {
    [angle, angle + spread]
}

/// Split-complementary scheme: the base hue flanked by the two hues `split / 2`
/// away from its complement.
pub fn split_complementary_hues(angle: f64, split: f64) -> [f64; 3] {
    [angle + 180.0 + split / 2.0, angle, angle + 180.0 - split / 2.0]
}

/// One linear and one radial swatch per wheel angle.
#[derive(Clone, Debug, PartialEq)]
pub struct SwatchRows {
    pub linear: Vec<Gradient>,
    pub radial: Vec<Gradient>,
}

impl SwatchRows {
    fn from_hues<const N: usize>(wheel: &[u32], hues: impl Fn(f64) -> [f64; N]) -> Self {
        let (linear, radial) = wheel
            .iter()
            .map(|&angle| {
                let stops = hues(f64::from(angle));
                (
                    Gradient::linear(LINEAR_DIRECTION, stops),
                    Gradient::radial(stops),
                )
            })
            .unzip();
        Self { linear, radial }
    }

    pub fn two_color(wheel: &[u32], spread: f64) -> Self {
        Self::from_hues(wheel, |angle| two_color_hues(angle, spread))
    }

    pub fn split_complementary(wheel: &[u32], split: f64) -> Self {
        Self::from_hues(wheel, |angle| split_complementary_hues(angle, split))
    }
}
