//! The seeded swatch layout of the gallery page.
//!
//! Generation walks the page in document order and pulls every random value from a
//! single [`Randomizer`], so a seed fully determines what is drawn.

use crate::{
    random::{PaletteError, Randomizer, angles_with_separation, sample_without_replacement},
    util::color::Gradient,
};

/// Swatches in each "Random" two-color section.
const RANDOM_SAMPLES: usize = 18;
/// Swatches in each fixed-separation section.
const SEPARATION_SAMPLES: usize = 6;
/// Swatches in each multi-color section.
const MULTI_COLOR_SAMPLES: usize = 30;
const SEPARATIONS: [u32; 6] = [30, 60, 90, 120, 150, 180];
const MULTI_COLOR_COUNTS: [usize; 5] = [3, 4, 5, 6, 7];

#[derive(Clone, Debug, PartialEq)]
pub struct SwatchSection {
    pub title: String,
    pub swatches: Vec<Gradient>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwatchGroup {
    pub title: String,
    pub sections: Vec<SwatchSection>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryPlan {
    pub groups: Vec<SwatchGroup>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Linear,
    Radial,
}

impl Shape {
    /// Draws the direction first for linear gradients, then builds the gradient.
    fn gradient(
        self,
        rng: &mut Randomizer,
        stops: impl FnOnce(&mut Randomizer) -> Result<Vec<f64>, PaletteError>,
    ) -> Result<Gradient, PaletteError> {
        Ok(match self {
            Shape::Linear => {
                let direction = rng.next_f64() * 360.0;
                Gradient::linear(direction, stops(rng)?)
            }
            Shape::Radial => Gradient::radial(stops(rng)?),
        })
    }
}

fn sampled_stops(
    rng: &mut Randomizer,
    palette: &[u32],
    colors: usize,
) -> Result<Vec<f64>, PaletteError> {
    Ok(sample_without_replacement(rng, colors, palette)?
        .into_iter()
        .map(f64::from)
        .collect())
}

/// `samples` gradients, each through `colors` distinct hues of the palette.
fn random_section(
    rng: &mut Randomizer,
    shape: Shape,
    title: String,
    palette: &[u32],
    samples: usize,
    colors: usize,
) -> Result<SwatchSection, PaletteError> {
    let swatches = (0..samples)
        .map(|_| shape.gradient(rng, |rng| sampled_stops(rng, palette, colors)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SwatchSection { title, swatches })
}

/// Two-color gradients from a random base hue to `separation` degrees past it.
fn separation_section(
    rng: &mut Randomizer,
    shape: Shape,
    separation: u32,
) -> Result<SwatchSection, PaletteError> {
    let separation = f64::from(separation);
    let swatches = (0..SEPARATION_SAMPLES)
        .map(|_| {
            shape.gradient(rng, |rng| {
                let color = rng.next_f64() * 360.0;
                Ok(vec![color, color + separation])
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SwatchSection {
        title: format!("{separation}°"),
        swatches,
    })
}

fn two_color_group(
    rng: &mut Randomizer,
    shape: Shape,
    palette: &[u32],
) -> Result<SwatchGroup, PaletteError> {
    let mut sections = vec![random_section(
        rng,
        shape,
        "Random".to_string(),
        palette,
        RANDOM_SAMPLES,
        2,
    )?];
    for separation in SEPARATIONS {
        sections.push(separation_section(rng, shape, separation)?);
    }
    let title = match shape {
        Shape::Linear => "Linear gradient, 2 colors",
        Shape::Radial => "Radial gradient, 2 colors",
    };
    Ok(SwatchGroup {
        title: title.to_string(),
        sections,
    })
}

fn multi_color_group(
    rng: &mut Randomizer,
    shape: Shape,
    palette: &[u32],
) -> Result<SwatchGroup, PaletteError> {
    let sections = MULTI_COLOR_COUNTS
        .into_iter()
        .map(|colors| {
            random_section(
                rng,
                shape,
                format!("{colors} colors"),
                palette,
                MULTI_COLOR_SAMPLES,
                colors,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let title = match shape {
        Shape::Linear => "Linear gradient, > 2 colors",
        Shape::Radial => "Radial gradient, > 2 colors",
    };
    Ok(SwatchGroup {
        title: title.to_string(),
        sections,
    })
}

impl GalleryPlan {
    /// Lays out every random group, drawing from `rng` in document order.
    ///
    /// Fails when `palette_step` is zero or leaves fewer hues on the wheel than the
    /// largest multi-color section needs.
    pub fn generate(rng: &mut Randomizer, palette_step: u32) -> Result<Self, PaletteError> {
        let palette = angles_with_separation(palette_step)?;
        let groups = vec![
            two_color_group(rng, Shape::Linear, &palette)?,
            two_color_group(rng, Shape::Radial, &palette)?,
            multi_color_group(rng, Shape::Linear, &palette)?,
            multi_color_group(rng, Shape::Radial, &palette)?,
        ];
        Ok(Self { groups })
    }

    pub fn swatch_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.sections)
            .map(|section| section.swatches.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::color::Hue;
    use assert_matches::assert_matches;

    #[test]
    fn layout_matches_the_page() {
        let plan = GalleryPlan::generate(&mut Randomizer::new(0), 30).unwrap();
        let titles: Vec<_> = plan.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Linear gradient, 2 colors",
                "Radial gradient, 2 colors",
                "Linear gradient, > 2 colors",
                "Radial gradient, > 2 colors",
            ]
        );
        let sections: Vec<_> = plan.groups[0]
            .sections
            .iter()
            .map(|s| (s.title.as_str(), s.swatches.len()))
            .collect();
        assert_eq!(
            sections,
            [
                ("Random", 18),
                ("30°", 6),
                ("60°", 6),
                ("90°", 6),
                ("120°", 6),
                ("150°", 6),
                ("180°", 6),
            ]
        );
        let multi: Vec<_> = plan.groups[3]
            .sections
            .iter()
            .map(|s| (s.title.as_str(), s.swatches.len()))
            .collect();
        assert_eq!(
            multi,
            [
                ("3 colors", 30),
                ("4 colors", 30),
                ("5 colors", 30),
                ("6 colors", 30),
                ("7 colors", 30),
            ]
        );
        assert_eq!(plan.swatch_count(), 2 * (18 + 6 * 6) + 2 * 5 * 30);
    }

    #[test]
    fn first_swatch_from_zero_seed() {
        let plan = GalleryPlan::generate(&mut Randomizer::new(0), 30).unwrap();
        let first = &plan.groups[0].sections[0].swatches[0];
        let direction = 49297.0 / 233_280.0 * 360.0;
        assert_eq!(*first, Gradient::linear(direction, [240_u32, 180]));
        assert_eq!(
            first.to_string(),
            format!(
                "linear-gradient(-{direction}deg, hsl(240, 100%, 50%), hsl(180, 100%, 50%))"
            )
        );
        assert!(first.to_string().starts_with("linear-gradient(-76.07561728395062deg, "));
    }

    #[test]
    fn same_seed_same_plan() {
        let first = GalleryPlan::generate(&mut Randomizer::new(2024), 30).unwrap();
        let second = GalleryPlan::generate(&mut Randomizer::new(2024), 30).unwrap();
        assert_eq!(first, second);
        let other = GalleryPlan::generate(&mut Randomizer::new(2025), 30).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn separation_sections_keep_their_distance() {
        let plan = GalleryPlan::generate(&mut Randomizer::new(11), 30).unwrap();
        for group in &plan.groups[..2] {
            for (section, separation) in group.sections[1..].iter().zip(SEPARATIONS) {
                for swatch in &section.swatches {
                    let [Hue(from), Hue(to)] = swatch.stops() else {
                        panic!("expected two stops in {swatch}");
                    };
                    assert!((to - from - f64::from(separation)).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn multi_color_swatches_use_distinct_palette_hues() {
        let plan = GalleryPlan::generate(&mut Randomizer::new(5), 30).unwrap();
        for group in &plan.groups[2..] {
            for (section, colors) in group.sections.iter().zip(MULTI_COLOR_COUNTS) {
                for swatch in &section.swatches {
                    let stops = swatch.stops();
                    assert_eq!(stops.len(), colors);
                    for (idx, Hue(hue)) in stops.iter().enumerate() {
                        assert_eq!(hue % 30.0, 0.0);
                        assert!(!stops[idx + 1..].contains(&Hue(*hue)));
                    }
                }
            }
        }
    }

    #[test]
    fn radial_swatches_have_no_direction() {
        let plan = GalleryPlan::generate(&mut Randomizer::new(1), 30).unwrap();
        for group in [&plan.groups[1], &plan.groups[3]] {
            for section in &group.sections {
                assert!(
                    section
                        .swatches
                        .iter()
                        .all(|swatch| matches!(swatch, Gradient::Radial { .. }))
                );
            }
        }
    }

    #[test]
    fn coarse_palette_cannot_fill_seven_colors() {
        let result = GalleryPlan::generate(&mut Randomizer::new(0), 60);
        assert_matches!(
            result,
            Err(PaletteError::InvalidSampleSize {
                requested: 7,
                available: 6
            })
        );
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_matches!(
            GalleryPlan::generate(&mut Randomizer::new(0), 0),
            Err(PaletteError::ZeroSeparation)
        );
    }
}
