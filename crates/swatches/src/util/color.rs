use std::fmt::{self, Display};

/// A fully saturated, mid-lightness color at `angle` degrees on the HSL wheel.
///
/// The angle is written out as-is: CSS treats hues outside `[0, 360)` as equivalent
/// modulo a full turn.
#[derive(Clone, Copy, Debug, PartialEq, derive_more::Display)]
#[display("hsl({_0}, 100%, 50%)")]
pub struct Hue(pub f64);

impl From<u32> for Hue {
    fn from(angle: u32) -> Self {
        Hue(f64::from(angle))
    }
}

impl From<f64> for Hue {
    fn from(angle: f64) -> Self {
        Hue(angle)
    }
}

/// Rotation of a linear gradient line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
    /// Rendered as `<deg>deg`.
    Clockwise(f64),
    /// Rendered as `-<deg>deg`.
    CounterClockwise(f64),
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise(deg) => write!(f, "{deg}deg"),
            Direction::CounterClockwise(deg) => write!(f, "-{deg}deg"),
        }
    }
}

/// A CSS `background-image` gradient through an ordered list of hues.
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear { direction: Direction, stops: Vec<Hue> },
    Radial { stops: Vec<Hue> },
}

impl Gradient {
    /// Linear gradient rotated counter-clockwise by `direction` degrees.
    pub fn linear(direction: f64, stops: impl IntoIterator<Item = impl Into<Hue>>) -> Self {
        Gradient::Linear {
            direction: Direction::CounterClockwise(direction),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    pub fn linear_clockwise(
        direction: f64,
        stops: impl IntoIterator<Item = impl Into<Hue>>,
    ) -> Self {
        Gradient::Linear {
            direction: Direction::Clockwise(direction),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    pub fn radial(stops: impl IntoIterator<Item = impl Into<Hue>>) -> Self {
        Gradient::Radial {
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stops(&self) -> &[Hue] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops } => stops,
        }
    }
}

fn write_stops(f: &mut fmt::Formatter<'_>, stops: &[Hue]) -> fmt::Result {
    for (idx, hue) in stops.iter().enumerate() {
        if idx == 0 {
            write!(f, "{hue}")?;
        } else {
            write!(f, ", {hue}")?;
        }
    }
    Ok(())
}

impl Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gradient::Linear { direction, stops } => {
                write!(f, "linear-gradient({direction}, ")?;
                write_stops(f, stops)?;
                write!(f, ")")
            }
            Gradient::Radial { stops } => {
                write!(f, "radial-gradient(")?;
                write_stops(f, stops)?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn linear_two_stops() {
        let gradient = Gradient::linear(45.0, [10_u32, 200]);
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(-45deg, hsl(10, 100%, 50%), hsl(200, 100%, 50%))"
        );
    }

    #[test]
    fn linear_clockwise_has_no_sign() {
        let gradient = Gradient::linear_clockwise(12.5, [0.0_f64, 90.25]);
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(12.5deg, hsl(0, 100%, 50%), hsl(90.25, 100%, 50%))"
        );
    }

    #[test]
    fn radial_three_stops() {
        let gradient = Gradient::radial([0_u32, 120, 240]);
        assert_eq!(
            gradient.to_string(),
            "radial-gradient(hsl(0, 100%, 50%), hsl(120, 100%, 50%), hsl(240, 100%, 50%))"
        );
    }

    #[rstest]
    #[case(Hue(0.0), "hsl(0, 100%, 50%)")]
    #[case(Hue(330.0), "hsl(330, 100%, 50%)")]
    #[case(Hue(76.0625), "hsl(76.0625, 100%, 50%)")]
    #[case(Hue(510.0), "hsl(510, 100%, 50%)")]
    #[case(Hue(-30.0), "hsl(-30, 100%, 50%)")]
    fn hue_is_not_normalized(#[case] hue: Hue, #[case] expected: &str) {
        assert_eq!(hue.to_string(), expected);
    }

    #[test]
    fn zero_direction_keeps_sign() {
        assert_eq!(Direction::CounterClockwise(0.0).to_string(), "-0deg");
    }

    #[test]
    fn stops_are_exposed_in_order() {
        let gradient = Gradient::linear(0.0, [30_u32, 10, 20]);
        assert_eq!(gradient.stops(), &[Hue(30.0), Hue(10.0), Hue(20.0)]);
    }
}
