//! Eight-point compass resolution for wind directions.

use std::fmt;

use crate::CoreError;

/// Spacing between adjacent principal compass points, in degrees.
const STEP_DEG: i32 = 45;

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Principal points in clockwise order starting at 0°.
const POINTS: [Compass; 8] = [
    Compass::N,
    Compass::NE,
    Compass::E,
    Compass::SE,
    Compass::S,
    Compass::SW,
    Compass::W,
    Compass::NW,
];

impl Compass {
    /// Short label as printed in the report, e.g. `"NE"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Bearing of this point in degrees, `0` for north.
    #[must_use]
    pub fn principal_degrees(self) -> i32 {
        match self {
            Self::N => 0,
            Self::NE => 45,
            Self::E => 90,
            Self::SE => 135,
            Self::S => 180,
            Self::SW => 225,
            Self::W => 270,
            Self::NW => 315,
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves a wind direction to the nearest of the eight principal points.
///
/// `0` is the NWS "calm / no direction" sentinel and yields `Ok(None)`;
/// `360` is north. Between two principal points the closer one wins and an
/// exact tie goes to the lower bearing.
///
/// # Errors
///
/// Returns [`CoreError::InvalidAngle`] when `deg` is outside `0..=360`.
pub fn degrees_to_compass(deg: i32) -> Result<Option<Compass>, CoreError> {
    if !(0..=360).contains(&deg) {
        return Err(CoreError::InvalidAngle(deg));
    }
    if deg == 0 {
        return Ok(None);
    }

    let lower = deg / STEP_DEG;
    let to_lower = deg - lower * STEP_DEG;
    let to_upper = STEP_DEG - to_lower;
    let index = if to_upper < to_lower { lower + 1 } else { lower };

    // index is in 0..=8 here; 8 wraps back to north.
    let slot = usize::try_from(index).map_err(|_| CoreError::InvalidAngle(deg))? % POINTS.len();
    Ok(Some(POINTS[slot]))
}
