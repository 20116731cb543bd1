//! Orientation classification from an outward normal vector.
//!
//! Vertical surfaces fall into one of eight 45° sectors measured counter-clockwise
//! from +X (East), with +Y pointing North. Surfaces whose normal is dominated by
//! the Z component are classified as Roof (up) or Floor (down).

use crate::Vector;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical orientation of an envelope surface.
///
/// Variant order is the canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Roof,
    Floor,
    Unknown,
}

impl Orientation {
    /// All orientations in canonical reporting order.
    pub const ALL: [Orientation; 11] = [
        Orientation::North,
        Orientation::NorthEast,
        Orientation::East,
        Orientation::SouthEast,
        Orientation::South,
        Orientation::SouthWest,
        Orientation::West,
        Orientation::NorthWest,
        Orientation::Roof,
        Orientation::Floor,
        Orientation::Unknown,
    ];

    /// Classifies an outward normal. Any length is accepted; a zero or
    /// non-finite vector gives `Unknown`.
    pub fn from_normal(vn: Vector) -> Self {
        let finite = vn.dx.is_finite() && vn.dy.is_finite() && vn.dz.is_finite();
        if !finite || vn.length() == 0.0 {
            return Orientation::Unknown;
        }
        let (abs_x, abs_y, abs_z) = (vn.dx.abs(), vn.dy.abs(), vn.dz.abs());
        if abs_z > abs_x && abs_z > abs_y {
            return if vn.dz > 0.0 {
                Orientation::Roof
            } else {
                Orientation::Floor
            };
        }

        Self::from_azimuth(vn.dy.atan2(vn.dx).to_degrees())
    }

    /// Classifies a horizontal direction given in degrees counter-clockwise
    /// from East. Sector lower bounds are inclusive.
    pub fn from_azimuth(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Orientation::Unknown;
        }
        match degrees.rem_euclid(360.0) {
            a if !(22.5..337.5).contains(&a) => Orientation::East,
            a if a < 67.5 => Orientation::NorthEast,
            a if a < 112.5 => Orientation::North,
            a if a < 157.5 => Orientation::NorthWest,
            a if a < 202.5 => Orientation::West,
            a if a < 247.5 => Orientation::SouthWest,
            a if a < 292.5 => Orientation::South,
            _ => Orientation::SouthEast,
        }
    }

    /// Short code, e.g. `NE` or `R`.
    pub fn code(&self) -> &'static str {
        match self {
            Orientation::North => "N",
            Orientation::NorthEast => "NE",
            Orientation::East => "E",
            Orientation::SouthEast => "SE",
            Orientation::South => "S",
            Orientation::SouthWest => "SW",
            Orientation::West => "W",
            Orientation::NorthWest => "NW",
            Orientation::Roof => "R",
            Orientation::Floor => "F",
            Orientation::Unknown => "Unknown",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::North => "North",
            Orientation::NorthEast => "NorthEast",
            Orientation::East => "East",
            Orientation::SouthEast => "SouthEast",
            Orientation::South => "South",
            Orientation::SouthWest => "SouthWest",
            Orientation::West => "West",
            Orientation::NorthWest => "NorthWest",
            Orientation::Roof => "Roof",
            Orientation::Floor => "Floor",
            Orientation::Unknown => "Unknown",
        }
    }

    /// Solar cooling factor in W/m^2 applied to fenestration facing this way.
    ///
    /// `Unknown` uses the worst-case vertical factor rather than zero.
    pub fn cooling_factor(&self) -> f64 {
        match self {
            Orientation::North => 143.0,
            Orientation::NorthEast | Orientation::NorthWest => 169.0,
            Orientation::East | Orientation::South | Orientation::West => 193.0,
            Orientation::SouthEast | Orientation::SouthWest => 211.0,
            Orientation::Roof | Orientation::Floor => 0.0,
            Orientation::Unknown => 211.0,
        }
    }

    pub fn is_roof(&self) -> bool {
        matches!(self, Orientation::Roof)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a name or short code, case-insensitively.
impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Orientation::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s) || o.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unrecognized orientation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn at_angle(deg: f64) -> Vector {
        let rad = deg.to_radians();
        Vector::new(rad.cos(), rad.sin(), 0.)
    }

    #[test]
    fn test_zero_vector_is_unknown() {
        assert_eq!(Orientation::from_normal(Vector::zero()), Orientation::Unknown);
    }

    #[test]
    fn test_cardinal_directions() {
        let cases = [
            (0., Orientation::East),
            (45., Orientation::NorthEast),
            (90., Orientation::North),
            (135., Orientation::NorthWest),
            (180., Orientation::West),
            (225., Orientation::SouthWest),
            (270., Orientation::South),
            (315., Orientation::SouthEast),
        ];
        for (deg, expected) in cases {
            assert_eq!(Orientation::from_normal(at_angle(deg)), expected, "{deg}°");
        }
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(Orientation::from_normal(at_angle(22.4)), Orientation::East);
        assert_eq!(Orientation::from_normal(at_angle(22.6)), Orientation::NorthEast);
        assert_eq!(Orientation::from_normal(at_angle(337.6)), Orientation::East);
        assert_eq!(Orientation::from_normal(at_angle(337.4)), Orientation::SouthEast);
        assert_eq!(Orientation::from_normal(at_angle(292.6)), Orientation::SouthEast);
        assert_eq!(Orientation::from_normal(at_angle(292.4)), Orientation::South);
    }

    #[test]
    fn test_roof_and_floor() {
        assert_eq!(Orientation::from_normal(Vector::new(0., 0., 1.)), Orientation::Roof);
        assert_eq!(Orientation::from_normal(Vector::new(0., 0., -3.)), Orientation::Floor);
        // Pitched roof with Z dominating
        assert_eq!(Orientation::from_normal(Vector::new(0.3, 0.4, 0.8)), Orientation::Roof);
        // Z ties with X: not strictly dominant, so it is a wall
        assert_eq!(Orientation::from_normal(Vector::new(1., 0., 1.)), Orientation::East);
    }

    #[test]
    fn test_scale_invariance() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = Vector::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let scale = rng.gen_range(0.001..1000.0);
            let o = Orientation::from_normal(v);
            assert_ne!(o, Orientation::Unknown);
            assert_eq!(o, Orientation::from_normal(v * scale), "{v} x {scale}");
        }
    }

    #[test]
    fn test_cooling_factors() {
        assert_eq!(Orientation::North.cooling_factor(), 143.0);
        assert_eq!(Orientation::SouthEast.cooling_factor(), 211.0);
        assert_eq!(Orientation::Roof.cooling_factor(), 0.0);
        assert_eq!(
            Orientation::Unknown.cooling_factor(),
            Orientation::SouthWest.cooling_factor()
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("northeast".parse::<Orientation>().unwrap(), Orientation::NorthEast);
        assert_eq!("ROOF".parse::<Orientation>().unwrap(), Orientation::Roof);
        assert_eq!("sw".parse::<Orientation>().unwrap(), Orientation::SouthWest);
        assert!("Up".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_ord_follows_canonical_order() {
        assert!(Orientation::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Orientation::NorthWest < Orientation::Roof);
    }

    #[test]
    fn test_exact_azimuth_boundaries() {
        let cases = [
            (22.5, Orientation::NorthEast),
            (22.499, Orientation::East),
            (67.5, Orientation::North),
            (67.499, Orientation::NorthEast),
            (112.5, Orientation::NorthWest),
            (157.5, Orientation::West),
            (202.5, Orientation::SouthWest),
            (247.5, Orientation::South),
            (292.5, Orientation::SouthEast),
            (337.5, Orientation::East),
            (337.499, Orientation::SouthEast),
            (0.0, Orientation::East),
            (360.0, Orientation::East),
            (-22.5, Orientation::East),
            (-22.501, Orientation::SouthEast),
        ];
        for (deg, expected) in cases {
            assert_eq!(Orientation::from_azimuth(deg), expected, "azimuth {deg}");
        }
    }

    #[test]
    fn test_non_finite_normal_is_unknown() {
        let nan = Vector::new(f64::NAN, 1.0, 0.0);
        assert_eq!(Orientation::from_normal(nan), Orientation::Unknown);
        let inf = Vector::new(f64::INFINITY, 0.0, 0.0);
        assert_eq!(Orientation::from_normal(inf), Orientation::Unknown);
        assert_eq!(Orientation::from_azimuth(f64::NAN), Orientation::Unknown);
    }
}
