//! Dial level (1..=5) and the tables indexed by it.
//!
//! A [`Level`] can only be constructed inside the valid range, so the label,
//! color and icon lookups done by the renderer can never go out of bounds.

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::LEVEL_COLORS;
use crate::config::SCALE_STEPS;

/// Human-readable label per level. Indexed by `level - 1`.
pub const LEVEL_LABELS: [&str; Level::COUNT] = ["Very Low", "Low", "Moderate", "High", "Severe"];

/// Angle between two neighbouring scale positions.
pub const ANGLE_STEP: f32 = PI / (SCALE_STEPS - 1) as f32;

/// A dial level in `1..=5`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Level(u8);

impl Level {
    /// Number of levels on the dial.
    pub const COUNT: usize = SCALE_STEPS;

    /// Lowest level ("Very Low").
    pub const MIN: Self = Self(1);

    /// Highest level ("Severe").
    pub const MAX: Self = Self(Self::COUNT as u8);

    /// Create a level, returning `None` outside `1..=5`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 { Some(Self(value)) } else { None }
    }

    /// Create a level, saturating values outside `1..=5`.
    pub const fn clamped(value: i64) -> Self {
        if value < Self::MIN.0 as i64 {
            Self::MIN
        } else if value > Self::MAX.0 as i64 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    /// Level from a zero-based scale index.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT { Some(Self(index as u8 + 1)) } else { None }
    }

    /// The level number (1..=5).
    #[inline]
    pub const fn get(self) -> u8 { self.0 }

    /// Zero-based index into the per-level tables.
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize - 1 }

    /// Label shown in the dial's label box.
    #[inline]
    pub const fn label(self) -> &'static str { LEVEL_LABELS[self.index()] }

    /// Pointer fill color.
    #[inline]
    pub const fn color(self) -> Rgb888 { LEVEL_COLORS[self.index()] }

    /// Pointer angle in radians: `PI` for level 1 down to `0` for level 5.
    #[inline]
    pub fn pointer_angle(self) -> f32 { scale_angle(self.index()) }

    /// Next level up, staying at [`Level::MAX`].
    #[inline]
    pub const fn up(self) -> Self { if self.0 < Self::MAX.0 { Self(self.0 + 1) } else { self } }

    /// Next level down, staying at [`Level::MIN`].
    #[inline]
    pub const fn down(self) -> Self { if self.0 > Self::MIN.0 { Self(self.0 - 1) } else { self } }

    /// All levels in ascending order.
    pub fn all() -> impl Iterator<Item = Self> { (Self::MIN.0..=Self::MAX.0).map(Self) }
}

impl Default for Level {
    fn default() -> Self { Self::MIN }
}

impl core::fmt::Display for Level {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle of scale position `index` (0-based): `PI - index * PI/4`.
#[inline]
pub fn scale_angle(index: usize) -> f32 { PI - index as f32 * ANGLE_STEP }
