//! Dial geometry: center, radius, scale positions and pointer shape.
//!
//! # Orientation
//!
//! Angles follow the mathematical convention with the y axis pointing up:
//! `PI` is the left end of the dial, `PI/2` the top and `0` the right end. Screen
//! coordinates grow downward, so [`DialGeometry::polar`] flips the sine term.
//! With this convention the five scale positions and the pointer all sit on the
//! visible upper half of the dial.
//!
//! Trigonometry uses `micromath` so the math stays `no_std`.

use embedded_graphics::prelude::{Point, Size};

use crate::config::{
    DIAL_CENTER_RATIO, DIAL_HEIGHT, DIAL_RADIUS_RATIO, DIAL_WIDTH, NUMBER_INSET, POINTER_HALF_WIDTH, POINTER_INSET,
    TICK_LENGTH,
};
use crate::level::{Level, scale_angle};

/// Round a sub-pixel coordinate to the nearest pixel (half away from zero).
#[inline]
pub fn round_px(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// Pixel diameter of a circle with the given radius.
#[inline]
pub fn diameter(radius: f32) -> u32 {
    let d = round_px(radius * 2.0);
    if d > 0 { d as u32 } else { 0 }
}

/// Center and radius of the dial on a canvas.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DialGeometry {
    center_x: f32,
    center_y: f32,
    radius: f32,
}

impl DialGeometry {
    /// Geometry for an arbitrary canvas size.
    ///
    /// Radius is 35% of the smaller side; the center sits at half width and 45% height.
    pub fn new(size: Size) -> Self {
        let width = size.width as f32;
        let height = size.height as f32;
        let short_side = if width < height { width } else { height };
        Self {
            center_x: width / 2.0,
            center_y: height * DIAL_CENTER_RATIO,
            radius: short_side * DIAL_RADIUS_RATIO,
        }
    }

    /// Geometry for the standard 400x350 dial canvas.
    pub fn standard() -> Self { Self::new(Size::new(DIAL_WIDTH, DIAL_HEIGHT)) }

    /// Dial radius in (sub)pixels.
    #[inline]
    pub const fn radius(&self) -> f32 { self.radius }

    /// Exact center, in sub-pixel coordinates.
    #[inline]
    pub const fn center_f32(&self) -> (f32, f32) { (self.center_x, self.center_y) }

    /// Center rounded to the pixel grid.
    #[inline]
    pub fn center(&self) -> Point { Point::new(round_px(self.center_x), round_px(self.center_y)) }

    /// Point at `distance` from the center along `angle` (y axis up).
    pub fn polar(
        &self,
        distance: f32,
        angle: f32,
    ) -> Point {
        let (x, y) = self.polar_f32(distance, angle);
        Point::new(round_px(x), round_px(y))
    }

    /// Sub-pixel variant of [`polar`](Self::polar).
    pub fn polar_f32(
        &self,
        distance: f32,
        angle: f32,
    ) -> (f32, f32) {
        let cos = micromath::F32(angle).cos().0;
        let sin = micromath::F32(angle).sin().0;
        (self.center_x + distance * cos, self.center_y - distance * sin)
    }

    /// Point on scale position `index`, `inset` pixels inside the dial radius.
    pub fn scale_point(
        &self,
        index: usize,
        inset: f32,
    ) -> Point {
        self.polar(self.radius - inset, scale_angle(index))
    }

    /// Outer and inner end of the tick mark at scale position `index`.
    pub fn tick(
        &self,
        index: usize,
    ) -> (Point, Point) {
        let angle = scale_angle(index);
        (self.polar(self.radius, angle), self.polar(self.radius - TICK_LENGTH, angle))
    }

    /// Center of the numbered plate at scale position `index`.
    #[inline]
    pub fn number_center(
        &self,
        index: usize,
    ) -> Point {
        self.scale_point(index, NUMBER_INSET)
    }

    /// Pointer triangle `[base, tip, base]` for `level`.
    ///
    /// The base straddles the center perpendicular to the pointer angle; the tip
    /// stops short of the dial radius so it does not cover the icon discs' ring.
    pub fn pointer(
        &self,
        level: Level,
    ) -> [Point; 3] {
        let angle = level.pointer_angle();
        let half_turn = core::f32::consts::FRAC_PI_2;
        [
            self.polar(POINTER_HALF_WIDTH, angle + half_turn),
            self.polar(self.radius - POINTER_INSET, angle),
            self.polar(POINTER_HALF_WIDTH, angle - half_turn),
        ]
    }
}

impl Default for DialGeometry {
    fn default() -> Self { Self::standard() }
}
