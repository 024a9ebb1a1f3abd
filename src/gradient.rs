//! Linear and radial color gradients with per-stop opacity.
//!
//! Gradients are sampled per pixel by [`GradientLayer`](crate::canvas::GradientLayer).
//! Stops are `'static` slices so every gradient used by the dial lives in
//! read-only data, the same way the text styles do.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::Point;
use vintage_common::{BRASS_DARK, BRASS_LIGHT, BRASS_SHADOW, FACE_CENTER, FACE_EDGE};

/// One color stop: position along the gradient (0.0-1.0), color and opacity.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb888,
    pub alpha: f32,
}

impl ColorStop {
    pub const fn new(
        offset: f32,
        color: Rgb888,
        alpha: f32,
    ) -> Self {
        Self { offset, color, alpha }
    }

    pub const fn opaque(
        offset: f32,
        color: Rgb888,
    ) -> Self {
        Self::new(offset, color, 1.0)
    }
}

// =============================================================================
// Dial Gradients
// =============================================================================

/// Brass scale arc, left to right.
pub const BRASS_ARC_STOPS: [ColorStop; 3] = [
    ColorStop::opaque(0.0, BRASS_DARK),
    ColorStop::opaque(0.5, BRASS_LIGHT),
    ColorStop::opaque(1.0, BRASS_DARK),
];

/// Dial face, center outward. The face fades out toward its edge.
pub const FACE_STOPS: [ColorStop; 2] = [ColorStop::new(0.0, FACE_CENTER, 0.9), ColorStop::new(1.0, FACE_EDGE, 0.8)];

/// Icon discs behind the level glyphs.
pub const ICON_DISC_STOPS: [ColorStop; 2] = [ColorStop::opaque(0.0, BRASS_LIGHT), ColorStop::opaque(1.0, BRASS_DARK)];

/// Center cap over the pointer pivot.
pub const CAP_STOPS: [ColorStop; 3] = [
    ColorStop::opaque(0.0, BRASS_LIGHT),
    ColorStop::opaque(0.7, BRASS_DARK),
    ColorStop::opaque(1.0, BRASS_SHADOW),
];

// =============================================================================
// Sampling
// =============================================================================

/// Anything that maps a pixel to a color and opacity.
pub trait Gradient {
    fn sample(
        &self,
        point: Point,
    ) -> (Rgb888, f32);
}

/// Color and opacity at position `t` along `stops`.
///
/// Positions before the first stop take the first stop, positions past the last
/// stop take the last one. An empty slice samples as fully transparent black.
pub fn interpolate(
    stops: &[ColorStop],
    t: f32,
) -> (Rgb888, f32) {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return (Rgb888::BLACK, 0.0);
    };
    if t <= first.offset {
        return (first.color, first.alpha);
    }
    if t >= last.offset {
        return (last.color, last.alpha);
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.offset && t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span > 0.0 { (t - a.offset) / span } else { 0.0 };
            let lerp = |x: u8, y: u8| -> u8 {
                (f32::from(x) + (f32::from(y) - f32::from(x)) * f).round().clamp(0.0, 255.0) as u8
            };
            let color = Rgb888::new(lerp(a.color.r(), b.color.r()), lerp(a.color.g(), b.color.g()), lerp(a.color.b(), b.color.b()));
            return (color, a.alpha + (b.alpha - a.alpha) * f);
        }
    }
    (last.color, last.alpha)
}

/// Pixel center in sub-pixel coordinates.
#[inline]
fn pixel_center(point: Point) -> (f32, f32) { (point.x as f32 + 0.5, point.y as f32 + 0.5) }

/// Gradient along the line from `start` to `end`.
#[derive(Clone, Copy, Debug)]
pub struct LinearGradient<'s> {
    start: (f32, f32),
    end: (f32, f32),
    stops: &'s [ColorStop],
}

impl<'s> LinearGradient<'s> {
    pub const fn new(
        start: (f32, f32),
        end: (f32, f32),
        stops: &'s [ColorStop],
    ) -> Self {
        Self { start, end, stops }
    }
}

impl Gradient for LinearGradient<'_> {
    fn sample(
        &self,
        point: Point,
    ) -> (Rgb888, f32) {
        let (px, py) = pixel_center(point);
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        let length_sq = dx * dx + dy * dy;
        let t = if length_sq > 0.0 {
            ((px - self.start.0) * dx + (py - self.start.1) * dy) / length_sq
        } else {
            0.0
        };
        interpolate(self.stops, t)
    }
}

/// Gradient radiating from `center` out to `radius`.
#[derive(Clone, Copy, Debug)]
pub struct RadialGradient<'s> {
    center: (f32, f32),
    radius: f32,
    stops: &'s [ColorStop],
}

impl<'s> RadialGradient<'s> {
    pub const fn new(
        center: (f32, f32),
        radius: f32,
        stops: &'s [ColorStop],
    ) -> Self {
        Self { center, radius, stops }
    }
}

impl Gradient for RadialGradient<'_> {
    fn sample(
        &self,
        point: Point,
    ) -> (Rgb888, f32) {
        let (px, py) = pixel_center(point);
        let (dx, dy) = (px - self.center.0, py - self.center.1);
        let t = if self.radius > 0.0 { dx.hypot(dy) / self.radius } else { 1.0 };
        interpolate(self.stops, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_TO_BLUE: [ColorStop; 2] = [ColorStop::opaque(0.0, Rgb888::RED), ColorStop::new(1.0, Rgb888::BLUE, 0.0)];

    #[test]
    fn test_interpolate_endpoints_clamp() {
        assert_eq!(interpolate(&RED_TO_BLUE, -1.0), (Rgb888::RED, 1.0));
        assert_eq!(interpolate(&RED_TO_BLUE, 2.0), (Rgb888::BLUE, 0.0));
    }

    #[test]
    fn test_interpolate_midpoint() {
        let (color, alpha) = interpolate(&RED_TO_BLUE, 0.5);
        assert!((127..=128).contains(&color.r()));
        assert!((127..=128).contains(&color.b()));
        assert!((alpha - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_interpolate_empty_is_transparent() {
        assert_eq!(interpolate(&[], 0.5).1, 0.0);
    }

    #[test]
    fn test_brass_arc_is_lightest_in_middle() {
        let (middle, _) = interpolate(&BRASS_ARC_STOPS, 0.5);
        let (left, _) = interpolate(&BRASS_ARC_STOPS, 0.0);
        assert_eq!(middle, BRASS_LIGHT);
        assert_eq!(left, BRASS_DARK);
    }

    #[test]
    fn test_linear_projects_onto_axis() {
        let g = LinearGradient::new((0.0, 0.0), (100.0, 0.0), &RED_TO_BLUE);
        // Vertical offset does not matter for a horizontal gradient
        assert_eq!(g.sample(Point::new(0, 0)), g.sample(Point::new(0, 50)));
        assert!(g.sample(Point::new(99, 0)).0.b() > 240);
    }

    #[test]
    fn test_radial_fades_outward() {
        let g = RadialGradient::new((50.0, 50.0), 10.0, &FACE_STOPS);
        let (_, inner) = g.sample(Point::new(49, 49));
        let (_, outer) = g.sample(Point::new(70, 50));
        assert!(inner > 0.85);
        assert!((outer - 0.8).abs() < 1e-4);
    }
}
