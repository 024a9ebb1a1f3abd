//! Low-level drawing primitives shared by the dial and grid renderers.
//!
//! # Paper Texture
//!
//! The aged-paper look is a flat fill stippled with thousands of single black
//! pixels at very low opacity. Positions and opacities come from the caller's
//! RNG so a seeded RNG reproduces the same sheet.
//!
//! # Weathered Frame
//!
//! The outer frame is a closed polyline walked around the margin in 5px steps,
//! each vertex nudged by up to ±0.75px perpendicular to its edge. At stroke
//! width 8 this reads as a hand-inked border rather than a clean rectangle.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Polyline, Rectangle};
use rand::Rng;
use vintage_common::geometry::round_px;
use vintage_common::{
    BLACK, FRAME_BROWN, FRAME_INSET, FRAME_MARGIN, FRAME_ROUGHNESS, FRAME_STEP, FRAME_STROKE, PAPER, PAPER_SPECKS,
    PLACEHOLDER, SCREW_OFFSET, SCREW_RADIUS, SPECK_MAX_ALPHA,
};

use crate::canvas::Canvas;
use crate::styles::{INK_HAIRLINE, SCREW_HEAD};

// =============================================================================
// Paper
// =============================================================================

/// Fill the canvas with aged paper and stipple it with faint black specks.
pub fn draw_paper<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
) {
    canvas.clear(PAPER).ok();
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    if width == 0 || height == 0 {
        return;
    }
    for _ in 0..PAPER_SPECKS {
        let point = Point::new(rng.gen_range(0..width), rng.gen_range(0..height));
        let alpha = rng.gen_range(0.0..SPECK_MAX_ALPHA);
        canvas.blend_pixel(point, BLACK, alpha);
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Random offset in `[-roughness/2, roughness/2]`, snapped to the pixel grid.
fn jitter<R: Rng + ?Sized>(rng: &mut R) -> i32 { round_px((rng.r#gen::<f32>() - 0.5) * FRAME_ROUGHNESS) }

/// Vertices of the jittered frame, clockwise from the top-left corner, closed.
pub fn frame_points<R: Rng + ?Sized>(
    size: Size,
    rng: &mut R,
) -> Vec<Point> {
    let m = FRAME_MARGIN;
    let right = size.width as i32 - m;
    let bottom = size.height as i32 - m;
    let step = FRAME_STEP as usize;

    let mut points = Vec::new();
    for x in (m..=right).step_by(step) {
        points.push(Point::new(x, m + jitter(rng)));
    }
    for y in (m..=bottom).step_by(step) {
        points.push(Point::new(right + jitter(rng), y));
    }
    for x in (m..=right).rev().step_by(step) {
        points.push(Point::new(x, bottom + jitter(rng)));
    }
    for y in (m..=bottom).rev().step_by(step) {
        points.push(Point::new(m + jitter(rng), y));
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Jittered brown border at the margin plus a clean hairline just inside it.
pub fn draw_weathered_frame<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    rng: &mut R,
) {
    let size = canvas.size();
    let points = frame_points(size, rng);
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(FRAME_BROWN, FRAME_STROKE))
        .draw(canvas)
        .ok();

    let inset = FRAME_MARGIN + FRAME_INSET;
    let inner_w = size.width.saturating_sub(2 * inset as u32);
    let inner_h = size.height.saturating_sub(2 * inset as u32);
    Rectangle::new(Point::new(inset, inset), Size::new(inner_w, inner_h))
        .into_styled(INK_HAIRLINE)
        .draw(canvas)
        .ok();
}

// =============================================================================
// Screws
// =============================================================================

/// Brass screw head with a horizontal slot.
pub fn draw_screw(
    canvas: &mut Canvas,
    center: Point,
) {
    Circle::with_center(center, SCREW_RADIUS * 2)
        .into_styled(SCREW_HEAD)
        .draw(canvas)
        .ok();
    Line::new(center - Point::new(2, 0), center + Point::new(2, 0))
        .into_styled(INK_HAIRLINE)
        .draw(canvas)
        .ok();
}

/// Screw positions, `margin + 10` in from each corner.
pub fn corner_screws(size: Size) -> [Point; 4] {
    let near = FRAME_MARGIN + SCREW_OFFSET;
    let far_x = size.width as i32 - near;
    let far_y = size.height as i32 - near;
    [
        Point::new(near, near),
        Point::new(far_x, near),
        Point::new(near, far_y),
        Point::new(far_x, far_y),
    ]
}

pub fn draw_corner_screws(canvas: &mut Canvas) {
    for center in corner_screws(canvas.size()) {
        draw_screw(canvas, center);
    }
}

// =============================================================================
// Placeholder
// =============================================================================

/// Placeholder glyph drawn in place of a missing icon: a ring with a cross.
///
/// Laid out on a 24-unit box scaled to `size`, painted at 50% opacity.
pub fn draw_placeholder(
    canvas: &mut Canvas,
    origin: Point,
    size: u32,
) {
    let scale = size as f32 / 24.0;
    let at = |x: f32, y: f32| origin + Point::new(round_px(x * scale), round_px(y * scale));
    let stroke = round_px(2.0 * scale).max(1) as u32;
    let style = PrimitiveStyle::with_stroke(PLACEHOLDER, stroke);
    let mut layer = canvas.alpha(0.5);

    Circle::with_center(at(12.0, 12.0), round_px(20.0 * scale).max(1) as u32)
        .into_styled(style)
        .draw(&mut layer)
        .ok();
    Line::new(at(15.0, 9.0), at(9.0, 15.0))
        .into_styled(style)
        .draw(&mut layer)
        .ok();
    Line::new(at(9.0, 9.0), at(15.0, 15.0))
        .into_styled(style)
        .draw(&mut layer)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_paper_stays_close_to_paper_color() {
        let mut canvas = Canvas::new(Size::new(400, 350));
        draw_paper(&mut canvas, &mut StdRng::seed_from_u64(7));

        // Specks only darken, and may stack on the same pixel
        assert!(canvas.pixels().iter().all(|c| c.r() <= PAPER.r()));

        let darkening: u64 = canvas.pixels().iter().map(|c| u64::from(PAPER.r() - c.r())).sum();
        let mean = darkening as f64 / canvas.pixels().len() as f64;
        assert!(mean > 0.0, "Paper should carry some texture");
        assert!(mean <= 1.0, "Mean darkening {mean} is too strong for a faint texture");
    }

    #[test]
    fn test_frame_is_closed_and_near_margin() {
        let size = Size::new(400, 350);
        let points = frame_points(size, &mut StdRng::seed_from_u64(1));
        assert_eq!(points.first(), points.last(), "Frame polyline must close");
        for p in &points {
            let near_x = (p.x - 15).abs() <= 1 || (p.x - 385).abs() <= 1;
            let near_y = (p.y - 15).abs() <= 1 || (p.y - 335).abs() <= 1;
            assert!(near_x || near_y, "Vertex {p:?} strays from the frame");
        }
    }

    #[test]
    fn test_frame_draws_brown() {
        let mut canvas = Canvas::new(Size::new(400, 350));
        draw_weathered_frame(&mut canvas, &mut StdRng::seed_from_u64(2));
        assert_eq!(canvas.pixel(Point::new(200, 15)), Some(FRAME_BROWN));
    }

    #[test]
    fn test_corner_screws() {
        let screws = corner_screws(Size::new(400, 350));
        assert_eq!(screws[0], Point::new(25, 25));
        assert_eq!(screws[3], Point::new(375, 325));
    }

    #[test]
    fn test_screw_has_slot() {
        let mut canvas = Canvas::new(Size::new(20, 20));
        canvas.clear(PAPER).ok();
        draw_screw(&mut canvas, Point::new(10, 10));
        assert_eq!(canvas.pixel(Point::new(10, 10)), Some(vintage_common::INK));
    }

    #[test]
    fn test_placeholder_is_translucent() {
        let mut canvas = Canvas::new(Size::new(32, 32));
        canvas.clear(Rgb888::WHITE).ok();
        draw_placeholder(&mut canvas, Point::zero(), 32);
        let touched: Vec<_> = canvas.pixels().iter().filter(|&&c| c != Rgb888::WHITE).collect();
        assert!(!touched.is_empty(), "Placeholder should draw something");
        assert!(touched.iter().all(|c| **c != PLACEHOLDER), "Placeholder must be blended, not opaque");
    }
}
