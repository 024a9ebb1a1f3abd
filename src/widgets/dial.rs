//! Vintage dial gauge renderer.
//!
//! [`render_dial`] repaints the whole canvas from a [`DialState`]. It keeps no
//! state of its own; the only input besides the state is the RNG that drives
//! the paper texture and the frame jitter.
//!
//! # Draw Order
//!
//! ```text
//!  1. paper + specks           6. ticks, number plates, icon discs
//!  2. jittered frame           7. corner screws
//!  3. face + weathered rim     8. pointer shadow, pointer
//!  4. title + underline        9. center cap
//!  5. brass scale arc         10. label box
//! ```
//!
//! # Half-Disc Shapes
//!
//! The face, rim and scale arc only cover the upper half of the dial. They are
//! drawn as full circles through a draw target clipped to the rows above the
//! center, which avoids depending on the arc start/sweep conventions.

use std::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, Triangle};
use embedded_graphics::text::Text;
use rand::Rng;
use tracing::debug;
use vintage_common::geometry::{diameter, round_px};
use vintage_common::level::scale_angle;
use vintage_common::{
    ARC_STROKE, BRASS_DARK, BRASS_LIGHT, CAP_RADIUS, CAP_SCREW_RADIUS, DialGeometry, FACE_APRON, FACE_EDGE,
    FACE_OVERHANG, FRAME_MARGIN, ICON_DISC_RADIUS, ICON_INSET, INK, IconSet, LABEL_BOX_GAP, LABEL_BOX_HEIGHT,
    LABEL_BOX_WIDTH, Level, NUMBER_PLATE_RADIUS, POINTER_SHADOW, POINTER_SHADOW_OFFSET, RIM_OVERHANG, RIM_STROKE,
    TICK_STROKE, TITLE_RISE_RATIO, TITLE_RULE_GAP, TITLE_RULE_HALF, WEATHERED_RIM,
};

use super::primitives::{draw_corner_screws, draw_paper, draw_weathered_frame};
use crate::canvas::Canvas;
use crate::gradient::{BRASS_ARC_STOPS, CAP_STOPS, FACE_STOPS, ICON_DISC_STOPS, LinearGradient, RadialGradient};
use crate::state::DialState;
use crate::styles::{
    BRASS_PLATE, CENTERED, CENTERED_MIDDLE, DIAL_TITLE_STYLE, ICON_GLYPH_STYLE, INK_HAIRLINE, LEVEL_LABEL_STYLE,
    SCALE_NUMBER_STYLE,
};

/// Opacity of the weathered ring around the face.
const RIM_ALPHA: f32 = 0.5;

/// Opacity of the pointer's drop shadow.
const SHADOW_ALPHA: f32 = 0.3;

/// Outline width of the icon discs.
const ICON_DISC_STROKE: u32 = 2;

/// Repaint `canvas` with the dial described by `state`.
pub fn render_dial<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    state: &DialState,
    rng: &mut R,
) {
    let geo = DialGeometry::new(canvas.size());

    draw_paper(canvas, rng);
    draw_weathered_frame(canvas, rng);
    draw_face(canvas, &geo);
    draw_title(canvas, &geo, &state.title);
    draw_scale_arc(canvas, &geo);
    draw_scale(canvas, &geo, state.icons.committed());
    draw_corner_screws(canvas);
    draw_pointer(canvas, &geo, state.level);
    draw_center_cap(canvas, &geo);
    draw_label_box(canvas, state);

    debug!(level = state.level.get(), title = %state.title, "dial rendered");
}

/// Rows strictly above the dial center.
fn upper_half(
    size: Size,
    center: Point,
) -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(size.width, center.y.max(0) as u32))
}

// =============================================================================
// Face
// =============================================================================

/// Half-disc face with its apron, then the weathered ring just inside its edge.
fn draw_face(
    canvas: &mut Canvas,
    geo: &DialGeometry,
) {
    let center = geo.center();
    let above = upper_half(canvas.size(), center);
    let face_radius = geo.radius() + FACE_OVERHANG;
    let gradient = RadialGradient::new(geo.center_f32(), face_radius, &FACE_STOPS);
    let fill = PrimitiveStyle::with_fill(FACE_EDGE);

    Circle::with_center(center, diameter(face_radius))
        .into_styled(fill)
        .draw(&mut canvas.gradient(&gradient).clipped(&above))
        .ok();
    Rectangle::new(
        Point::new(center.x - round_px(face_radius), center.y),
        Size::new(diameter(face_radius), FACE_APRON as u32),
    )
    .into_styled(fill)
    .draw(&mut canvas.gradient(&gradient))
    .ok();

    Circle::with_center(center, diameter(geo.radius() + RIM_OVERHANG))
        .into_styled(PrimitiveStyle::with_stroke(WEATHERED_RIM, RIM_STROKE))
        .draw(&mut canvas.alpha(RIM_ALPHA).clipped(&above))
        .ok();
}

// =============================================================================
// Title
// =============================================================================

fn draw_title(
    canvas: &mut Canvas,
    geo: &DialGeometry,
    title: &str,
) {
    let (_, cy) = geo.center_f32();
    let x = geo.center().x;
    let y = round_px(cy - geo.radius() * TITLE_RISE_RATIO);

    Text::with_text_style(title, Point::new(x, y), DIAL_TITLE_STYLE, CENTERED)
        .draw(canvas)
        .ok();
    let rule_y = y + TITLE_RULE_GAP;
    Line::new(Point::new(x - TITLE_RULE_HALF, rule_y), Point::new(x + TITLE_RULE_HALF, rule_y))
        .into_styled(INK_HAIRLINE)
        .draw(canvas)
        .ok();
}

// =============================================================================
// Scale
// =============================================================================

/// Brass arc along the dial radius, darkest at both ends.
fn draw_scale_arc(
    canvas: &mut Canvas,
    geo: &DialGeometry,
) {
    let center = geo.center();
    let above = upper_half(canvas.size(), center);
    let (cx, cy) = geo.center_f32();
    let r = geo.radius();
    let gradient = LinearGradient::new((cx - r, cy), (cx + r, cy), &BRASS_ARC_STOPS);

    Circle::with_center(center, diameter(r))
        .into_styled(PrimitiveStyle::with_stroke(BRASS_DARK, ARC_STROKE))
        .draw(&mut canvas.gradient(&gradient).clipped(&above))
        .ok();
}

/// Tick, numbered plate and icon disc for each of the five scale positions.
fn draw_scale(
    canvas: &mut Canvas,
    geo: &DialGeometry,
    icons: &IconSet,
) {
    let tick_style = PrimitiveStyle::with_stroke(INK, TICK_STROKE);
    let disc_outline = PrimitiveStyle::with_stroke(INK, ICON_DISC_STROKE);
    let disc_fill = PrimitiveStyle::with_fill(BRASS_LIGHT);

    for index in 0..Level::COUNT {
        let (outer, inner) = geo.tick(index);
        Line::new(outer, inner).into_styled(tick_style).draw(canvas).ok();

        let plate = geo.number_center(index);
        Circle::with_center(plate, NUMBER_PLATE_RADIUS * 2)
            .into_styled(BRASS_PLATE)
            .draw(canvas)
            .ok();
        let mut number: heapless::String<4> = heapless::String::new();
        write!(number, "{}", index + 1).ok();
        Text::with_text_style(&number, plate, SCALE_NUMBER_STYLE, CENTERED_MIDDLE)
            .draw(canvas)
            .ok();

        let disc = geo.scale_point(index, ICON_INSET);
        let disc_center = geo.polar_f32(geo.radius() - ICON_INSET, scale_angle(index));
        let gradient = RadialGradient::new(disc_center, ICON_DISC_RADIUS as f32, &ICON_DISC_STOPS);
        let shape = Circle::with_center(disc, ICON_DISC_RADIUS * 2);
        shape.into_styled(disc_fill).draw(&mut canvas.gradient(&gradient)).ok();
        shape.into_styled(disc_outline).draw(canvas).ok();

        if let Some(glyph) = icons.glyph(index) {
            Text::with_text_style(glyph, disc, ICON_GLYPH_STYLE, CENTERED_MIDDLE)
                .draw(canvas)
                .ok();
        }
    }
}

// =============================================================================
// Pointer
// =============================================================================

/// Pointer triangle in the level color over a translucent drop shadow.
fn draw_pointer(
    canvas: &mut Canvas,
    geo: &DialGeometry,
    level: Level,
) {
    let [a, tip, b] = geo.pointer(level);
    let offset = Point::new(POINTER_SHADOW_OFFSET, POINTER_SHADOW_OFFSET);

    Triangle::new(a + offset, tip + offset, b + offset)
        .into_styled(PrimitiveStyle::with_fill(POINTER_SHADOW))
        .draw(&mut canvas.alpha(SHADOW_ALPHA))
        .ok();

    let style = PrimitiveStyleBuilder::new()
        .fill_color(level.color())
        .stroke_color(INK)
        .stroke_width(1)
        .build();
    Triangle::new(a, tip, b).into_styled(style).draw(canvas).ok();
}

/// Brass cap over the pivot with a dark screw and a light slot.
fn draw_center_cap(
    canvas: &mut Canvas,
    geo: &DialGeometry,
) {
    let center = geo.center();
    let gradient = RadialGradient::new(geo.center_f32(), CAP_RADIUS as f32, &CAP_STOPS);

    Circle::with_center(center, CAP_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(BRASS_LIGHT))
        .draw(&mut canvas.gradient(&gradient))
        .ok();
    Circle::with_center(center, CAP_SCREW_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(INK))
        .draw(canvas)
        .ok();
    Line::new(center - Point::new(3, 0), center + Point::new(3, 0))
        .into_styled(PrimitiveStyle::with_stroke(BRASS_LIGHT, 1))
        .draw(canvas)
        .ok();
}

// =============================================================================
// Label Box
// =============================================================================

/// Top edge of the label box for a canvas of `height` pixels.
#[inline]
fn label_box_top(height: u32) -> i32 { height as i32 - FRAME_MARGIN - LABEL_BOX_HEIGHT as i32 - LABEL_BOX_GAP }

/// Brass box near the bottom edge naming the level and its icon.
fn draw_label_box(
    canvas: &mut Canvas,
    state: &DialState,
) {
    let x = canvas.width() as i32 / 2;
    let top = label_box_top(canvas.height());

    Rectangle::new(
        Point::new(x - LABEL_BOX_WIDTH as i32 / 2, top),
        Size::new(LABEL_BOX_WIDTH, LABEL_BOX_HEIGHT),
    )
    .into_styled(BRASS_PLATE)
    .draw(canvas)
    .ok();

    let label = state.label_text();
    Text::with_text_style(
        &label,
        Point::new(x, top + LABEL_BOX_HEIGHT as i32 / 2),
        LEVEL_LABEL_STYLE,
        CENTERED_MIDDLE,
    )
    .draw(canvas)
    .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use vintage_common::{DIAL_HEIGHT, DIAL_WIDTH, LABEL_BOX_Y, PAPER};

    use super::*;

    fn render(state: &DialState) -> Canvas {
        let mut canvas = Canvas::new(Size::new(DIAL_WIDTH, DIAL_HEIGHT));
        render_dial(&mut canvas, state, &mut StdRng::seed_from_u64(42));
        canvas
    }

    fn close_to(
        actual: Rgb888,
        expected: Rgb888,
        tolerance: u8,
    ) -> bool {
        actual.r().abs_diff(expected.r()) <= tolerance
            && actual.g().abs_diff(expected.g()) <= tolerance
            && actual.b().abs_diff(expected.b()) <= tolerance
    }

    // -------------------------------------------------------------------------
    // Composition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_background_is_paper() {
        let canvas = render(&DialState::default());
        let corner = canvas.pixel(Point::new(40, 300)).unwrap();
        assert!(close_to(corner, PAPER, 16), "Background should be aged paper, got {corner:?}");
    }

    #[test]
    fn test_pointer_uses_level_color() {
        let geo = DialGeometry::standard();
        for level in Level::all() {
            let mut state = DialState::default();
            state.level = level;
            let canvas = render(&state);
            let probe = geo.polar(40.0, level.pointer_angle());
            assert_eq!(
                canvas.pixel(probe),
                Some(level.color()),
                "Pointer body for level {level} should use palette entry {}",
                level.index()
            );
        }
    }

    #[test]
    fn test_label_box_is_brass() {
        let canvas = render(&DialState::default());
        let top = label_box_top(DIAL_HEIGHT);
        assert_eq!(top, LABEL_BOX_Y);
        assert_eq!(canvas.pixel(Point::new(200 - 75, top + 3)), Some(BRASS_LIGHT));
        assert_eq!(canvas.pixel(Point::new(200 - 80, top)), Some(INK), "Label box outline");
    }

    #[test]
    fn test_center_screw_is_dark() {
        let canvas = render(&DialState::default());
        let center = DialGeometry::standard().center();
        assert_eq!(canvas.pixel(center + Point::new(0, 2)), Some(INK));
    }

    #[test]
    fn test_face_is_only_above_apron() {
        let canvas = render(&DialState::default());
        // Directly below the apron the paper shows again
        let below = canvas.pixel(Point::new(100, 158 + FACE_APRON + 5)).unwrap();
        assert!(close_to(below, PAPER, 16), "Below the apron should be paper, got {below:?}");
        // Inside the apron the face tint replaces paper
        let face = canvas.pixel(Point::new(120, 185)).unwrap();
        assert!(!close_to(face, PAPER, 4), "Face tint expected, got {face:?}");
    }

    // -------------------------------------------------------------------------
    // Determinism Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_same_seed_same_pixels() {
        let state = DialState::default();
        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn test_level_change_changes_pixels() {
        let low = render(&DialState::default());
        let mut state = DialState::default();
        state.level = Level::MAX;
        assert_ne!(low, render(&state));
    }

    #[test]
    fn test_committed_icons_are_rendered() {
        let base = render(&DialState::default());
        let mut state = DialState::default();
        state.icons.edit(4, "ZZ");
        assert_eq!(base, render(&state), "Draft edits must not reach the dial");
        state.icons.commit();
        assert_ne!(base, render(&state));
    }
}
