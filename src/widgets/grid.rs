//! Icon copier grid renderer.
//!
//! [`render_grid`] resizes the canvas to the grid's layout and repaints it:
//! title, one cell per slot (white with an icon when active, the empty-slot
//! color otherwise) and a `"N of M units"` footer. Active slots without an icon
//! asset get a translucent placeholder glyph.

use std::borrow::Cow;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use tracing::debug;
use vintage_common::{GRID_FOOTER, GRID_PADDING, SLOT_BORDER, WHITE};

use super::primitives::draw_placeholder;
use crate::asset::IconAsset;
use crate::canvas::Canvas;
use crate::state::GridState;
use crate::styles::{CENTERED, CENTERED_MIDDLE, GRID_FOOTER_STYLE, GRID_TITLE_STYLE};

/// Title baseline below the top padding.
const TITLE_OFFSET: i32 = 20;

/// Repaint `canvas` with the grid described by `state`.
pub fn render_grid(
    canvas: &mut Canvas,
    state: &GridState,
    icon: Option<&IconAsset>,
) {
    let layout = state.layout();
    let counter = state.counter();
    canvas.resize(layout.canvas_size());
    canvas.clear(WHITE).ok();

    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    Text::with_text_style(
        &state.title,
        Point::new(width / 2, GRID_PADDING as i32 + TITLE_OFFSET),
        GRID_TITLE_STYLE,
        CENTERED,
    )
    .draw(canvas)
    .ok();

    // Assets loaded at another size are scaled once per render, not per slot
    let icon = icon.map(|asset| {
        if asset.size() == layout.icon_size() {
            Cow::Borrowed(asset)
        } else {
            Cow::Owned(asset.resized(layout.icon_size()))
        }
    });

    let cell = Size::new(layout.cell_size(), layout.cell_size());
    for index in 0..layout.max_count() {
        let active = counter.is_active(index);
        let fill = if active { WHITE } else { state.empty_slot_color };
        let style = PrimitiveStyleBuilder::new()
            .fill_color(fill)
            .stroke_color(SLOT_BORDER)
            .stroke_width(1)
            .build();
        Rectangle::new(layout.cell_origin(index), cell)
            .into_styled(style)
            .draw(canvas)
            .ok();

        if active {
            let origin = layout.icon_origin(index);
            match &icon {
                Some(asset) => asset.draw(canvas, origin),
                None => draw_placeholder(canvas, origin, layout.icon_size()),
            }
        }
    }

    let footer = state.footer_text();
    Text::with_text_style(
        &footer,
        Point::new(width / 2, height - GRID_FOOTER as i32 / 2),
        GRID_FOOTER_STYLE,
        CENTERED_MIDDLE,
    )
    .draw(canvas)
    .ok();

    debug!(count = counter.count(), max = counter.max_count(), "grid rendered");
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use image::{DynamicImage, Rgba, RgbaImage};
    use vintage_common::{EMPTY_SLOT, FOOTER_GRAY};

    use super::*;

    fn render(
        state: &GridState,
        icon: Option<&IconAsset>,
    ) -> Canvas {
        let mut canvas = Canvas::new(Size::new(1, 1));
        render_grid(&mut canvas, state, icon);
        canvas
    }

    fn red_icon(size: u32) -> IconAsset {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba([255, 0, 0, 255])));
        IconAsset::from_image(&image, size)
    }

    #[test]
    fn test_canvas_resized_to_layout() {
        let canvas = render(&GridState::default(), None);
        assert_eq!(canvas.size(), Size::new(280, 254));
    }

    #[test]
    fn test_active_and_empty_slots() {
        let state = GridState::new("Ammo", 3, 15, 32);
        let canvas = render(&state, None);
        let layout = state.layout();

        let active = layout.cell_origin(2) + Point::new(2, 2);
        let empty = layout.cell_origin(3) + Point::new(2, 2);
        assert_eq!(canvas.pixel(active), Some(WHITE));
        assert_eq!(canvas.pixel(empty), Some(EMPTY_SLOT));
        assert_eq!(canvas.pixel(layout.cell_origin(3)), Some(SLOT_BORDER));
    }

    #[test]
    fn test_custom_empty_color() {
        let mut state = GridState::new("Ammo", 0, 5, 32);
        state.empty_slot_color = Rgb888::new(10, 20, 30);
        let canvas = render(&state, None);
        let probe = state.layout().cell_origin(4) + Point::new(5, 5);
        assert_eq!(canvas.pixel(probe), Some(Rgb888::new(10, 20, 30)));
    }

    #[test]
    fn test_icon_drawn_in_active_slots_only() {
        let state = GridState::new("Ammo", 1, 10, 32);
        let icon = red_icon(32);
        let canvas = render(&state, Some(&icon));
        let layout = state.layout();
        let center = Point::new(16, 16);
        assert_eq!(canvas.pixel(layout.icon_origin(0) + center), Some(Rgb888::RED));
        assert_eq!(canvas.pixel(layout.icon_origin(1) + center), Some(EMPTY_SLOT));
    }

    #[test]
    fn test_icon_rescaled_to_layout() {
        let state = GridState::new("Ammo", 1, 5, 24);
        let icon = red_icon(64);
        let canvas = render(&state, Some(&icon));
        let origin = state.layout().icon_origin(0);
        assert_eq!(canvas.pixel(origin + Point::new(23, 23)), Some(Rgb888::RED));
        assert_eq!(canvas.pixel(origin + Point::new(24, 12)), Some(WHITE), "Icon must not spill past its size");
    }

    #[test]
    fn test_missing_icon_draws_placeholder() {
        let state = GridState::new("Ammo", 2, 5, 32);
        let canvas = render(&state, None);
        let layout = state.layout();
        let origin = layout.icon_origin(0);
        let marked = (0..32)
            .flat_map(|y| (0..32).map(move |x| Point::new(x, y)))
            .filter(|&p| canvas.pixel(origin + p) != Some(WHITE))
            .count();
        assert!(marked > 0, "Active slot without an asset shows a placeholder");
    }

    #[test]
    fn test_footer_is_drawn() {
        let canvas = render(&GridState::default(), None);
        let h = canvas.height() as i32;
        let footer_pixels = (h - GRID_FOOTER as i32..h)
            .flat_map(|y| (0..canvas.width() as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| canvas.pixel(p) == Some(FOOTER_GRAY))
            .count();
        assert!(footer_pixels > 0);
    }

    #[test]
    fn test_full_count_fills_every_slot() {
        let state = GridState::new("Ammo", 15, 15, 32);
        let canvas = render(&state, None);
        for index in 0..15 {
            let probe = state.layout().cell_origin(index) + Point::new(2, 2);
            assert_eq!(canvas.pixel(probe), Some(WHITE), "Slot {index} should be active");
        }
    }
}
