//! Widgets: state, canvas and re-render tracking in one place.
//!
//! Each widget owns its state and a [`Canvas`]. Every mutator marks the widget
//! dirty; [`DialWidget::frame`] / [`GridWidget::frame`] repaint the whole canvas
//! only when something changed since the last frame.
//!
//! # Update Strategy
//!
//! | Event                          | Dial          | Grid          |
//! |--------------------------------|---------------|---------------|
//! | First frame                    | full repaint  | full repaint  |
//! | Level / count change           | full repaint  | full repaint  |
//! | Title change                   | full repaint  | full repaint  |
//! | Icon draft edit                | no repaint    | n/a           |
//! | Icon commit / reset            | full repaint  | n/a           |
//! | Icon asset swap                | n/a           | full repaint  |
//! | Mutator that changes nothing   | no repaint    | no repaint    |
//!
//! Draft icon edits do not reach the dial until committed, so they never
//! schedule a repaint on their own.

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Size;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use vintage_common::{DIAL_HEIGHT, DIAL_WIDTH, Level};

use crate::asset::IconAsset;
use crate::canvas::Canvas;
use crate::export::{ExportHandle, ExportService};
use crate::state::{DialState, GridState};
use crate::widgets::{render_dial, render_grid};

// =============================================================================
// Render Tracking
// =============================================================================

/// Dirty flag plus a repaint counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderState {
    /// Whether state changed since the last repaint.
    dirty: bool,

    /// Number of repaints so far.
    renders: u32,
}

impl RenderState {
    /// New tracker; the first frame always repaints.
    pub const fn new() -> Self { Self { dirty: true, renders: 0 } }

    #[inline]
    pub const fn mark_dirty(&mut self) { self.dirty = true; }

    /// Mark dirty only if `changed`, passing `changed` through.
    #[inline]
    pub const fn mark_if(
        &mut self,
        changed: bool,
    ) -> bool {
        if changed {
            self.dirty = true;
        }
        changed
    }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Record a completed repaint.
    #[inline]
    pub const fn mark_rendered(&mut self) {
        self.dirty = false;
        self.renders += 1;
    }

    #[inline]
    pub const fn renders(&self) -> u32 { self.renders }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Dial Widget
// =============================================================================

/// Vintage dial gauge with its own canvas and paper-texture RNG.
pub struct DialWidget {
    state: DialState,
    canvas: Canvas,
    render: RenderState,
    rng: StdRng,
}

impl DialWidget {
    /// Widget with an entropy-seeded texture.
    pub fn new(state: DialState) -> Self { Self::with_rng(state, StdRng::from_entropy()) }

    /// Widget whose paper texture and frame jitter are reproducible.
    pub fn with_seed(
        state: DialState,
        seed: u64,
    ) -> Self {
        Self::with_rng(state, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        state: DialState,
        rng: StdRng,
    ) -> Self {
        Self {
            state,
            canvas: Canvas::new(Size::new(DIAL_WIDTH, DIAL_HEIGHT)),
            render: RenderState::new(),
            rng,
        }
    }

    #[inline]
    pub const fn state(&self) -> &DialState { &self.state }

    #[inline]
    pub const fn canvas(&self) -> &Canvas { &self.canvas }

    #[inline]
    pub const fn render_state(&self) -> &RenderState { &self.render }

    pub fn set_level(
        &mut self,
        level: Level,
    ) {
        let changed = self.state.level != level;
        self.state.level = level;
        self.render.mark_if(changed);
    }

    pub fn level_up(&mut self) { self.set_level(self.state.level.up()); }

    pub fn level_down(&mut self) { self.set_level(self.state.level.down()); }

    pub fn set_title(
        &mut self,
        title: impl Into<String>,
    ) {
        let title = title.into();
        if self.state.title != title {
            self.state.title = title;
            self.render.mark_dirty();
        }
    }

    /// Edit a draft icon. The dial keeps showing the committed set.
    pub fn edit_icon(
        &mut self,
        index: usize,
        text: &str,
    ) -> bool {
        self.state.icons.edit(index, text)
    }

    /// Commit the draft icons to the dial.
    pub fn apply_icons(&mut self) {
        let changed = self.state.icons.commit();
        self.render.mark_if(changed);
    }

    /// Restore the default icons in both draft and committed sets.
    pub fn reset_icons(&mut self) {
        self.state.icons.reset();
        self.render.mark_dirty();
    }

    /// Repaint if dirty. Returns whether a repaint happened.
    pub fn frame(&mut self) -> bool {
        if !self.render.is_dirty() {
            return false;
        }
        render_dial(&mut self.canvas, &self.state, &mut self.rng);
        self.render.mark_rendered();
        true
    }

    /// Bring the canvas up to date and export it as `{slug}-level-{n}.png`.
    pub fn save(
        &mut self,
        exporter: &ExportService,
    ) -> ExportHandle {
        self.frame();
        exporter.export(&self.canvas, self.state.file_name())
    }
}

// =============================================================================
// Grid Widget
// =============================================================================

/// Icon copier grid with its own canvas and optional icon asset.
pub struct GridWidget {
    state: GridState,
    icon: Option<IconAsset>,
    canvas: Canvas,
    render: RenderState,
}

impl GridWidget {
    pub fn new(
        state: GridState,
        icon: Option<IconAsset>,
    ) -> Self {
        let canvas = Canvas::new(state.layout().canvas_size());
        Self {
            state,
            icon,
            canvas,
            render: RenderState::new(),
        }
    }

    #[inline]
    pub const fn state(&self) -> &GridState { &self.state }

    #[inline]
    pub const fn canvas(&self) -> &Canvas { &self.canvas }

    #[inline]
    pub const fn render_state(&self) -> &RenderState { &self.render }

    #[inline]
    pub const fn icon(&self) -> Option<&IconAsset> { self.icon.as_ref() }

    pub fn increment(&mut self) -> bool {
        let changed = self.state.counter_mut().increment();
        self.render.mark_if(changed)
    }

    pub fn decrement(&mut self) -> bool {
        let changed = self.state.counter_mut().decrement();
        self.render.mark_if(changed)
    }

    pub fn set_count(
        &mut self,
        count: u32,
    ) -> bool {
        let changed = self.state.counter_mut().set(count);
        self.render.mark_if(changed)
    }

    pub fn set_title(
        &mut self,
        title: impl Into<String>,
    ) {
        let title = title.into();
        if self.state.title != title {
            self.state.title = title;
            self.render.mark_dirty();
        }
    }

    pub fn set_empty_slot_color(
        &mut self,
        color: Rgb888,
    ) {
        if self.state.empty_slot_color != color {
            self.state.empty_slot_color = color;
            self.render.mark_dirty();
        }
    }

    /// Replace the icon asset; `None` switches active slots to placeholders.
    pub fn set_icon(
        &mut self,
        icon: Option<IconAsset>,
    ) {
        self.icon = icon;
        self.render.mark_dirty();
    }

    /// Load the icon from `path` at the layout's icon size.
    ///
    /// A missing or broken file is logged and leaves placeholders in place.
    pub fn load_icon(
        &mut self,
        path: &Path,
    ) -> bool {
        let icon = IconAsset::load_or_placeholder(path, self.state.layout().icon_size());
        let loaded = icon.is_some();
        self.set_icon(icon);
        loaded
    }

    /// Repaint if dirty. Returns whether a repaint happened.
    pub fn frame(&mut self) -> bool {
        if !self.render.is_dirty() {
            return false;
        }
        render_grid(&mut self.canvas, &self.state, self.icon.as_ref());
        self.render.mark_rendered();
        debug!(renders = self.render.renders(), "grid frame");
        true
    }

    /// Bring the canvas up to date and export it as `{slug}-{count}.png`.
    pub fn save(
        &mut self,
        exporter: &ExportService,
    ) -> ExportHandle {
        self.frame();
        exporter.export(&self.canvas, self.state.file_name())
    }
}
