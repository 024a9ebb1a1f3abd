//! Widget state: everything a renderer needs to produce one frame.
//!
//! - [`DialState`]: title, level and the draft/committed icon set of the gauge.
//! - [`GridState`]: title, slot counter, layout and empty-slot color of the grid.
//!
//! Both states are plain data. Renderers read them; widgets own and mutate them.

use std::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use vintage_common::{
    Counter, DEFAULT_ICON_SIZE, DEFAULT_MAX_COUNT, EMPTY_SLOT, GridLayout, IconEditor, IconSet, Level,
};

use crate::export::{dial_filename, grid_filename};

/// Default dial title.
pub const DEFAULT_DIAL_TITLE: &str = "Threat Level";

/// Default grid title.
pub const DEFAULT_GRID_TITLE: &str = "Resource Counter";

// =============================================================================
// Dial
// =============================================================================

/// State of the vintage dial gauge.
#[derive(Clone, PartialEq, Debug)]
pub struct DialState {
    pub title: String,
    pub level: Level,
    pub icons: IconEditor,
}

impl DialState {
    pub fn new(
        title: impl Into<String>,
        level: Level,
        icons: IconSet,
    ) -> Self {
        Self {
            title: title.into(),
            level,
            icons: IconEditor::with_icons(icons),
        }
    }

    /// Glyph of the current level from the committed icon set.
    pub fn current_icon(&self) -> &str { self.icons.committed().get(self.level) }

    /// Text of the label box: level label, a space, then the level's icon.
    pub fn label_text(&self) -> heapless::String<32> {
        let mut text = heapless::String::new();
        write!(text, "{} {}", self.level.label(), self.current_icon()).ok();
        text
    }

    /// Export file name for the current title and level.
    pub fn file_name(&self) -> String { dial_filename(&self.title, self.level) }
}

impl Default for DialState {
    fn default() -> Self { Self::new(DEFAULT_DIAL_TITLE, Level::MIN, IconSet::default()) }
}

// =============================================================================
// Grid
// =============================================================================

/// State of the icon copier grid.
///
/// The counter and layout always agree on `max_count`; both are fixed at
/// construction and exposed read-only apart from the count itself.
#[derive(Clone, PartialEq, Debug)]
pub struct GridState {
    pub title: String,
    pub empty_slot_color: Rgb888,
    counter: Counter,
    layout: GridLayout,
}

impl GridState {
    pub fn new(
        title: impl Into<String>,
        count: u32,
        max_count: u32,
        icon_size: u32,
    ) -> Self {
        Self {
            title: title.into(),
            empty_slot_color: EMPTY_SLOT,
            counter: Counter::new(count, max_count),
            layout: GridLayout::new(max_count, icon_size),
        }
    }

    #[inline]
    pub const fn counter(&self) -> &Counter { &self.counter }

    #[inline]
    pub const fn counter_mut(&mut self) -> &mut Counter { &mut self.counter }

    #[inline]
    pub const fn layout(&self) -> &GridLayout { &self.layout }

    /// Footer line, e.g. `"3 of 15 units"`.
    pub fn footer_text(&self) -> heapless::String<48> {
        let mut text = heapless::String::new();
        write!(
            text,
            "{} of {} {}",
            self.counter.count(),
            self.counter.max_count(),
            self.counter.unit_noun()
        )
        .ok();
        text
    }

    /// Export file name for the current title and count.
    pub fn file_name(&self) -> String { grid_filename(&self.title, self.counter.count()) }
}

impl Default for GridState {
    fn default() -> Self { Self::new(DEFAULT_GRID_TITLE, 0, DEFAULT_MAX_COUNT, DEFAULT_ICON_SIZE) }
}
