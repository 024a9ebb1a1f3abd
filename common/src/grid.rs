//! Icon grid layout and slot counter.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────┐
//! │          Resource Counter      │  padding + header
//! │  ┌──┬──┬──┬──┬──┐              │
//! │  │##│##│##│  │  │              │  rows = ceil(max_count / 5)
//! │  ├──┼──┼──┼──┼──┤              │  cell = icon_size + 16
//! │  │  │  │  │  │  │              │
//! │  └──┴──┴──┴──┴──┘              │
//! │         3 of 10 units          │  padding + footer
//! └────────────────────────────────┘
//! ```
//!
//! Slots fill in reading order; slot `i` is active when `i < count`.

use embedded_graphics::prelude::{Point, Size};

use crate::config::{GRID_CELL_PADDING, GRID_COLUMNS, GRID_FOOTER, GRID_HEADER, GRID_PADDING};

// =============================================================================
// Layout
// =============================================================================

/// Geometry of the icon grid for a given slot count and icon size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridLayout {
    max_count: u32,
    icon_size: u32,
}

impl GridLayout {
    /// Layout for `max_count` slots holding `icon_size` pixel icons.
    pub const fn new(
        max_count: u32,
        icon_size: u32,
    ) -> Self {
        Self { max_count, icon_size }
    }

    /// Total number of slots.
    #[inline]
    pub const fn max_count(&self) -> u32 { self.max_count }

    /// Icon edge length in pixels.
    #[inline]
    pub const fn icon_size(&self) -> u32 { self.icon_size }

    /// Number of columns (always five).
    #[inline]
    pub const fn columns(&self) -> u32 { GRID_COLUMNS }

    /// Number of rows: `ceil(max_count / 5)`.
    #[inline]
    pub const fn rows(&self) -> u32 { self.max_count.div_ceil(GRID_COLUMNS) }

    /// Edge length of a cell: icon plus 16px padding.
    #[inline]
    pub const fn cell_size(&self) -> u32 { self.icon_size.saturating_add(GRID_CELL_PADDING) }

    /// Canvas size needed to draw the grid with title and footer.
    ///
    /// Saturates instead of overflowing; callers bound the inputs with
    /// [`MAX_ICON_SIZE`](crate::config::MAX_ICON_SIZE) and
    /// [`MAX_GRID_SLOTS`](crate::config::MAX_GRID_SLOTS).
    pub const fn canvas_size(&self) -> Size {
        let cell = self.cell_size();
        Size::new(
            self.columns().saturating_mul(cell).saturating_add(GRID_PADDING * 2),
            self.rows()
                .saturating_mul(cell)
                .saturating_add(GRID_PADDING * 2 + GRID_HEADER + GRID_FOOTER),
        )
    }

    /// Top-left corner of slot `index`.
    pub const fn cell_origin(
        &self,
        index: u32,
    ) -> Point {
        let cell = self.cell_size();
        let col = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;
        Point::new(
            (GRID_PADDING + col * cell) as i32,
            (GRID_PADDING + GRID_HEADER + row * cell) as i32,
        )
    }

    /// Top-left corner of the icon inside slot `index` (centered in the cell).
    pub const fn icon_origin(
        &self,
        index: u32,
    ) -> Point {
        let inset = ((self.cell_size() - self.icon_size) / 2) as i32;
        let origin = self.cell_origin(index);
        Point::new(origin.x + inset, origin.y + inset)
    }
}

// =============================================================================
// Counter
// =============================================================================

/// Number of active slots, kept within `0..=max_count`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Counter {
    count: u32,
    max_count: u32,
}

impl Counter {
    /// Counter starting at `count`, clamped to `max_count`.
    pub const fn new(
        count: u32,
        max_count: u32,
    ) -> Self {
        let count = if count > max_count { max_count } else { count };
        Self { count, max_count }
    }

    /// Current number of active slots.
    #[inline]
    pub const fn count(&self) -> u32 { self.count }

    /// Upper bound of the count.
    #[inline]
    pub const fn max_count(&self) -> u32 { self.max_count }

    /// Add one slot. No-op at `max_count`; returns whether the count changed.
    pub const fn increment(&mut self) -> bool {
        if self.count < self.max_count {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Remove one slot. No-op at zero; returns whether the count changed.
    pub const fn decrement(&mut self) -> bool {
        if self.count > 0 {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `count` (slider input), clamped to `max_count`.
    pub const fn set(
        &mut self,
        count: u32,
    ) -> bool {
        let clamped = if count > self.max_count { self.max_count } else { count };
        let changed = clamped != self.count;
        self.count = clamped;
        changed
    }

    /// Whether slot `index` holds an icon.
    #[inline]
    pub const fn is_active(
        &self,
        index: u32,
    ) -> bool {
        index < self.count
    }

    /// Number of active slots among the first `max_count`.
    pub fn active_slots(&self) -> usize { (0..self.max_count).filter(|&i| self.is_active(i)).count() }

    /// Unit noun for the footer: singular only for exactly one.
    #[inline]
    pub const fn unit_noun(&self) -> &'static str { if self.count == 1 { "unit" } else { "units" } }
}
