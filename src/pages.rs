//! Which widget the preview window is showing.
//!
//! The preview has a single display, so only one widget is visible at a time.
//! `A`/`B` act on the visible widget; `Y` flips to the other one. Saving always
//! exports the visible widget, under that widget's own file name.

/// Widget shown in the preview window.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Vintage dial; stepping changes the level.
    #[default]
    Dial,

    /// Icon grid; stepping changes the count.
    Grid,
}

impl Page {
    /// Every page, in switching order.
    pub const ALL: [Self; 2] = [Self::Dial, Self::Grid];

    /// The page `Y` switches to.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dial => Self::Grid,
            Self::Grid => Self::Dial,
        }
    }

    /// Short name for log lines.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dial => "dial",
            Self::Grid => "grid",
        }
    }

    /// The quantity `A`/`B` step on this page.
    #[inline]
    pub const fn stepped(self) -> &'static str {
        match self {
            Self::Dial => "level",
            Self::Grid => "count",
        }
    }
}
