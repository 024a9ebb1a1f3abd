//! Per-level icon glyphs.
//!
//! Each dial level shows a short glyph (at most two characters) inside its icon
//! disc and next to the label in the label box.
//!
//! # Draft vs Committed
//!
//! Editing icons is a two-stage operation: edits land in a draft set and only
//! become visible on the dial after an explicit [`IconEditor::commit`]. Both sets
//! are plain fields, so there is no hidden synchronization between them.
//!
//! # Glyph Coverage
//!
//! The renderer draws glyphs with monospaced bitmap fonts, which only cover
//! ASCII. The built-in set is chosen so the default dial renders cleanly;
//! other characters render as the font's replacement glyph.

use heapless::String;

use crate::level::Level;

/// Maximum number of characters in a glyph.
pub const MAX_GLYPH_CHARS: usize = 2;

/// A glyph of at most [`MAX_GLYPH_CHARS`] characters.
///
/// Capacity is in bytes: two 4-byte UTF-8 characters fit.
pub type IconGlyph = String<8>;

/// Built-in icons, from "Very Low" to "Severe".
pub const DEFAULT_ICONS: [&str; Level::COUNT] = ["zz", "!", "!!", "X", "**"];

/// Build a glyph from user text, keeping only the first two characters.
pub fn glyph_from(text: &str) -> IconGlyph {
    let mut glyph = IconGlyph::new();
    for c in text.chars().take(MAX_GLYPH_CHARS) {
        // Two chars never exceed the 8-byte capacity
        let _ = glyph.push(c);
    }
    glyph
}

// =============================================================================
// Icon Set
// =============================================================================

/// Exactly one glyph per dial level.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IconSet {
    glyphs: [IconGlyph; Level::COUNT],
}

impl IconSet {
    /// Build a set from five strings (each truncated to two characters).
    pub fn from_strs(icons: [&str; Level::COUNT]) -> Self {
        Self {
            glyphs: icons.map(glyph_from),
        }
    }

    /// Glyph shown for `level`.
    #[inline]
    pub fn get(
        &self,
        level: Level,
    ) -> &str {
        self.glyphs[level.index()].as_str()
    }

    /// Glyph at a zero-based scale index, `None` past the last level.
    pub fn glyph(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.glyphs.get(index).map(|g| g.as_str())
    }

    /// Replace the glyph at `index`. Returns `false` if the index is out of range.
    pub fn set(
        &mut self,
        index: usize,
        text: &str,
    ) -> bool {
        match self.glyphs.get_mut(index) {
            Some(slot) => {
                *slot = glyph_from(text);
                true
            }
            None => false,
        }
    }

    /// Glyphs in level order.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.glyphs.iter().map(|g| g.as_str()) }
}

impl Default for IconSet {
    fn default() -> Self { Self::from_strs(DEFAULT_ICONS) }
}

// =============================================================================
// Icon Editor
// =============================================================================

/// Draft and committed icon sets with explicit commit/reset.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct IconEditor {
    /// Icons being edited, not yet shown on the dial.
    draft: IconSet,

    /// Icons the dial renders.
    committed: IconSet,
}

impl IconEditor {
    /// Editor whose draft and committed sets both start as `icons`.
    pub fn with_icons(icons: IconSet) -> Self {
        Self {
            draft: icons.clone(),
            committed: icons,
        }
    }

    /// Icons currently shown on the dial.
    #[inline]
    pub const fn committed(&self) -> &IconSet { &self.committed }

    /// Icons in the editor inputs.
    #[inline]
    pub const fn draft(&self) -> &IconSet { &self.draft }

    /// Edit one draft glyph. Returns `false` if `index` is not a level slot.
    pub fn edit(
        &mut self,
        index: usize,
        text: &str,
    ) -> bool {
        self.draft.set(index, text)
    }

    /// Copy the draft set into the committed set.
    ///
    /// Returns `true` if the committed icons changed.
    pub fn commit(&mut self) -> bool {
        if self.committed == self.draft {
            return false;
        }
        self.committed = self.draft.clone();
        true
    }

    /// Restore both sets to the built-in defaults.
    pub fn reset(&mut self) {
        self.draft = IconSet::default();
        self.committed = IconSet::default();
    }

    /// Whether the draft holds edits that have not been committed.
    #[inline]
    pub fn has_pending_edits(&self) -> bool { self.draft != self.committed }
}
