//! Common types and constants for the vintage widgets.
//!
//! This crate contains the platform-agnostic half of the project, shared by the
//! renderer library and the preview window:
//!
//! - [`colors`]: RGB888 palette (paper, brass, level colors, grid colors)
//! - [`config`]: Canvas sizes and layout constants for both widgets
//! - [`level`]: The 1..=5 dial level and its label/color tables
//! - [`icons`]: Per-level icon glyphs with draft/committed editing
//! - [`geometry`]: Dial center, radius, scale and pointer math
//! - [`grid`]: Icon grid layout and the clamped slot counter
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible. Strings are `heapless` and trigonometry goes
//! through `micromath`, so nothing here needs an allocator.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod icons;
pub mod level;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use geometry::DialGeometry;
pub use grid::{Counter, GridLayout};
pub use icons::{IconEditor, IconGlyph, IconSet};
pub use level::Level;
