//! Renderers for the two widgets.
//!
//! - [`dial`]: vintage dial gauge (paper, brass, pointer, label box)
//! - [`grid`]: icon copier grid (title, slots, footer)
//! - [`primitives`]: shared drawing pieces (paper texture, frame, screws, placeholder)
//!
//! # Architecture
//!
//! Renderers are free functions over `(&mut Canvas, &State, ..)`. They repaint
//! the whole canvas on every call and hold no state between calls; re-render
//! scheduling lives in [`render`](crate::render).
//!
//! ## Static Styles
//! All text and outline styles come from [`styles`](crate::styles); numbers and
//! labels are formatted into `heapless::String` buffers.

mod dial;
mod grid;
mod primitives;

pub use dial::render_dial;
pub use grid::render_grid;
