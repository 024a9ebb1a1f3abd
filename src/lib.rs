// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for canvas-sized values
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Vintage dial gauge and icon copier grid, rendered to PNG.
//!
//! # Widgets
//!
//! - **Dial**: a half-disc brass-and-paper gauge with five levels, a colored
//!   pointer, a title and a label box naming the level.
//! - **Grid**: five columns of icon slots; the first `count` slots hold an icon.
//!
//! # Layers
//!
//! ```text
//! state ──> widgets::render_* ──> Canvas (embedded-graphics DrawTarget)
//!                                   │
//!                                   └──> export::ExportService ──> PNG on disk
//! ```
//!
//! [`render`] wraps state and canvas into [`DialWidget`] / [`GridWidget`] with
//! dirty tracking. Shared constants and no_std state types (levels, icon sets,
//! counters, geometry) come from `vintage_common`.

pub mod asset;
pub mod canvas;
pub mod config;
pub mod error;
pub mod export;
pub mod gradient;
pub mod pages;
#[cfg(feature = "simulator")]
pub mod preview;
pub mod render;
pub mod state;
pub mod styles;
pub mod widgets;

pub use asset::IconAsset;
pub use canvas::Canvas;
pub use config::{AppConfig, LoggingConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use export::{DirectoryTarget, ExportHandle, ExportService, SaveTarget, dial_filename, grid_filename, slugify};
pub use render::{DialWidget, GridWidget};
pub use state::{DialState, GridState};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))
}
