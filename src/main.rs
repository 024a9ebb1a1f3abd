//! `vintage-widgets` command line.
//!
//! ```text
//! vintage-widgets [--config FILE] [--log-level LEVEL] dial [--title T] [--level N] [--icon G]... [--out DIR] [--seed N]
//! vintage-widgets [--config FILE] [--log-level LEVEL] grid [--title T] [--count N] [--max-count N]
//!                                                          [--icon-size N] [--icon PATH] [--empty-color HEX] [--out DIR]
//! vintage-widgets [--config FILE] preview        (feature `simulator`)
//! ```
//!
//! Flags override the configuration file, which overrides the built-in defaults.
//! The path of each written PNG is printed on stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use vintage_widgets::{AppConfig, DialWidget, ExportService, GridWidget, IconAsset, init_tracing, load_config};

#[derive(Parser, Debug)]
#[command(name = "vintage-widgets", version, about = "Render vintage dial and icon grid widgets to PNG")]
struct Cli {
    /// JSON5 configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the vintage dial gauge
    Dial(DialArgs),

    /// Render the icon copier grid
    Grid(GridArgs),

    /// Open an interactive preview window
    #[cfg(feature = "simulator")]
    Preview,
}

#[derive(Args, Debug)]
struct DialArgs {
    /// Dial title
    #[arg(long)]
    title: Option<String>,

    /// Level from 1 to 5
    #[arg(long, allow_negative_numbers = true)]
    level: Option<i64>,

    /// Icon glyph per level; give exactly five
    #[arg(long = "icon")]
    icons: Vec<String>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for the paper texture and frame jitter
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Grid title
    #[arg(long)]
    title: Option<String>,

    /// Number of filled slots
    #[arg(long)]
    count: Option<u32>,

    /// Number of slots
    #[arg(long)]
    max_count: Option<u32>,

    /// Icon edge length in pixels
    #[arg(long)]
    icon_size: Option<u32>,

    /// Icon image (PNG or JPEG)
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Empty slot color as #rrggbb
    #[arg(long)]
    empty_color: Option<String>,

    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config.logging)?;

    match cli.command {
        Command::Dial(args) => run_dial(config, args),
        Command::Grid(args) => run_grid(config, args),
        #[cfg(feature = "simulator")]
        Command::Preview => run_preview(&config),
    }
}

fn run_dial(
    mut config: AppConfig,
    args: DialArgs,
) -> Result<()> {
    if let Some(title) = args.title {
        config.dial.title = title;
    }
    if let Some(level) = args.level {
        config.dial.level = level;
    }
    if !args.icons.is_empty() {
        config.dial.icons = Some(args.icons);
    }
    if let Some(out) = args.out {
        config.export.output_dir = out;
    }

    let state = config.dial.to_state()?;
    let mut dial = match args.seed {
        Some(seed) => DialWidget::with_seed(state, seed),
        None => DialWidget::new(state),
    };
    dial.frame();

    let exporter = ExportService::to_directory(&config.export.output_dir);
    let path = exporter.export_blocking(dial.canvas(), &dial.state().file_name())?;
    println!("{}", path.display());
    Ok(())
}

fn run_grid(
    mut config: AppConfig,
    args: GridArgs,
) -> Result<()> {
    let grid_config = &mut config.grid;
    if let Some(title) = args.title {
        grid_config.title = title;
    }
    if let Some(count) = args.count {
        grid_config.count = count;
    }
    if let Some(max_count) = args.max_count {
        grid_config.max_count = max_count;
    }
    if let Some(icon_size) = args.icon_size {
        grid_config.icon_size = icon_size;
    }
    if let Some(icon) = args.icon {
        grid_config.icon = Some(icon);
    }
    if let Some(color) = args.empty_color {
        grid_config.empty_slot_color = color;
    }
    if let Some(out) = args.out {
        config.export.output_dir = out;
    }

    let state = config.grid.to_state()?;
    let icon = config
        .grid
        .icon
        .as_deref()
        .and_then(|path| IconAsset::load_or_placeholder(path, state.layout().icon_size()));
    let mut grid = GridWidget::new(state, icon);
    grid.frame();

    let exporter = ExportService::to_directory(&config.export.output_dir);
    let path = exporter.export_blocking(grid.canvas(), &grid.state().file_name())?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(feature = "simulator")]
fn run_preview(config: &AppConfig) -> Result<()> {
    let dial = DialWidget::new(config.dial.to_state()?);
    let state = config.grid.to_state()?;
    let icon = config
        .grid
        .icon
        .as_deref()
        .and_then(|path| IconAsset::load_or_placeholder(path, state.layout().icon_size()));
    let grid = GridWidget::new(state, icon);
    let exporter = ExportService::to_directory(&config.export.output_dir);

    vintage_widgets::preview::run_preview(dial, grid, &exporter);
    Ok(())
}
