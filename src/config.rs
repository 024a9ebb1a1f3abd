//! Runtime configuration loaded from a JSON5 file.
//!
//! Layout constants live in `vintage_common::config`; this module covers what a
//! user may change: logging, the export directory and the starting state of
//! both widgets. Every section and field is optional.
//!
//! ```json5
//! {
//!   logging: { level: "info" },
//!   export: { output_dir: "." },
//!   dial: { title: "Threat Level", level: 1, icons: ["zz", "!", "!!", "X", "**"] },
//!   grid: { title: "Resource Counter", count: 0, max_count: 15, icon_size: 32,
//!           icon: "icons/resource.png", empty_slot_color: "#e5e5e5" },
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vintage_common::colors::parse_hex_color;
use vintage_common::{
    DEFAULT_ICON_SIZE, DEFAULT_MAX_COUNT, GridLayout, IconSet, Level, MAX_GRID_PIXELS, MAX_GRID_SLOTS, MAX_ICON_SIZE,
};

use crate::error::{Error, Result};
use crate::state::{DEFAULT_DIAL_TITLE, DEFAULT_GRID_TITLE, DialState, GridState};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Where exported PNG files go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Starting state of the dial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialConfig {
    #[serde(default = "default_dial_title")]
    pub title: String,

    /// Level 1-5.
    #[serde(default = "default_level")]
    pub level: i64,

    /// Exactly five glyphs, one per level. Omitted means the built-in set.
    #[serde(default)]
    pub icons: Option<Vec<String>>,
}

fn default_dial_title() -> String { DEFAULT_DIAL_TITLE.to_string() }

fn default_level() -> i64 { 1 }

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            title: default_dial_title(),
            level: default_level(),
            icons: None,
        }
    }
}

impl DialConfig {
    /// Validated level.
    pub fn level(&self) -> Result<Level> {
        u8::try_from(self.level)
            .ok()
            .and_then(Level::new)
            .ok_or(Error::InvalidLevel(self.level))
    }

    /// Validated icon set.
    pub fn icon_set(&self) -> Result<IconSet> {
        let Some(icons) = &self.icons else {
            return Ok(IconSet::default());
        };
        let glyphs: [&str; Level::COUNT] = icons
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| Error::config(format!("dial.icons needs {} entries, got {}", Level::COUNT, icons.len())))?;
        Ok(IconSet::from_strs(glyphs))
    }

    pub fn to_state(&self) -> Result<DialState> { Ok(DialState::new(self.title.clone(), self.level()?, self.icon_set()?)) }
}

/// Starting state of the icon grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_title")]
    pub title: String,

    #[serde(default)]
    pub count: u32,

    #[serde(default = "default_max_count")]
    pub max_count: u32,

    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    /// Icon image (PNG or JPEG). Omitted means placeholders.
    #[serde(default)]
    pub icon: Option<PathBuf>,

    #[serde(default = "default_empty_slot_color")]
    pub empty_slot_color: String,
}

fn default_grid_title() -> String { DEFAULT_GRID_TITLE.to_string() }

fn default_max_count() -> u32 { DEFAULT_MAX_COUNT }

fn default_icon_size() -> u32 { DEFAULT_ICON_SIZE }

fn default_empty_slot_color() -> String { "#e5e5e5".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: default_grid_title(),
            count: 0,
            max_count: default_max_count(),
            icon_size: default_icon_size(),
            icon: None,
            empty_slot_color: default_empty_slot_color(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SLOTS).contains(&self.max_count) {
            return Err(Error::config(format!(
                "grid.max_count must be between 1 and {MAX_GRID_SLOTS}, got {}",
                self.max_count
            )));
        }
        if !(1..=MAX_ICON_SIZE).contains(&self.icon_size) {
            return Err(Error::config(format!(
                "grid.icon_size must be between 1 and {MAX_ICON_SIZE}, got {}",
                self.icon_size
            )));
        }
        let size = GridLayout::new(self.max_count, self.icon_size).canvas_size();
        let pixels = u64::from(size.width) * u64::from(size.height);
        if pixels > MAX_GRID_PIXELS {
            return Err(Error::config(format!(
                "grid of {} slots at {}px needs a {}x{} canvas, more than {MAX_GRID_PIXELS} pixels",
                self.max_count, self.icon_size, size.width, size.height
            )));
        }
        parse_hex_color(&self.empty_slot_color).ok_or_else(|| Error::InvalidColor(self.empty_slot_color.clone()))?;
        Ok(())
    }

    /// Grid state with the count clamped to `max_count`.
    pub fn to_state(&self) -> Result<GridState> {
        self.validate()?;
        let mut state = GridState::new(self.title.clone(), self.count, self.max_count, self.icon_size);
        if let Some(color) = parse_hex_color(&self.empty_slot_color) {
            state.empty_slot_color = color;
        }
        Ok(state)
    }
}

/// Whole application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub dial: DialConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

impl AppConfig {
    /// Reject values the widgets cannot represent.
    pub fn validate(&self) -> Result<()> {
        self.dial.level()?;
        self.dial.icon_set()?;
        self.grid.validate()
    }
}

/// Load and validate a JSON5 configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file '{}': {}", path.display(), e)))?;
    let config: AppConfig = json5::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse config file '{}': {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate configuration from a JSON5 string.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig =
        json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::Size;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.dial.title, "Threat Level");
        assert_eq!(config.grid.max_count, 15);
        assert_eq!(config.grid.icon_size, 32);
    }

    #[test]
    fn test_parse_full_config() {
        let json5 = r##"
        {
            logging: { level: "debug" },
            export: { output_dir: "out" },
            dial: { title: "Mood", level: 4, icons: ["a", "b", "c", "d", "e"] },
            grid: { title: "Gold", count: 3, max_count: 10, icon_size: 24, empty_slot_color: "#102030" },
        }
        "##;
        let config = parse_config(json5).unwrap();

        let dial = config.dial.to_state().unwrap();
        assert_eq!(dial.title, "Mood");
        assert_eq!(dial.level, Level::clamped(4));
        assert_eq!(dial.current_icon(), "d");

        let grid = config.grid.to_state().unwrap();
        assert_eq!(grid.counter().count(), 3);
        assert_eq!(grid.layout().icon_size(), 24);
        assert_eq!(grid.empty_slot_color, Rgb888::new(0x10, 0x20, 0x30));
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let err = parse_config("{ dial: { level: 6 } }").unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(6)));
        let err = parse_config("{ dial: { level: 0 } }").unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(0)));
        let err = parse_config("{ dial: { level: -3 } }").unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(-3)));
    }

    #[test]
    fn test_wrong_icon_count_rejected() {
        let err = parse_config(r#"{ dial: { icons: ["a", "b"] } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_max_count_rejected() {
        assert!(parse_config("{ grid: { max_count: 0 } }").is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = parse_config("{ grid: { icon_size: 4294967290, max_count: 1 } }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let err = parse_config("{ grid: { max_count: 4294967295 } }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_pixel_budget() {
        // 200 rows of 528px cells would be a 2680x105710 canvas
        assert!(parse_config("{ grid: { icon_size: 512, max_count: 1000 } }").is_err());

        let config = parse_config("{ grid: { icon_size: 512, max_count: 25 } }").unwrap();
        let state = config.grid.to_state().unwrap();
        assert_eq!(state.layout().canvas_size(), Size::new(5 * 528 + 40, 5 * 528 + 110));

        let config = parse_config("{ grid: { icon_size: 32, max_count: 1000 } }").unwrap();
        assert_eq!(config.grid.to_state().unwrap().layout().canvas_size(), Size::new(280, 200 * 48 + 110));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = parse_config(r#"{ grid: { empty_slot_color: "beige" } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[test]
    fn test_count_clamped_to_max() {
        let config = parse_config("{ grid: { count: 50, max_count: 5 } }").unwrap();
        assert_eq!(config.grid.to_state().unwrap().counter().count(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.json5")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ dial: {{ title: 'From File', level: 2 }} }}").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.dial.title, "From File");
        assert_eq!(config.dial.level, 2);
    }

    #[test]
    fn test_parse_error_is_config_error() {
        assert!(matches!(parse_config("{ dial: "), Err(Error::Config(_))));
    }
}
