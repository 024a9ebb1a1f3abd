//! Color constants for the vintage widgets.
//!
//! All colors are `Rgb888`: the export path writes 8-bit RGB PNGs, so there is no
//! reason to quantize to a display format like RGB565 along the way.
//!
//! Colors that the widgets paint with partial opacity (gradient stops, shadows,
//! texture) are listed here as opaque RGB; their alpha lives next to the drawing
//! code that uses them.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::level::Level;

// =============================================================================
// Dial Palette
// =============================================================================

/// Aged paper background (`#F2E8C9`).
pub const PAPER: Rgb888 = Rgb888::new(0xF2, 0xE8, 0xC9);

/// Brown frame color (`#7D5A38`).
pub const FRAME_BROWN: Rgb888 = Rgb888::new(0x7D, 0x5A, 0x38);

/// Dark brown ink for text, ticks and outlines (`#472D1E`).
pub const INK: Rgb888 = Rgb888::new(0x47, 0x2D, 0x1E);

/// Light brass (`#D2B570`). Number plates, label box, gradient highlights.
pub const BRASS_LIGHT: Rgb888 = Rgb888::new(0xD2, 0xB5, 0x70);

/// Dark brass (`#A89064`). Gradient edges and screw heads.
pub const BRASS_DARK: Rgb888 = Rgb888::new(0xA8, 0x90, 0x64);

/// Shadowed brass (`#7D6B48`). Outer stop of the center cap gradient.
pub const BRASS_SHADOW: Rgb888 = Rgb888::new(0x7D, 0x6B, 0x48);

/// Dial face center tint, painted at 90% opacity.
pub const FACE_CENTER: Rgb888 = Rgb888::new(250, 240, 210);

/// Dial face edge tint, painted at 80% opacity.
pub const FACE_EDGE: Rgb888 = Rgb888::new(200, 180, 140);

/// Weathered rim just outside the brass arc, painted at 50% opacity.
pub const WEATHERED_RIM: Rgb888 = Rgb888::new(120, 100, 80);

/// Pointer drop shadow, painted at 30% opacity.
pub const POINTER_SHADOW: Rgb888 = Rgb888::new(50, 30, 10);

/// Pointer color per level, muted tones. Indexed by `level - 1`.
pub const LEVEL_COLORS: [Rgb888; Level::COUNT] = [
    Rgb888::new(0x5A, 0x72, 0x47), // Very Low - moss green
    Rgb888::new(0x9C, 0x7D, 0x53), // Low - khaki
    Rgb888::new(0xD5, 0xA2, 0x53), // Moderate - mustard
    Rgb888::new(0xBD, 0x6B, 0x39), // High - rust
    Rgb888::new(0x7D, 0x1F, 0x1D), // Severe - oxblood
];

// =============================================================================
// Grid Palette
// =============================================================================

/// Pure white. Grid background and active slot fill.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure black. Grid title text.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Default fill for empty grid slots (`#e5e5e5`).
pub const EMPTY_SLOT: Rgb888 = Rgb888::new(0xE5, 0xE5, 0xE5);

/// Slot border color (`#d1d5db`).
pub const SLOT_BORDER: Rgb888 = Rgb888::new(0xD1, 0xD5, 0xDB);

/// Footer text color (`#6b7280`).
pub const FOOTER_GRAY: Rgb888 = Rgb888::new(0x6B, 0x72, 0x80);

/// Placeholder glyph stroke, painted at 50% opacity over the slot.
pub const PLACEHOLDER: Rgb888 = Rgb888::new(0x37, 0x41, 0x51);

// =============================================================================
// Parsing
// =============================================================================

/// Parse a `#rrggbb` (or `#rgb`) hex color. The leading `#` is optional.
///
/// Returns `None` for anything else.
pub fn parse_hex_color(text: &str) -> Option<Rgb888> {
    let hex = text.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb888::new(r, g, b))
        }
        3 => {
            // #abc expands to #aabbcc
            let mut channels = [0u8; 3];
            for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                let v = digit.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Rgb888::new(channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}
