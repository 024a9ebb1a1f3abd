//! Pre-computed static text and shape styles.
//!
//! # Optimization: Static Style Constants
//!
//! Every dial redraw places a dozen text runs and as many outlined shapes. The
//! styles for them never change, so they are `const` values built at compile
//! time and referenced directly by the renderers.
//!
//! # Fonts
//!
//! | Use              | Font                | Color         |
//! |------------------|---------------------|---------------|
//! | Dial title       | `PROFONT_18_POINT`  | ink           |
//! | Scale numbers    | `PROFONT_12_POINT`  | ink           |
//! | Icon glyphs      | `FONT_10X20`        | ink           |
//! | Level label      | `PROFONT_14_POINT`  | ink           |
//! | Grid title       | `FONT_9X18_BOLD`    | black         |
//! | Grid footer      | `PROFONT_12_POINT`  | footer gray   |

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_9X18_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb888,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT};
use vintage_common::{BLACK, BRASS_DARK, BRASS_LIGHT, FOOTER_GRAY, INK};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Horizontally centered on the alphabetic baseline. Used for titles and footer.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered on both axes. Used for text inside plates, discs and the label box.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

pub const DIAL_TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_18_POINT, INK);

pub const SCALE_NUMBER_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_12_POINT, INK);

pub const ICON_GLYPH_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_10X20, INK);

pub const LEVEL_LABEL_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_14_POINT, INK);

pub const GRID_TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_9X18_BOLD, BLACK);

pub const GRID_FOOTER_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_12_POINT, FOOTER_GRAY);

// =============================================================================
// Pre-computed Shape Styles
// =============================================================================

/// Brass plate with a thin ink outline (scale numbers, level label box).
pub const BRASS_PLATE: PrimitiveStyle<Rgb888> = PrimitiveStyleBuilder::new()
    .fill_color(BRASS_LIGHT)
    .stroke_color(INK)
    .stroke_width(1)
    .build();

/// Darker brass screw head.
pub const SCREW_HEAD: PrimitiveStyle<Rgb888> = PrimitiveStyleBuilder::new()
    .fill_color(BRASS_DARK)
    .stroke_color(INK)
    .stroke_width(1)
    .build();

/// One pixel ink line (title rule, screw slots, inner frame).
pub const INK_HAIRLINE: PrimitiveStyle<Rgb888> = PrimitiveStyle::with_stroke(INK, 1);
