//! Canvas and layout configuration constants.
//!
//! Everything that positions a fixed element is a compile-time constant. Values
//! that depend on runtime input (grid slot count, icon size) are computed by
//! [`GridLayout`](crate::grid::GridLayout) instead.

// =============================================================================
// Dial Canvas
// =============================================================================

/// Dial canvas width in pixels.
pub const DIAL_WIDTH: u32 = 400;

/// Dial canvas height in pixels.
pub const DIAL_HEIGHT: u32 = 350;

/// Distance of the outer frame from the canvas edges.
pub const FRAME_MARGIN: i32 = 15;

/// Extra inset of the thin decorative rectangle inside the frame.
pub const FRAME_INSET: i32 = 5;

/// Stroke width of the distressed outer frame.
pub const FRAME_STROKE: u32 = 8;

/// Horizontal/vertical step between jittered frame vertices.
pub const FRAME_STEP: i32 = 5;

/// Total jitter span of the frame vertices (each vertex moves +-half of this).
pub const FRAME_ROUGHNESS: f32 = 1.5;

/// Number of texture specks sprinkled over the paper background.
pub const PAPER_SPECKS: u32 = 5000;

/// Upper bound (exclusive) of a single speck's opacity.
pub const SPECK_MAX_ALPHA: f32 = 0.03;

/// Dial radius as a fraction of `min(width, height)`.
pub const DIAL_RADIUS_RATIO: f32 = 0.35;

/// Dial center height as a fraction of canvas height.
pub const DIAL_CENTER_RATIO: f32 = 0.45;

// =============================================================================
// Dial Face and Scale
// =============================================================================

/// How far the face background extends past the dial radius.
pub const FACE_OVERHANG: f32 = 20.0;

/// Height of the rectangular apron under the half-disc face.
pub const FACE_APRON: i32 = 40;

/// Radius offset of the weathered rim (relative to the dial radius).
pub const RIM_OVERHANG: f32 = 15.0;

/// Stroke width of the weathered rim.
pub const RIM_STROKE: u32 = 5;

/// Stroke width of the brass dial arc.
pub const ARC_STROKE: u32 = 10;

/// Number of scale positions on the dial.
pub const SCALE_STEPS: usize = 5;

/// Length of each tick mark, measured inward from the dial radius.
pub const TICK_LENGTH: f32 = 20.0;

/// Stroke width of tick marks.
pub const TICK_STROKE: u32 = 3;

/// Inset of the numbered plates from the dial radius.
pub const NUMBER_INSET: f32 = 30.0;

/// Radius of a numbered plate.
pub const NUMBER_PLATE_RADIUS: u32 = 15;

/// Inset of the icon discs from the dial radius.
pub const ICON_INSET: f32 = 60.0;

/// Radius of an icon disc.
pub const ICON_DISC_RADIUS: u32 = 18;

/// Inset of the pointer tip from the dial radius.
pub const POINTER_INSET: f32 = 30.0;

/// Half-width of the pointer base.
pub const POINTER_HALF_WIDTH: f32 = 8.0;

/// Drop shadow offset of the pointer, in both axes.
pub const POINTER_SHADOW_OFFSET: i32 = 3;

/// Radius of the brass center cap.
pub const CAP_RADIUS: u32 = 12;

/// Radius of the dark screw in the middle of the cap.
pub const CAP_SCREW_RADIUS: u32 = 5;

/// Radius of the corner screws.
pub const SCREW_RADIUS: u32 = 3;

/// Offset of the corner screws from the frame margin.
pub const SCREW_OFFSET: i32 = 10;

/// Vertical offset of the title baseline above the center (as a fraction of radius).
pub const TITLE_RISE_RATIO: f32 = 0.5;

/// Half-length of the line under the title.
pub const TITLE_RULE_HALF: i32 = 80;

/// Gap between the title baseline and its underline.
pub const TITLE_RULE_GAP: i32 = 10;

/// Label box width.
pub const LABEL_BOX_WIDTH: u32 = 160;

/// Label box height.
pub const LABEL_BOX_HEIGHT: u32 = 30;

/// Gap between the label box and the frame margin.
pub const LABEL_BOX_GAP: i32 = 10;

/// Label box top edge.
pub const LABEL_BOX_Y: i32 = DIAL_HEIGHT as i32 - FRAME_MARGIN - LABEL_BOX_HEIGHT as i32 - LABEL_BOX_GAP;

// Compile-time validation: the label box must sit inside the frame
const _: () = assert!(LABEL_BOX_Y > FRAME_MARGIN);
const _: () = assert!(NUMBER_INSET < ICON_INSET);

// =============================================================================
// Icon Grid
// =============================================================================

/// The grid always uses five columns; rows grow with `max_count`.
pub const GRID_COLUMNS: u32 = 5;

/// Padding added to the icon size to form a cell.
pub const GRID_CELL_PADDING: u32 = 16;

/// Outer padding around the grid.
pub const GRID_PADDING: u32 = 20;

/// Height reserved for the title above the grid.
pub const GRID_HEADER: u32 = 40;

/// Height reserved for the footer under the grid.
pub const GRID_FOOTER: u32 = 30;

/// Default number of grid slots.
pub const DEFAULT_MAX_COUNT: u32 = 15;

/// Default icon edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 32;

/// Largest accepted number of grid slots.
pub const MAX_GRID_SLOTS: u32 = 1000;

/// Largest accepted icon edge length in pixels.
pub const MAX_ICON_SIZE: u32 = 512;

/// Largest accepted grid canvas, in pixels (4096 x 4096).
pub const MAX_GRID_PIXELS: u64 = 1 << 24;

// Both edges of the largest slot/icon combination stay far from u32 overflow
const _: () = assert!((MAX_ICON_SIZE + GRID_CELL_PADDING) * GRID_COLUMNS + GRID_PADDING * 2 < 1 << 20);
const _: () = assert!(
    MAX_GRID_SLOTS.div_ceil(GRID_COLUMNS) * (MAX_ICON_SIZE + GRID_CELL_PADDING) + GRID_PADDING * 2 + GRID_HEADER + GRID_FOOTER
        < 1 << 20
);
