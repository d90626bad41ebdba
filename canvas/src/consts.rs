//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Raster surface width in logical units (one unit per pixel).
pub const SURFACE_WIDTH: u32 = 800;

/// Raster surface height in logical units.
pub const SURFACE_HEIGHT: u32 = 400;

// ── Stroke style ────────────────────────────────────────────────

/// Freehand stroke width in surface units.
pub const STROKE_WIDTH: f32 = 2.0;

/// Freehand stroke color as RGBA.
pub const STROKE_RGBA: [u8; 4] = [0, 0, 0, 255];

// ── Sticky notes ────────────────────────────────────────────────

/// Width assigned to a new note.
pub const NOTE_DEFAULT_WIDTH: f64 = 120.0;

/// Height assigned to a new note.
pub const NOTE_DEFAULT_HEIGHT: f64 = 50.0;

/// Left edge of the random placement band for new notes.
pub const NOTE_SPAWN_MIN_X: f64 = 50.0;

/// Width of the random placement band, so x lands in `[50, 650]`.
pub const NOTE_SPAWN_SPAN_X: f64 = 600.0;

/// Top edge of the random placement band for new notes.
pub const NOTE_SPAWN_MIN_Y: f64 = 50.0;

/// Height of the random placement band, so y lands in `[50, 350]`.
pub const NOTE_SPAWN_SPAN_Y: f64 = 300.0;

/// Inner padding of a note; the delete button sits inside it.
pub const NOTE_PADDING: f64 = 12.0;

// ── Resize limits ───────────────────────────────────────────────

pub const NOTE_MIN_WIDTH: f64 = 60.0;
pub const NOTE_MAX_WIDTH: f64 = 300.0;
pub const NOTE_MIN_HEIGHT: f64 = 30.0;
pub const NOTE_MAX_HEIGHT: f64 = 300.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Side of the square resize handle in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f64 = 12.0;

/// Side of the square delete button near the top-right corner.
pub const DELETE_BUTTON_SIZE: f64 = 16.0;

// ── Presentation ────────────────────────────────────────────────

/// Note opacity while the surface is in Draw mode.
pub const DRAW_MODE_NOTE_OPACITY: f64 = 0.7;

/// Stacking order of the note under an active drag.
pub const DRAGGED_NOTE_Z_INDEX: i32 = 1000;

/// Stacking order of every other note.
pub const RESTING_NOTE_Z_INDEX: i32 = 1;
