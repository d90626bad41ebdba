//! Presentation: how each note should look for the current mode and gesture.
//!
//! Hosts lay notes out over the surface themselves. This module gives them a
//! read-only [`NoteStyle`] per note and never mutates application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{DRAGGED_NOTE_Z_INDEX, DRAW_MODE_NOTE_OPACITY, RESTING_NOTE_Z_INDEX};
use crate::engine::EngineCore;
use crate::input::Mode;
use crate::notes::{NoteId, StickyNote};

/// Shadow depth under a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    /// Faint shadow while the note is inert.
    Flat,
    /// Deeper shadow while the note can be manipulated.
    Raised,
}

/// Visual state of one note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteStyle {
    pub opacity: f64,
    pub z_index: i32,
    /// Whether the note receives pointer events.
    pub interactive: bool,
    /// CSS cursor name.
    pub cursor: &'static str,
    /// Whether the delete button and resize handle are shown.
    pub show_controls: bool,
    pub shadow: Shadow,
}

/// Style for `note` given the mode and the note currently being dragged.
#[must_use]
pub fn note_style(note: &StickyNote, mode: Mode, dragging: Option<NoteId>) -> NoteStyle {
    let z_index = if dragging == Some(note.id) { DRAGGED_NOTE_Z_INDEX } else { RESTING_NOTE_Z_INDEX };
    match mode {
        Mode::Draw => NoteStyle {
            opacity: DRAW_MODE_NOTE_OPACITY,
            z_index,
            interactive: false,
            cursor: "default",
            show_controls: false,
            shadow: Shadow::Flat,
        },
        Mode::Note => NoteStyle {
            opacity: 1.0,
            z_index,
            interactive: true,
            cursor: "move",
            show_controls: true,
            shadow: Shadow::Raised,
        },
    }
}

/// Styles for every note, in stacking order (bottom first).
#[must_use]
pub fn styles(core: &EngineCore) -> Vec<(NoteId, NoteStyle)> {
    let dragging = core.drag.active_note();
    core.notes
        .notes()
        .iter()
        .map(|n| (n.id, note_style(n, core.mode(), dragging)))
        .collect()
}
