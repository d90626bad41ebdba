//! Resize controller: sizes one note from its bottom-right handle.
//!
//! Size is always derived from the gesture's starting pointer and starting
//! size, never accumulated across moves, so the result only depends on the
//! current pointer position.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::{NOTE_MAX_HEIGHT, NOTE_MAX_WIDTH, NOTE_MIN_HEIGHT, NOTE_MIN_WIDTH};
use crate::geom::{Point, Size};
use crate::input::{CaptureScope, PointerCapture};
use crate::notes::{NoteId, NoteStore, StickyNote};

/// Resize gesture state.
#[derive(Debug, Default, PartialEq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        note_id: NoteId,
        /// Surface-local pointer position when the handle was grabbed.
        start_pointer: Point,
        /// Note size when the handle was grabbed.
        start_size: Size,
        /// Window-level listeners held for the gesture.
        capture: PointerCapture,
    },
}

#[derive(Debug, Default)]
pub struct ResizeController {
    state: ResizeState,
}

impl ResizeController {
    #[must_use]
    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    #[must_use]
    pub fn active_note(&self) -> Option<NoteId> {
        match self.state {
            ResizeState::Resizing { note_id, .. } => Some(note_id),
            ResizeState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_note().is_some()
    }

    /// Grab the resize handle of `note`. Returns the capture scope, or `None`
    /// if a resize is already running.
    pub(crate) fn start(&mut self, note: &StickyNote, pointer: Point) -> Option<CaptureScope> {
        if self.is_active() {
            return None;
        }
        let capture = PointerCapture::acquire(CaptureScope::Window);
        let scope = capture.scope();
        self.state =
            ResizeState::Resizing { note_id: note.id, start_pointer: pointer, start_size: note.size(), capture };
        Some(scope)
    }

    /// Resize the note for the current `pointer`. Returns the id and committed size.
    pub(crate) fn track(&self, pointer: Point, store: &mut NoteStore) -> Option<(NoteId, Size)> {
        let ResizeState::Resizing { note_id, start_pointer, start_size, .. } = self.state else {
            return None;
        };
        let size = resized(start_size, start_pointer, pointer);
        store.resize(note_id, size.width, size.height).then_some((note_id, size))
    }

    /// End the gesture, releasing its capture.
    pub(crate) fn finish(&mut self) -> Option<CaptureScope> {
        match std::mem::take(&mut self.state) {
            ResizeState::Resizing { capture, .. } => Some(capture.release()),
            ResizeState::Idle => None,
        }
    }
}

/// Size for a handle dragged from `start_pointer` to `pointer`, clamped to
/// 60..=300 wide and 30..=300 tall.
#[must_use]
pub fn resized(start_size: Size, start_pointer: Point, pointer: Point) -> Size {
    let delta = pointer.sub(start_pointer);
    Size::new(
        (start_size.width + delta.x).clamp(NOTE_MIN_WIDTH, NOTE_MAX_WIDTH),
        (start_size.height + delta.y).clamp(NOTE_MIN_HEIGHT, NOTE_MAX_HEIGHT),
    )
}
