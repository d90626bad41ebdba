//! Drag controller: repositions one note under a document-wide pointer stream.
//!
//! The grab offset (pointer minus note origin, both surface-local) is captured
//! once at pointer-down and held for the whole gesture, so the note keeps its
//! position relative to the pointer instead of jumping to it. Every committed
//! position is clamped so the note stays inside its container.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geom::{Point, Size};
use crate::input::{CaptureScope, PointerCapture};
use crate::notes::{NoteId, NoteStore, StickyNote};

/// Drag gesture state.
#[derive(Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        note_id: NoteId,
        /// Pointer-to-origin offset captured at grab time.
        grab_offset: Point,
        /// Document-level listeners held for the gesture.
        capture: PointerCapture,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn active_note(&self) -> Option<NoteId> {
        match self.state {
            DragState::Dragging { note_id, .. } => Some(note_id),
            DragState::Idle => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_note().is_some()
    }

    /// Grab `note` at surface-local `pointer`. Returns the capture scope the
    /// host must listen on, or `None` if a drag is already running.
    pub(crate) fn start(&mut self, note: &StickyNote, pointer: Point) -> Option<CaptureScope> {
        if self.is_active() {
            return None;
        }
        let capture = PointerCapture::acquire(CaptureScope::Document);
        let scope = capture.scope();
        self.state = DragState::Dragging { note_id: note.id, grab_offset: pointer.sub(note.origin()), capture };
        Some(scope)
    }

    /// Move the dragged note to follow `pointer`, clamped to `container`.
    ///
    /// Returns the note id and committed origin, or `None` when idle or the
    /// note no longer exists.
    pub(crate) fn track(&self, pointer: Point, container: Size, store: &mut NoteStore) -> Option<(NoteId, Point)> {
        let DragState::Dragging { note_id, grab_offset, .. } = self.state else {
            return None;
        };
        let size = store.get(note_id)?.size();
        let pos = clamp_position(pointer.sub(grab_offset), size, container);
        store.reposition(note_id, pos.x, pos.y);
        Some((note_id, pos))
    }

    /// End the gesture, releasing its capture. Returns the released scope, if any.
    pub(crate) fn finish(&mut self) -> Option<CaptureScope> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { capture, .. } => Some(capture.release()),
            DragState::Idle => None,
        }
    }
}

/// Clamp a note origin to `[0, container - note]` on each axis.
///
/// A note larger than its container pins to `0` on that axis.
#[must_use]
pub fn clamp_position(pos: Point, note: Size, container: Size) -> Point {
    let max_x = (container.width - note.width).max(0.0);
    let max_y = (container.height - note.height).max(0.0);
    Point::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
}
