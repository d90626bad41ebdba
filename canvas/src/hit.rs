#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{DELETE_BUTTON_SIZE, NOTE_PADDING, RESIZE_HANDLE_SIZE};
use crate::geom::{Point, Rect};
use crate::notes::{NoteId, NoteStore, StickyNote};

/// Which part of a note was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    /// Bottom-right resize corner.
    ResizeHandle,
    /// Delete control near the top-right corner.
    DeleteButton,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub note_id: NoteId,
    pub part: HitPart,
}

/// Find the topmost note under `pt` (surface-local). Later notes sit on top.
#[must_use]
pub fn hit_test(pt: Point, store: &NoteStore) -> Option<Hit> {
    store
        .notes()
        .iter()
        .rev()
        .find(|n| n.bounds().contains(pt))
        .map(|n| Hit { note_id: n.id, part: part_at(n, pt) })
}

fn part_at(note: &StickyNote, pt: Point) -> HitPart {
    if resize_handle_rect(note).contains(pt) {
        HitPart::ResizeHandle
    } else if delete_button_rect(note).contains(pt) {
        HitPart::DeleteButton
    } else {
        HitPart::Body
    }
}

/// Surface-local rect of a note's resize handle.
#[must_use]
pub fn resize_handle_rect(note: &StickyNote) -> Rect {
    Rect::new(
        note.x + note.width - RESIZE_HANDLE_SIZE,
        note.y + note.height - RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
    )
}

/// Surface-local rect of a note's delete button.
#[must_use]
pub fn delete_button_rect(note: &StickyNote) -> Rect {
    Rect::new(
        note.x + note.width - NOTE_PADDING - DELETE_BUTTON_SIZE,
        note.y + NOTE_PADDING,
        DELETE_BUTTON_SIZE,
        DELETE_BUTTON_SIZE,
    )
}
