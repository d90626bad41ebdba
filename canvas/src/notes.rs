//! Sticky note model and the store that owns every note.
//!
//! Notes live in an ordered `Vec`: insertion order is stacking order and is
//! preserved verbatim through snapshots. The store is local-only; nothing in
//! here performs I/O. Persistence happens when the host saves a snapshot.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    NOTE_DEFAULT_HEIGHT, NOTE_DEFAULT_WIDTH, NOTE_SPAWN_MIN_X, NOTE_SPAWN_MIN_Y, NOTE_SPAWN_SPAN_X, NOTE_SPAWN_SPAN_Y,
};
use crate::geom::{Point, Rect, Size};

/// Unique, never-reused note identifier (a millisecond timestamp, bumped to stay monotonic).
pub type NoteId = u64;

/// The fixed five-entry note palette. Serialized as the CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteColor {
    #[serde(rename = "#ffeb3b")]
    Yellow,
    #[serde(rename = "#ff9800")]
    Orange,
    #[serde(rename = "#4caf50")]
    Green,
    #[serde(rename = "#2196f3")]
    Blue,
    #[serde(rename = "#e91e63")]
    Pink,
}

impl NoteColor {
    /// Every palette entry, in draw-index order.
    pub const PALETTE: [NoteColor; 5] = [Self::Yellow, Self::Orange, Self::Green, Self::Blue, Self::Pink];

    /// CSS hex string for this color.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Yellow => "#ffeb3b",
            Self::Orange => "#ff9800",
            Self::Green => "#4caf50",
            Self::Blue => "#2196f3",
            Self::Pink => "#e91e63",
        }
    }
}

/// A positioned, resizable, colored text note. Field names match the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: NoteId,
    pub text: String,
    /// Left edge in surface-local units.
    pub x: f64,
    /// Top edge in surface-local units.
    pub y: f64,
    pub color: NoteColor,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    NOTE_DEFAULT_WIDTH
}

fn default_height() -> f64 {
    NOTE_DEFAULT_HEIGHT
}

impl StickyNote {
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Ordered, exclusively-owned collection of notes.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<StickyNote>,
    last_id: NoteId,
}

impl NoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note from `text`, placed and colored from `rng`.
    ///
    /// Returns `None` without touching the store when the trimmed text is
    /// empty. The text itself is stored as given.
    pub fn create<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> Option<&StickyNote> {
        if text.trim().is_empty() {
            return None;
        }

        let x = NOTE_SPAWN_MIN_X + rng.random::<f64>() * NOTE_SPAWN_SPAN_X;
        let y = NOTE_SPAWN_MIN_Y + rng.random::<f64>() * NOTE_SPAWN_SPAN_Y;
        let color = NoteColor::PALETTE[rng.random_range(0..NoteColor::PALETTE.len())];

        let note = StickyNote {
            id: self.next_id(),
            text: text.to_owned(),
            x,
            y,
            color,
            width: NOTE_DEFAULT_WIDTH,
            height: NOTE_DEFAULT_HEIGHT,
        };
        self.notes.push(note);
        self.notes.last()
    }

    /// Remove a note, returning it if it was present.
    pub fn delete(&mut self, id: NoteId) -> Option<StickyNote> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Replace a note's text. Returns false if the note doesn't exist.
    pub fn update_text(&mut self, id: NoteId, text: &str) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        text.clone_into(&mut note.text);
        true
    }

    /// Move a note's origin. Returns false if the note doesn't exist.
    pub fn reposition(&mut self, id: NoteId, x: f64, y: f64) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.x = x;
        note.y = y;
        true
    }

    /// Set a note's size. Returns false if the note doesn't exist.
    pub fn resize(&mut self, id: NoteId, width: f64, height: f64) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.width = width;
        note.height = height;
        true
    }

    /// Remove every note, returning how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.notes.len();
        self.notes.clear();
        removed
    }

    /// Replace all notes with a restored sequence, preserving its order.
    ///
    /// Future ids are allocated above the largest restored id.
    pub fn load(&mut self, notes: Vec<StickyNote>) {
        if let Some(max) = notes.iter().map(|n| n.id).max() {
            self.last_id = self.last_id.max(max);
        }
        self.notes = notes;
    }

    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&StickyNote> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// All notes in stacking order (bottom first).
    #[must_use]
    pub fn notes(&self) -> &[StickyNote] {
        &self.notes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn get_mut(&mut self, id: NoteId) -> Option<&mut StickyNote> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    fn next_id(&mut self) -> NoteId {
        let id = now_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
