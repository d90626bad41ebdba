use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::draw::DrawingEngine;
use crate::drag::DragController;
use crate::geom::{Point, Rect};
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, CaptureScope, Mode, PointerEvent};
use crate::notes::{NoteId, NoteStore, StickyNote};
use crate::raster::{RasterError, Surface};
use crate::resize::ResizeController;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Surface pixels or note layout changed; repaint.
    RenderNeeded,
    ModeChanged(Mode),
    NoteCreated(StickyNote),
    NoteMoved { id: NoteId, x: f64, y: f64 },
    NoteResized { id: NoteId, width: f64, height: f64 },
    NoteTextChanged { id: NoteId, text: String },
    NoteDeleted { id: NoteId },
    NotesCleared,
    SurfaceCleared,
    /// Register move/up listeners at `scope` for the gesture that just started.
    CaptureAcquired(CaptureScope),
    /// Remove the listeners registered for the gesture that just ended.
    CaptureReleased(CaptureScope),
}

/// Whiteboard interaction core: mode arbitration and pointer routing.
///
/// Independent of any browser or windowing API; the host forwards raw pointer
/// events in viewport coordinates and applies the returned [`Action`]s.
pub struct EngineCore {
    pub surface: Surface,
    pub pen: DrawingEngine,
    pub notes: NoteStore,
    pub drag: DragController,
    pub resize: ResizeController,
    mode: Mode,
    bounds: Rect,
    rng: Box<dyn RngCore + Send + Sync>,
}

impl EngineCore {
    /// Create an engine with an OS-seeded placement generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the raster surface cannot be allocated.
    pub fn new() -> Result<Self, RasterError> {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an engine whose note placement and color draws come from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the raster surface cannot be allocated.
    pub fn with_rng<R: RngCore + Send + Sync + 'static>(rng: R) -> Result<Self, RasterError> {
        let surface = Surface::new()?;
        let bounds = Rect::new(0.0, 0.0, f64::from(surface.width()), f64::from(surface.height()));
        Ok(Self {
            surface,
            pen: DrawingEngine::default(),
            notes: NoteStore::new(),
            drag: DragController::default(),
            resize: ResizeController::default(),
            mode: Mode::default(),
            bounds,
            rng: Box::new(rng),
        })
    }

    // --- Mode ---

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch interaction mode.
    ///
    /// Entering Draw ends any drag or resize (releasing its capture); entering
    /// Note ends any stroke. Setting the current mode again does nothing.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if mode == self.mode {
            return Vec::new();
        }
        let mut actions = Vec::new();
        match mode {
            Mode::Draw => self.end_gestures(&mut actions),
            Mode::Note => {
                self.pen.end();
            }
        }
        self.mode = mode;
        actions.push(Action::ModeChanged(mode));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Layout ---

    /// Update the surface's bounding client rect (after layout or scroll).
    pub fn set_bounds(&mut self, rect: Rect) {
        self.bounds = rect;
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, ev: PointerEvent) -> Vec<Action> {
        if ev.button != Button::Primary {
            return Vec::new();
        }
        let local = self.bounds.to_local(ev.client);
        match self.mode {
            Mode::Draw => {
                self.pen.begin(local);
                Vec::new()
            }
            Mode::Note => self.grab_note(local),
        }
    }

    /// Pointer moved anywhere in the document.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let local = self.bounds.to_local(client);
        match self.mode {
            Mode::Draw => {
                if self.pen.extend(local, &mut self.surface) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            Mode::Note => {
                if let Some((id, size)) = self.resize.track(local, &mut self.notes) {
                    return vec![Action::NoteResized { id, width: size.width, height: size.height }, Action::RenderNeeded];
                }
                if let Some((id, pos)) = self.drag.track(local, self.bounds.size(), &mut self.notes) {
                    return vec![Action::NoteMoved { id, x: pos.x, y: pos.y }, Action::RenderNeeded];
                }
                Vec::new()
            }
        }
    }

    /// Pointer released anywhere in the document.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.pen.end();
        let mut actions = Vec::new();
        self.end_gestures(&mut actions);
        actions
    }

    /// Pointer left the drawing surface. Ends the stroke; gestures keep tracking.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.pen.end();
        Vec::new()
    }

    /// The host cancelled the pointer stream (e.g. `touchcancel`).
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    fn grab_note(&mut self, local: Point) -> Vec<Action> {
        if self.drag.is_active() || self.resize.is_active() {
            return Vec::new();
        }
        let Some(hit) = hit_test(local, &self.notes) else {
            return Vec::new();
        };
        let Some(note) = self.notes.get(hit.note_id) else {
            return Vec::new();
        };
        match hit.part {
            HitPart::DeleteButton => self.delete_note(hit.note_id),
            HitPart::ResizeHandle => self
                .resize
                .start(note, local)
                .map(|scope| vec![Action::CaptureAcquired(scope)])
                .unwrap_or_default(),
            HitPart::Body => self
                .drag
                .start(note, local)
                .map(|scope| vec![Action::CaptureAcquired(scope), Action::RenderNeeded])
                .unwrap_or_default(),
        }
    }

    fn end_gestures(&mut self, actions: &mut Vec<Action>) {
        let released: Vec<CaptureScope> = self.drag.finish().into_iter().chain(self.resize.finish()).collect();
        if released.is_empty() {
            return;
        }
        actions.extend(released.into_iter().map(Action::CaptureReleased));
        actions.push(Action::RenderNeeded);
    }

    fn end_gestures_on(&mut self, id: NoteId, actions: &mut Vec<Action>) {
        if self.drag.active_note() == Some(id) {
            actions.extend(self.drag.finish().map(Action::CaptureReleased));
        }
        if self.resize.active_note() == Some(id) {
            actions.extend(self.resize.finish().map(Action::CaptureReleased));
        }
    }

    // --- Notes ---

    /// Create a note. Empty (after trimming) text is ignored.
    pub fn add_note(&mut self, text: &str) -> Vec<Action> {
        match self.notes.create(text, &mut *self.rng) {
            Some(note) => vec![Action::NoteCreated(note.clone()), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn delete_note(&mut self, id: NoteId) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_gestures_on(id, &mut actions);
        if self.notes.delete(id).is_some() {
            actions.push(Action::NoteDeleted { id });
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    pub fn set_note_text(&mut self, id: NoteId, text: &str) -> Vec<Action> {
        if self.notes.update_text(id, text) {
            vec![Action::NoteTextChanged { id, text: text.to_owned() }, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn clear_notes(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_gestures(&mut actions);
        self.notes.clear_all();
        actions.push(Action::NotesCleared);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace the note set with a restored sequence.
    pub fn load_notes(&mut self, notes: Vec<StickyNote>) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_gestures(&mut actions);
        self.notes.load(notes);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Surface ---

    pub fn clear_surface(&mut self) -> Vec<Action> {
        self.pen.end();
        self.surface.clear();
        vec![Action::SurfaceCleared, Action::RenderNeeded]
    }

    /// Decode a PNG over the surface, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Decode`] if the image is not a valid PNG; the
    /// surface is left unchanged.
    pub fn restore_surface(&mut self, png: &[u8]) -> Result<Vec<Action>, RasterError> {
        self.surface.restore_png(png)?;
        self.pen.end();
        Ok(vec![Action::RenderNeeded])
    }

    /// Encode the surface as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if encoding fails.
    pub fn encode_surface(&self) -> Result<Vec<u8>, RasterError> {
        self.surface.encode_png()
    }

    // --- Queries ---

    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&StickyNote> {
        self.notes.get(id)
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.pen.is_drawing()
    }
}
