//! Input model: interaction mode, pointer buttons, normalized pointer events,
//! and the per-gesture capture token.
//!
//! `PointerEvent` is the only shape pointer input takes inside the engine.
//! Mouse and touch events are reduced to it by the same constructors, so both
//! go through identical viewport → surface-local conversion afterwards.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Which subsystem receives pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The surface receives pointer events; notes are inert and faded.
    #[default]
    Draw,
    /// Notes receive pointer events for drag, resize, and delete; the surface is inert.
    Note,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or a touch contact).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A pointer sample in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Viewport position (`clientX`, `clientY`).
    pub client: Point,
    pub button: Button,
}

impl PointerEvent {
    #[must_use]
    pub fn mouse(client: Point, button: Button) -> Self {
        Self { client, button }
    }

    /// Build an event from a touch list; the first contact acts as the primary button.
    ///
    /// Returns `None` for an empty touch list.
    #[must_use]
    pub fn touch(touches: &[Point]) -> Option<Self> {
        touches.first().map(|&client| Self { client, button: Button::Primary })
    }
}

/// Where a gesture's move/up listeners are registered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureScope {
    /// Document-level listeners (note drag).
    Document,
    /// Window-level listeners (note resize).
    Window,
}

/// Proof that a gesture holds host-side listeners.
///
/// Not `Clone`: each acquired capture is released exactly once, by value.
#[derive(Debug, PartialEq, Eq)]
pub struct PointerCapture {
    scope: CaptureScope,
}

impl PointerCapture {
    pub(crate) fn acquire(scope: CaptureScope) -> Self {
        Self { scope }
    }

    #[must_use]
    pub fn scope(&self) -> CaptureScope {
        self.scope
    }

    pub(crate) fn release(self) -> CaptureScope {
        self.scope
    }
}
