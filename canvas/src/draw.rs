//! Drawing engine: turns a pointer stream into strokes on the raster surface.
//!
//! The engine owns a single tagged [`PenState`]. A stroke starts with
//! [`DrawingEngine::begin`], every [`DrawingEngine::extend`] strokes one
//! segment immediately, and [`DrawingEngine::end`] returns to idle. Mode and
//! button gating are applied by [`crate::engine::EngineCore`], the only
//! caller; hosts can read the pen state but not drive it.
//!
//! ```compile_fail
//! use canvas::engine::EngineCore;
//! use canvas::geom::Point;
//!
//! let mut core = EngineCore::new().unwrap();
//! core.pen.begin(Point::new(0.0, 0.0));
//! ```

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::geom::Point;
use crate::raster::{StrokeStyle, Surface};

/// Whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PenState {
    /// No stroke; `extend` is a no-op.
    #[default]
    Idle,
    /// A stroke is active.
    Drawing {
        /// Surface-local position the next segment starts from.
        last: Point,
    },
}

/// Freehand stroke renderer.
#[derive(Debug, Default)]
pub struct DrawingEngine {
    state: PenState,
    style: StrokeStyle,
}

impl DrawingEngine {
    #[must_use]
    pub fn new(style: StrokeStyle) -> Self {
        Self { state: PenState::Idle, style }
    }

    #[must_use]
    pub fn state(&self) -> PenState {
        self.state
    }

    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PenState::Drawing { .. })
    }

    /// Start a stroke at `at`. Returns `false` (and keeps the current path) if
    /// a stroke is already active.
    pub(crate) fn begin(&mut self, at: Point) -> bool {
        if self.is_drawing() {
            return false;
        }
        self.state = PenState::Drawing { last: at };
        true
    }

    /// Stroke a segment from the last point to `to`. Returns `true` if the
    /// surface was painted.
    pub(crate) fn extend(&mut self, to: Point, surface: &mut Surface) -> bool {
        let PenState::Drawing { last } = self.state else {
            return false;
        };
        surface.stroke_segment(last, to, &self.style);
        self.state = PenState::Drawing { last: to };
        true
    }

    /// Finish the current stroke. Returns `true` if one was active.
    pub(crate) fn end(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.state = PenState::Idle;
        was_drawing
    }
}
