//! Raster surface: the fixed-size bitmap freehand strokes are burned into.
//!
//! The surface keeps no stroke history. Its pixels change in exactly three
//! ways, all crate-private and reached through [`crate::engine::EngineCore`]:
//! a stroke segment from the drawing engine, a full clear, or a snapshot
//! restore that decodes an image over it. Hosts get read-only access to the
//! pixmap for blitting and to the PNG encoder for snapshots.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::consts::{STROKE_RGBA, STROKE_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::geom::Point;

/// Failures while allocating, encoding, or decoding a surface.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("cannot allocate {width}x{height} surface")]
    Allocate { width: u32, height: u32 },
    #[error("PNG encode failed: {0}")]
    Encode(String),
    #[error("PNG decode failed: {0}")]
    Decode(String),
}

/// Process-wide stroke style. The cap and join are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in surface units.
    pub width: f32,
    /// Straight (non-premultiplied) RGBA color.
    pub rgba: [u8; 4],
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: STROKE_WIDTH, rgba: STROKE_RGBA }
    }
}

/// A fixed-size RGBA bitmap. Transparent pixels are background.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a blank surface at the native 800×400 size.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Allocate`] if the pixmap cannot be allocated.
    pub fn new() -> Result<Self, RasterError> {
        Self::with_size(SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    /// Allocate a blank surface of an arbitrary size.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Allocate`] for zero or oversized dimensions.
    pub fn with_size(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::Allocate { width, height })?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read-only view of the backing pixmap (premultiplied RGBA).
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Alpha of the pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        // `Pixmap::pixel` only bounds-checks the flat index, so x past the row wraps.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }

    /// Number of non-background pixels.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    /// Whether every pixel is background.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    /// Encode the surface as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))
    }

    /// Stroke one straight segment with round caps.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b, a] = style.rgba;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke { width: style.width, line_cap: LineCap::Round, line_join: LineJoin::Round, ..Stroke::default() };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Reset every pixel to background.
    pub(crate) fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Decode a PNG and draw it over the whole surface, replacing prior content.
    ///
    /// Images of a different size are scaled to the surface's native dimensions.
    /// On a decode error the surface is left untouched.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn restore_png(&mut self, bytes: &[u8]) -> Result<(), RasterError> {
        let decoded = Pixmap::decode_png(bytes).map_err(|e| RasterError::Decode(e.to_string()))?;

        let transform = if decoded.width() == self.width() && decoded.height() == self.height() {
            Transform::identity()
        } else {
            Transform::from_scale(
                self.width() as f32 / decoded.width() as f32,
                self.height() as f32 / decoded.height() as f32,
            )
        };

        self.clear();
        self.pixmap.draw_pixmap(0, 0, decoded.as_ref(), &PixmapPaint::default(), transform, None);
        Ok(())
    }
}
