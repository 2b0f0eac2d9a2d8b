//! Screen ⇄ canvas coordinate mapping.
//!
//! Node positions live in canvas space, which is pan/zoom independent.
//! Pointer events arrive in screen space; the mapper converts between
//! the two given the current viewport transform. Pure functions, no
//! failure mode — the canvas is unbounded, so every point is valid.

use crate::model::Position;

/// A point in screen (pixel) space, relative to the canvas element origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The current pan offset and zoom scale of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Pan offset in screen pixels.
    pub pan_x: f32,
    pub pan_y: f32,
    /// Zoom scale. 1.0 = no zoom. Always positive.
    pub zoom: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewportTransform {
    /// Map a screen point to canvas coordinates.
    pub fn to_canvas(&self, p: ScreenPoint) -> Position {
        Position {
            x: (p.x - self.pan_x) / self.zoom,
            y: (p.y - self.pan_y) / self.zoom,
        }
    }

    /// Map a canvas position back to screen coordinates (for the
    /// rendering surface; exact inverse of `to_canvas`).
    pub fn to_screen(&self, p: Position) -> ScreenPoint {
        ScreenPoint {
            x: p.x * self.zoom + self.pan_x,
            y: p.y * self.zoom + self.pan_y,
        }
    }
}
