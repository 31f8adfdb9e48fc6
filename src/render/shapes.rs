//! Per-node shape procedures.
//!
//! Each shape traces itself into the surface's current local frame: the
//! caller has already translated and rotated to the node's origin, so a
//! procedure issues path commands relative to `(0, 0)` and must not touch
//! the transform stack itself. Stroking and styling are the caller's job.
//!
//! All three shapes share an orientation convention: they grow from the
//! local origin along the negative-Y axis, so that under the per-branch
//! rotation they all lean the same way.

use enum_dispatch::enum_dispatch;

use crate::surface::Surface;

/// One shape's path procedure, parametrized by the node's extent
/// (segment length, circle diameter, or square side).
#[enum_dispatch]
pub trait DrawShape {
    fn trace(&self, surface: &mut dyn Surface, extent: f64);
}

/// A straight segment of length `extent` along local negative-Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line;

impl DrawShape for Line {
    fn trace(&self, surface: &mut dyn Surface, extent: f64) {
        surface.move_to(0.0, 0.0);
        surface.line_to(0.0, -extent);
    }
}

/// A full circle of diameter `extent`, tangent to the local origin and
/// growing upward in the rotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle;

impl DrawShape for Circle {
    fn trace(&self, surface: &mut dyn Surface, extent: f64) {
        let radius = extent / 2.0;
        surface.arc(0.0, -radius, radius, 0.0, std::f64::consts::TAU, true);
    }
}

/// A square of side `extent`, centered horizontally on the local origin
/// and extending along negative-Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square;

impl DrawShape for Square {
    fn trace(&self, surface: &mut dyn Surface, extent: f64) {
        // Not a rect primitive: the frame is rotated per branch, so each
        // side is traced explicitly to line up with the other shapes'
        // orientation convention.
        let half = extent / 2.0;
        surface.move_to(0.0, 0.0);
        surface.line_to(half, 0.0);
        surface.line_to(half, -extent);
        surface.line_to(0.0, -extent);
        surface.line_to(-half, -extent);
        surface.line_to(-half, 0.0);
        surface.line_to(0.0, 0.0);
    }
}

/// The selectable per-node drawing procedure.
#[enum_dispatch(DrawShape)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Circle,
    Square,
}

impl ShapeKind {
    /// Map a raw shape identifier to a procedure. Unrecognized values
    /// (including the empty string) select [`Line`].
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "circle" => Circle.into(),
            "square" => Square.into(),
            _ => Line.into(),
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Line.into()
    }
}
