//! SVG materialization of a paint invocation.
//!
//! [`SvgSurface`] implements [`Surface`] by keeping the translate/rotate
//! stack as `glam` affines and flattening every path point through the
//! current transform at record time, so the emitted document contains
//! plain absolute coordinates. Each `stroke` becomes one `<path>` element
//! (a lone full-circle arc becomes a `<circle>`), each `fill_rect` a
//! `<rect>`.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use glam::{DAffine2, DMat2, DVec2, dvec2};

use crate::surface::Surface;
use crate::types::Size;

/// Initial stroke and fill color, per the canvas contract.
const DEFAULT_COLOR: &str = "black";

/// A [`Surface`] that materializes the drawing as an SVG document.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    transform: DAffine2,
    stack: Vec<DAffine2>,
    path: Vec<PathSeg>,
    stroke_color: String,
    fill_color: String,
    elements: Vec<String>,
}

/// A path segment, already flattened into absolute surface coordinates.
#[derive(Debug, Clone)]
enum PathSeg {
    Move(DVec2),
    Line(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
        /// Rotation of the local frame at record time; arc angles are
        /// relative to it.
        rotation: f64,
    },
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
            path: Vec::new(),
            stroke_color: DEFAULT_COLOR.to_string(),
            fill_color: DEFAULT_COLOR.to_string(),
            elements: Vec::new(),
        }
    }

    /// Write out the finished document.
    pub fn finish(self) -> String {
        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="fraktur" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
            self.size.width, self.size.height, self.size.width, self.size.height
        )
        .unwrap();
        for element in &self.elements {
            writeln!(svg, "  {element}").unwrap();
        }
        writeln!(svg, "</svg>").unwrap();
        svg
    }

    /// Rotation of the current frame, extracted from its first column.
    fn frame_rotation(&self) -> f64 {
        let x_axis = self.transform.matrix2.x_axis;
        x_axis.y.atan2(x_axis.x)
    }

    fn point(&self, x: f64, y: f64) -> DVec2 {
        self.transform.transform_point2(dvec2(x, y))
    }

    fn path_data(&self) -> String {
        let mut d = String::new();
        for seg in &self.path {
            match seg {
                PathSeg::Move(p) => {
                    write_cmd(&mut d, 'M', *p);
                }
                PathSeg::Line(p) => {
                    write_cmd(&mut d, 'L', *p);
                }
                PathSeg::Arc {
                    center,
                    radius,
                    start,
                    end,
                    anticlockwise,
                    rotation,
                } => {
                    let a0 = start + rotation;
                    let from = arc_point(*center, *radius, a0);
                    // An arc starts a subpath of its own unless a point is
                    // already current, in which case it connects.
                    let cmd = if d.is_empty() { 'M' } else { 'L' };
                    write_cmd(&mut d, cmd, from);
                    let sweep = if *anticlockwise { 0 } else { 1 };
                    if is_full_sweep(*start, *end) {
                        // A full circle needs two arc halves: a single arc
                        // segment with coincident endpoints renders as
                        // nothing.
                        let mid = arc_point(*center, *radius, a0 + PI);
                        write_arc(&mut d, *radius, 1, sweep, mid);
                        write_arc(&mut d, *radius, 1, sweep, from);
                    } else {
                        let delta = if *anticlockwise {
                            -((a0 - (end + rotation)).rem_euclid(TAU))
                        } else {
                            ((end + rotation) - a0).rem_euclid(TAU)
                        };
                        let to = arc_point(*center, *radius, a0 + delta);
                        let large = (delta.abs() > PI) as u8;
                        write_arc(&mut d, *radius, large, sweep, to);
                    }
                }
            }
        }
        d
    }

    /// A lone full-circle arc, if that is the entire current path.
    fn lone_circle(&self) -> Option<(DVec2, f64)> {
        match self.path.as_slice() {
            [PathSeg::Arc {
                center,
                radius,
                start,
                end,
                ..
            }] if is_full_sweep(*start, *end) => Some((*center, *radius)),
            _ => None,
        }
    }
}

impl Surface for SvgSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(transform) => self.transform = transform,
            None => {
                crate::log::warn!("restore without a matching save, ignoring");
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * DAffine2::from_translation(dvec2(dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform = self.transform * DAffine2::from_angle(degrees.to_radians());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.point(x, y);
        self.path.push(PathSeg::Move(p));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.point(x, y);
        self.path.push(PathSeg::Line(p));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        let center = self.point(cx, cy);
        let rotation = self.frame_rotation();
        self.path.push(PathSeg::Arc {
            center,
            radius,
            start,
            end,
            anticlockwise,
            rotation,
        });
    }

    fn set_stroke_color(&mut self, color: &str) {
        let color = color.trim();
        if !color.is_empty() {
            self.stroke_color = color.to_string();
        }
    }

    fn set_fill_color(&mut self, color: &str) {
        let color = color.trim();
        if !color.is_empty() {
            self.fill_color = color.to_string();
        }
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let element = if let Some((center, radius)) = self.lone_circle() {
            format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}"/>"#,
                center.x, center.y, radius, self.stroke_color
            )
        } else {
            format!(
                r#"<path d="{}" fill="none" stroke="{}"/>"#,
                self.path_data(),
                self.stroke_color
            )
        };
        self.elements.push(element);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let element = if self.transform.matrix2.abs_diff_eq(DMat2::IDENTITY, 1e-12) {
            let p = self.point(x, y);
            format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                p.x, p.y, width, height, self.fill_color
            )
        } else {
            // The frame is rotated; carry the whole transform so the rect
            // stays axis-aligned in its local frame.
            let m = self.transform.matrix2;
            let t = self.transform.translation;
            format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" transform="matrix({:.4} {:.4} {:.4} {:.4} {:.4} {:.4})"/>"#,
                x, y, width, height, self.fill_color,
                m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y
            )
        };
        self.elements.push(element);
    }
}

fn arc_point(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + radius * dvec2(angle.cos(), angle.sin())
}

fn is_full_sweep(start: f64, end: f64) -> bool {
    (end - start).abs() >= TAU - 1e-9
}

fn write_cmd(d: &mut String, cmd: char, p: DVec2) {
    if !d.is_empty() {
        d.push(' ');
    }
    write!(d, "{cmd} {:.2},{:.2}", p.x, p.y).unwrap();
}

fn write_arc(d: &mut String, radius: f64, large: u8, sweep: u8, to: DVec2) {
    write!(
        d,
        " A {radius:.2} {radius:.2} 0 {large} {sweep} {:.2},{:.2}",
        to.x, to.y
    )
    .unwrap();
}
