//! The recursive fractal renderer.
//!
//! This module is organized into submodules:
//! - `config`: Parameter normalization into an immutable `RenderConfig`
//! - `defaults`: Default parameter values and fixed geometry
//! - `shapes`: The selectable per-node shape procedures
//! - `svg`: A `Surface` implementation that materializes SVG
//!
//! The traverser itself lives here: a depth-first binary recursion that
//! strokes one shape per node, cycling stroke colors by draw index, until
//! the extent shrinks below the minimum or the draw-count cap trips.

pub mod config;
pub mod defaults;
pub mod shapes;
pub mod svg;

pub use config::{RenderConfig, Variant};
pub use shapes::{DrawShape, ShapeKind};
pub use svg::SvgSurface;

use std::time::{Duration, Instant};

use crate::props::PropertySource;
use crate::surface::Surface;
use crate::types::Size;

/// Paint one fractal into `surface`. Runs to completion: the whole
/// traversal happens before this returns, and nothing is retained across
/// invocations.
pub fn paint(surface: &mut dyn Surface, size: Size, props: &dyn PropertySource, variant: Variant) {
    let started = Instant::now();
    let config = RenderConfig::normalize(props, variant);
    if config.debug {
        report_start(size, props);
    }

    let (x, y) = config.root_position(size);
    let length = config.root_length(size);
    let mut traversal = Traversal {
        config: &config,
        draw_count: 0,
    };
    traversal.draw_node(surface, x, y, length, 0.0);

    if config.debug {
        report_finish(traversal.draw_count, started.elapsed());
    }
}

/// State scoped to a single paint invocation.
struct Traversal<'a> {
    config: &'a RenderConfig,
    /// Total nodes drawn so far; drives both termination and color
    /// cycling. Monotonic within the traversal.
    draw_count: i64,
}

impl Traversal<'_> {
    /// Draw one node at `(x, y)` in the parent's local frame, then its two
    /// children. The surface's transform stack absorbs the accumulated
    /// rotation and translation, so every node's geometry stays a fixed
    /// local path regardless of depth.
    fn draw_node(&mut self, surface: &mut dyn Surface, x: f64, y: f64, extent: f64, angle: f64) {
        surface.begin_path();
        surface.save();
        surface.translate(x, y);
        surface.rotate(angle);

        let color = &self.config.colors[self.draw_count as usize % self.config.colors.len()];
        surface.set_stroke_color(color);
        self.config.shape.trace(surface, extent);
        surface.stroke();

        // Helps with debugging when adding new shapes.
        if self.config.show_origin {
            surface.set_fill_color(color);
            surface.fill_rect(
                0.0,
                0.0,
                defaults::ORIGIN_MARKER_SIZE,
                defaults::ORIGIN_MARKER_SIZE,
            );
        }

        self.draw_count += 1;
        // The cap is a soft bound: both children are launched before it is
        // rechecked, so the final count can overshoot by the number of
        // in-flight branches.
        if self.draw_count <= self.config.max_draw_count && extent >= defaults::MIN_EXTENT {
            let child_extent = extent * self.config.length_decay;
            self.draw_node(surface, 0.0, -extent, child_extent, -self.config.branch_angle);
            self.draw_node(surface, 0.0, -extent, child_extent, self.config.branch_angle);
        }

        surface.restore();
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report_start(size: Size, props: &dyn PropertySource) {
    crate::log::debug!(%size, "starting fractal paint");
    crate::log::debug!(
        colors = props.get(config::PROP_COLORS),
        angle = props.get(config::PROP_ANGLE),
        starting_length_percent = props.get(config::PROP_STARTING_LENGTH_PERCENT),
        next_line_size = props.get(config::PROP_NEXT_LINE_SIZE),
        shape = props.get(config::PROP_SHAPE),
        max_draw_count = props.get(config::PROP_MAX_DRAW_COUNT),
        show_origin = props.get(config::PROP_SHOW_ORIGIN),
        "raw properties"
    );
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn report_finish(draw_count: i64, elapsed: Duration) {
    crate::log::debug!(
        draw_count,
        elapsed_ms = elapsed.as_millis() as u64,
        "finished fractal paint"
    );
}
