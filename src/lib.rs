//! A CSS Paint API style fractal renderer.
//!
//! Painters registered under fixed identifiers stroke a recursive
//! branching figure into a 2D drawing surface, driven by a handful of
//! string properties. The built-in [`SvgSurface`] materializes an
//! invocation as a standalone SVG document; any host can bring its own
//! sink by implementing [`Surface`].

pub mod errors;
pub mod log;
pub mod props;
pub mod registry;
pub mod render;
pub mod surface;
pub mod types;

pub use errors::PaintError;
pub use props::{PropertyMap, PropertySource};
pub use registry::{FRACTAL_LINES, FRACTALS, FractalPainter, Painter, Registry};
pub use render::{RenderConfig, ShapeKind, SvgSurface, Variant};
pub use surface::{DrawOp, Recorder, Surface};
pub use types::Size;

/// Paint into an arbitrary surface through the default registry.
pub fn paint(
    ident: &str,
    surface: &mut dyn Surface,
    size: Size,
    props: &dyn PropertySource,
) -> Result<(), PaintError> {
    Registry::default().paint(ident, surface, size, props)
}

/// Paint into the built-in SVG surface and return the document.
///
/// Returns an error only for an unregistered identifier; painting itself
/// never fails.
pub fn paint_svg(
    ident: &str,
    size: Size,
    props: &dyn PropertySource,
) -> Result<String, miette::Report> {
    let mut surface = SvgSurface::new(size);
    paint(ident, &mut surface, size, props)?;
    Ok(surface.finish())
}
