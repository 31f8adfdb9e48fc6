//! Painter registration.
//!
//! The host rendering system looks painters up by a fixed identifier: a
//! style rule referencing the identifier triggers `paint` on every size or
//! parameter change. [`Registry::default`] registers the two painters this
//! crate ships; hosts with their own painters can register those alongside.

use std::collections::HashMap;

use crate::errors::PaintError;
use crate::props::PropertySource;
use crate::render::{self, Variant, config};
use crate::surface::Surface;
use crate::types::Size;

/// Identifier of the multi-shape painter.
pub const FRACTALS: &str = "fractals";
/// Identifier of the line-only painter.
pub const FRACTAL_LINES: &str = "fractal-lines";

/// A registered paint procedure.
pub trait Painter {
    /// Property names this painter reads from the parameter source.
    fn input_properties(&self) -> &'static [&'static str];

    /// Paint into `surface`. Never fails: malformed or missing properties
    /// degrade to defaults during normalization.
    fn paint(&self, surface: &mut dyn Surface, size: Size, props: &dyn PropertySource);
}

/// The fractal painter, in its multi-shape or line-only form.
#[derive(Debug, Clone, Copy)]
pub struct FractalPainter {
    variant: Variant,
}

impl FractalPainter {
    /// The multi-shape form registered as [`FRACTALS`].
    pub fn shapes() -> Self {
        Self {
            variant: Variant::Shapes,
        }
    }

    /// The line-only form registered as [`FRACTAL_LINES`].
    pub fn lines() -> Self {
        Self {
            variant: Variant::Lines,
        }
    }
}

impl Painter for FractalPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        match self.variant {
            Variant::Shapes => &[
                config::PROP_COLORS,
                config::PROP_ANGLE,
                config::PROP_STARTING_LENGTH_PERCENT,
                config::PROP_NEXT_LINE_SIZE,
                config::PROP_SHAPE,
                config::PROP_MAX_DRAW_COUNT,
                config::PROP_DEBUG_TO_CONSOLE,
                config::PROP_SHOW_ORIGIN,
            ],
            Variant::Lines => &[
                config::PROP_COLORS,
                config::PROP_ANGLE,
                config::PROP_STARTING_LENGTH_PERCENT,
                config::PROP_NEXT_LINE_SIZE,
                config::PROP_MAX_DRAW_COUNT,
                config::PROP_DEBUG_TO_CONSOLE,
            ],
        }
    }

    fn paint(&self, surface: &mut dyn Surface, size: Size, props: &dyn PropertySource) {
        render::paint(surface, size, props, self.variant);
    }
}

/// Identifier to painter map.
pub struct Registry {
    painters: HashMap<String, Box<dyn Painter>>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(FRACTALS, Box::new(FractalPainter::shapes()));
        registry.register(FRACTAL_LINES, Box::new(FractalPainter::lines()));
        registry
    }
}

impl Registry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            painters: HashMap::new(),
        }
    }

    /// Register `painter` under `ident`, replacing any previous one.
    pub fn register(&mut self, ident: impl Into<String>, painter: Box<dyn Painter>) {
        self.painters.insert(ident.into(), painter);
    }

    pub fn get(&self, ident: &str) -> Option<&dyn Painter> {
        self.painters.get(ident).map(|painter| &**painter)
    }

    /// Registered identifiers, sorted.
    pub fn idents(&self) -> Vec<&str> {
        let mut idents: Vec<&str> = self.painters.keys().map(String::as_str).collect();
        idents.sort_unstable();
        idents
    }

    /// Dispatch a paint request to the painter registered as `ident`.
    pub fn paint(
        &self,
        ident: &str,
        surface: &mut dyn Surface,
        size: Size,
        props: &dyn PropertySource,
    ) -> Result<(), PaintError> {
        let painter = self.get(ident).ok_or_else(|| PaintError::UnknownPainter {
            name: ident.to_string(),
            known: self.idents().join(", "),
        })?;
        painter.paint(surface, size, props);
        Ok(())
    }
}
