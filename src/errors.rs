//! Error types for the painter-registry boundary.
//!
//! Painting itself never fails: malformed parameters degrade to defaults
//! during normalization. The only fallible operation is dispatching a
//! paint request to a registered identifier.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from [`Registry`](crate::Registry) dispatch.
#[derive(Error, Diagnostic, Debug)]
pub enum PaintError {
    #[error("no painter registered as {name:?}")]
    #[diagnostic(
        code(fraktur::registry::unknown_painter),
        help("registered painters: {known}")
    )]
    UnknownPainter {
        name: String,
        /// Comma-separated list of identifiers the registry does know.
        known: String,
    },
}
