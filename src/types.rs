//! Small shared value types.

use std::fmt;

/// Dimensions of the target drawing region, in surface units.
///
/// Read-only for the duration of a paint invocation; the host hands a fresh
/// one to every `paint` call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
