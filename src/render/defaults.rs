//! Default parameter values and fixed geometry (all in surface units)

/// Branch angle offset per child, in degrees.
pub const BRANCH_ANGLE: f64 = 30.0;
/// Percent of surface height used for the root extent.
pub const STARTING_LENGTH_PERCENT: f64 = 22.0;
/// Extent multiplier applied at each recursion level.
pub const LENGTH_DECAY: f64 = 0.8;
/// Soft cap on total draw operations, multi-shape painter.
pub const MAX_DRAW_COUNT: i64 = 10_000;
/// Soft cap on total draw operations, line-only painter.
pub const MAX_DRAW_COUNT_LINES: i64 = 100_000;
/// Nodes with an extent below this never recurse.
pub const MIN_EXTENT: f64 = 10.0;
/// Side of the square marker filled at each local origin.
pub const ORIGIN_MARKER_SIZE: f64 = 4.0;
/// Upward shift of the root node while origin markers are shown, so the
/// root marker is not clipped by the bottom edge.
pub const ROOT_INSET: f64 = 4.0;
