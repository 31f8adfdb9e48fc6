//! Parameter normalization.
//!
//! Turns the raw string properties from a [`PropertySource`] into an
//! immutable [`RenderConfig`], once per paint invocation. Normalization
//! never fails: every malformed or missing value degrades to a documented
//! default, because this is a best-effort visual renderer, not a strict
//! parser.

use crate::props::PropertySource;
use crate::types::Size;

use super::defaults;
use super::shapes::ShapeKind;

pub const PROP_COLORS: &str = "colors";
pub const PROP_ANGLE: &str = "angle";
pub const PROP_STARTING_LENGTH_PERCENT: &str = "starting-length-percent";
pub const PROP_NEXT_LINE_SIZE: &str = "next-line-size";
pub const PROP_SHAPE: &str = "shape";
pub const PROP_MAX_DRAW_COUNT: &str = "max-draw-count";
pub const PROP_DEBUG_TO_CONSOLE: &str = "debug-to-console";
pub const PROP_SHOW_ORIGIN: &str = "show-origin";

/// Which of the two registered painters is running.
///
/// Both are specializations of one core: the line-only painter pins the
/// shape to [`ShapeKind::Line`], never shows origin markers (and therefore
/// never insets the root), and carries a higher default draw cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Shapes,
    Lines,
}

/// Immutable render configuration, created once per paint call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Angle offset applied to each child branch, in degrees.
    pub branch_angle: f64,
    /// Percent of surface height used for the root extent, in [5, 95].
    pub starting_length_percent: f64,
    /// Extent multiplier per recursion level, in [0.1, 0.9].
    pub length_decay: f64,
    /// Soft cap on total draw operations.
    pub max_draw_count: i64,
    /// Stroke colors, cycled by draw index. Never empty; a lone empty
    /// string means the surface keeps its default color throughout.
    pub colors: Vec<String>,
    /// Per-node drawing procedure.
    pub shape: ShapeKind,
    /// Fill a small marker at each node's local origin.
    pub show_origin: bool,
    /// Report traversal timing and counts to the diagnostic sink.
    pub debug: bool,
}

impl RenderConfig {
    /// Normalize raw properties into a config. Never fails.
    pub fn normalize(props: &dyn PropertySource, variant: Variant) -> Self {
        let branch_angle = match parse_leading_int(props.get(PROP_ANGLE)) {
            Some(n) if n != 0 => n as f64,
            _ => defaults::BRANCH_ANGLE,
        };

        let starting_length_percent =
            match parse_leading_int(props.get(PROP_STARTING_LENGTH_PERCENT)) {
                Some(n) if (5..=95).contains(&n) => n as f64,
                _ => defaults::STARTING_LENGTH_PERCENT,
            };

        let length_decay = match parse_leading_float(props.get(PROP_NEXT_LINE_SIZE)) {
            Some(v) if (0.1..=0.9).contains(&v) => v,
            _ => defaults::LENGTH_DECAY,
        };

        let default_cap = match variant {
            Variant::Shapes => defaults::MAX_DRAW_COUNT,
            Variant::Lines => defaults::MAX_DRAW_COUNT_LINES,
        };
        let max_draw_count = match parse_leading_int(props.get(PROP_MAX_DRAW_COUNT)) {
            Some(n) if n != 0 => n,
            _ => default_cap,
        };

        // Colors are space delimited. Splitting the empty string still
        // yields one (empty) entry, which keeps color-cycle indexing
        // defined and makes cycling a visual no-op.
        let colors: Vec<String> = props
            .get(PROP_COLORS)
            .trim()
            .split(' ')
            .map(|s| s.trim().to_string())
            .collect();

        let shape = match variant {
            Variant::Shapes => ShapeKind::from_raw(props.get(PROP_SHAPE)),
            Variant::Lines => ShapeKind::default(),
        };

        let show_origin = match variant {
            Variant::Shapes => is_flag_set(props.get(PROP_SHOW_ORIGIN)),
            Variant::Lines => false,
        };

        Self {
            branch_angle,
            starting_length_percent,
            length_decay,
            max_draw_count,
            colors,
            shape,
            show_origin,
            debug: is_flag_set(props.get(PROP_DEBUG_TO_CONSOLE)),
        }
    }

    /// Root extent, derived from the surface height.
    pub fn root_length(&self, size: Size) -> f64 {
        size.height * self.starting_length_percent / 100.0
    }

    /// Root node position. While origin markers are shown the root shifts
    /// up by a fixed inset so its marker is not clipped; the line-only
    /// painter never insets (`show_origin` is pinned off for it).
    pub fn root_position(&self, size: Size) -> (f64, f64) {
        let inset = if self.show_origin {
            defaults::ROOT_INSET
        } else {
            0.0
        };
        (size.width / 2.0, size.height - inset)
    }
}

fn is_flag_set(raw: &str) -> bool {
    raw.trim() == "1"
}

/// Parse a leading base-10 integer, tolerating trailing garbage the way a
/// lenient host coercion would: skip leading whitespace, take an optional
/// sign and as many digits as follow. `None` when no digits are present.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { -value } else { value })
}

/// Parse a leading float: optional sign, digits with at most one decimal
/// point, optional exponent. `None` when no digits are present.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        i += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    // Exponent only counts if at least one digit follows the marker.
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    s[..i].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropertyMap;

    fn normalize(pairs: &[(&str, &str)]) -> RenderConfig {
        let props: PropertyMap = pairs.iter().copied().collect();
        RenderConfig::normalize(&props, Variant::Shapes)
    }

    #[test]
    fn empty_source_yields_defaults() {
        let config = normalize(&[]);
        assert_eq!(config.branch_angle, 30.0);
        assert_eq!(config.starting_length_percent, 22.0);
        assert_eq!(config.length_decay, 0.8);
        assert_eq!(config.max_draw_count, 10_000);
        assert_eq!(config.colors, vec![String::new()]);
        assert_eq!(config.shape, ShapeKind::default());
        assert!(!config.show_origin);
        assert!(!config.debug);
    }

    #[test]
    fn angle_accepts_any_nonzero_integer() {
        assert_eq!(normalize(&[("angle", "45")]).branch_angle, 45.0);
        assert_eq!(normalize(&[("angle", "-45")]).branch_angle, -45.0);
        assert_eq!(normalize(&[("angle", " 12 ")]).branch_angle, 12.0);
        assert_eq!(normalize(&[("angle", "720")]).branch_angle, 720.0);
        assert_eq!(normalize(&[("angle", "15deg")]).branch_angle, 15.0);
    }

    #[test]
    fn angle_zero_and_garbage_fall_back() {
        assert_eq!(normalize(&[("angle", "0")]).branch_angle, 30.0);
        assert_eq!(normalize(&[("angle", "wide")]).branch_angle, 30.0);
        assert_eq!(normalize(&[("angle", "")]).branch_angle, 30.0);
    }

    #[test]
    fn starting_length_percent_is_clamped_to_default() {
        for (raw, expected) in [
            ("5", 5.0),
            ("95", 95.0),
            ("50", 50.0),
            ("4", 22.0),
            ("96", 22.0),
            ("-10", 22.0),
            ("0", 22.0),
            ("huge", 22.0),
            ("", 22.0),
            ("50.9", 50.0),
        ] {
            assert_eq!(
                normalize(&[("starting-length-percent", raw)]).starting_length_percent,
                expected,
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn length_decay_range_is_inclusive() {
        for (raw, expected) in [
            ("0.5", 0.5),
            ("0.1", 0.1),
            ("0.9", 0.9),
            (".5", 0.5),
            ("0.05", 0.8),
            ("0.95", 0.8),
            ("1", 0.8),
            ("nope", 0.8),
            ("", 0.8),
        ] {
            assert_eq!(
                normalize(&[("next-line-size", raw)]).length_decay,
                expected,
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn max_draw_count_zero_falls_back() {
        assert_eq!(normalize(&[("max-draw-count", "500")]).max_draw_count, 500);
        assert_eq!(normalize(&[("max-draw-count", "0")]).max_draw_count, 10_000);
        assert_eq!(normalize(&[("max-draw-count", "")]).max_draw_count, 10_000);
        // A negative cap parses and is kept; the traversal then stops
        // right after the root node.
        assert_eq!(normalize(&[("max-draw-count", "-1")]).max_draw_count, -1);
    }

    #[test]
    fn line_variant_has_higher_default_cap() {
        let props = PropertyMap::new();
        let config = RenderConfig::normalize(&props, Variant::Lines);
        assert_eq!(config.max_draw_count, 100_000);
    }

    #[test]
    fn colors_split_on_single_spaces() {
        assert_eq!(
            normalize(&[("colors", "red green blue")]).colors,
            ["red", "green", "blue"]
        );
        assert_eq!(normalize(&[("colors", "  red  ")]).colors, ["red"]);
        // Runs of spaces keep their empty segments; the surface ignores
        // them as colors, so they read as "repeat the current color".
        assert_eq!(
            normalize(&[("colors", "red  green")]).colors,
            ["red", "", "green"]
        );
        assert_eq!(normalize(&[]).colors, [""]);
    }

    #[test]
    fn shape_matches_after_trim() {
        use super::super::shapes::{Circle, Line, Square};
        assert_eq!(normalize(&[("shape", "circle")]).shape, ShapeKind::from(Circle));
        assert_eq!(normalize(&[("shape", " square ")]).shape, ShapeKind::from(Square));
        assert_eq!(normalize(&[("shape", "line")]).shape, ShapeKind::from(Line));
        assert_eq!(normalize(&[("shape", "hexagon")]).shape, ShapeKind::from(Line));
        assert_eq!(normalize(&[]).shape, ShapeKind::from(Line));
    }

    #[test]
    fn line_variant_pins_shape_and_origin() {
        use super::super::shapes::Line;
        let props: PropertyMap = [("shape", "circle"), ("show-origin", "1")]
            .into_iter()
            .collect();
        let config = RenderConfig::normalize(&props, Variant::Lines);
        assert_eq!(config.shape, ShapeKind::from(Line));
        assert!(!config.show_origin);
    }

    #[test]
    fn flags_require_exactly_one() {
        assert!(normalize(&[("show-origin", "1")]).show_origin);
        assert!(normalize(&[("show-origin", " 1 ")]).show_origin);
        assert!(!normalize(&[("show-origin", "true")]).show_origin);
        assert!(!normalize(&[("show-origin", "0")]).show_origin);
        assert!(normalize(&[("debug-to-console", "1")]).debug);
    }

    #[test]
    fn root_geometry() {
        let size = Size::new(200.0, 200.0);
        let config = normalize(&[]);
        assert_eq!(config.root_length(size), 44.0);
        assert_eq!(config.root_position(size), (100.0, 200.0));

        let config = normalize(&[("show-origin", "1")]);
        assert_eq!(config.root_position(size), (100.0, 196.0));
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -7rest"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("x42"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn leading_float_parsing() {
        assert_eq!(parse_leading_float("0.8"), Some(0.8));
        assert_eq!(parse_leading_float(".5 "), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("-1.5e2"), Some(-150.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("0.8px"), Some(0.8));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("big"), None);
    }
}
