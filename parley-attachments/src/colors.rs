//! Accent color palette for attachment cards.

pub const GOOD: &str = "#35AC19";
pub const WARNING: &str = "#FCB316";
pub const DANGER: &str = "#D30230";

/// Map a named token to its palette color; anything else is treated as an
/// already-valid color value and passed through unchanged.
pub fn resolve(value: &str) -> &str {
    match value {
        "good" => GOOD,
        "warning" => WARNING,
        "danger" => DANGER,
        other => other,
    }
}
