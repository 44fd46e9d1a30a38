//! # Design Tokens
//!
//! Resolution of the stylistic knobs in a theme's `design` and `typography`
//! sections into concrete CSS values. Unknown knob values fall back to the
//! defaults below, except for border radius which passes custom values through.

use crate::config::{Design, Typography};

/// Default font stack.
pub const DEFAULT_FONT_FAMILY: &str = "'Inter', system-ui, sans-serif";
/// Default heading font weight.
pub const DEFAULT_HEADING_WEIGHT: &str = "700";
/// Default body font weight.
pub const DEFAULT_BODY_WEIGHT: &str = "400";
/// Default line height.
pub const DEFAULT_LINE_HEIGHT: &str = "1.5";

const DEFAULT_SPACING: &str = "1rem";
const DEFAULT_RADIUS: &str = "8px";
const DEFAULT_SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.1)";

/// Map a spacing keyword to a length.
pub fn spacing(design: Option<&Design>) -> &str {
    match design.and_then(|d| d.spacing.as_deref()) {
        Some("compact") => "0.75rem",
        Some("comfortable") => "1rem",
        Some("spacious") => "1.5rem",
        _ => DEFAULT_SPACING,
    }
}

/// Map a border radius keyword to a length; anything else is used verbatim.
pub fn radius(design: Option<&Design>) -> &str {
    match design.and_then(|d| d.border_radius.as_deref()) {
        Some("none") => "0px",
        Some("small") => "4px",
        Some("medium") => "8px",
        Some("large") => "16px",
        Some("rounded") => "9999px",
        Some(custom) => custom,
        None => DEFAULT_RADIUS,
    }
}

/// Map a shadow keyword to a `box-shadow` value.
pub fn shadow(design: Option<&Design>) -> &str {
    match design.and_then(|d| d.shadows.as_deref()) {
        Some("none") => "none",
        Some("subtle") => "0 1px 3px rgba(0, 0, 0, 0.1)",
        Some("medium") => "0 4px 12px rgba(0, 0, 0, 0.15)",
        Some("strong") => "0 8px 25px rgba(0, 0, 0, 0.25)",
        _ => DEFAULT_SHADOW,
    }
}

/// Font family, or the default stack.
pub fn font_family(typography: Option<&Typography>) -> &str {
    typography
        .and_then(|t| t.font_family.as_deref())
        .unwrap_or(DEFAULT_FONT_FAMILY)
}

/// Heading weight, or `700`.
pub fn heading_weight(typography: Option<&Typography>) -> &str {
    typography
        .and_then(|t| t.heading_weight.as_deref())
        .unwrap_or(DEFAULT_HEADING_WEIGHT)
}

/// Body weight, or `400`.
pub fn body_weight(typography: Option<&Typography>) -> &str {
    typography
        .and_then(|t| t.body_weight.as_deref())
        .unwrap_or(DEFAULT_BODY_WEIGHT)
}

/// Line height, or `1.5`.
pub fn line_height(typography: Option<&Typography>) -> &str {
    typography
        .and_then(|t| t.line_height.as_deref())
        .unwrap_or(DEFAULT_LINE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design(spacing: Option<&str>, radius: Option<&str>, shadows: Option<&str>) -> Design {
        Design {
            spacing: spacing.map(str::to_string),
            border_radius: radius.map(str::to_string),
            shadows: shadows.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn spacing_keywords() {
        assert_eq!(spacing(None), "1rem");
        assert_eq!(spacing(Some(&design(Some("compact"), None, None))), "0.75rem");
        assert_eq!(spacing(Some(&design(Some("spacious"), None, None))), "1.5rem");
        assert_eq!(spacing(Some(&design(Some("cosy"), None, None))), "1rem");
    }

    #[test]
    fn radius_passes_custom_values_through() {
        assert_eq!(radius(None), "8px");
        assert_eq!(radius(Some(&design(None, Some("none"), None))), "0px");
        assert_eq!(radius(Some(&design(None, Some("rounded"), None))), "9999px");
        assert_eq!(radius(Some(&design(None, Some("12px"), None))), "12px");
    }

    #[test]
    fn shadow_keywords() {
        assert_eq!(shadow(None), "0 2px 8px rgba(0, 0, 0, 0.1)");
        assert_eq!(shadow(Some(&design(None, None, Some("none")))), "none");
        assert_eq!(
            shadow(Some(&design(None, None, Some("strong")))),
            "0 8px 25px rgba(0, 0, 0, 0.25)"
        );
        assert_eq!(
            shadow(Some(&design(None, None, Some("dramatic")))),
            "0 2px 8px rgba(0, 0, 0, 0.1)"
        );
    }

    #[test]
    fn typography_defaults() {
        let typography = Typography {
            font_family: Some("Georgia, serif".to_string()),
            ..Default::default()
        };
        assert_eq!(font_family(Some(&typography)), "Georgia, serif");
        assert_eq!(heading_weight(Some(&typography)), "700");
        assert_eq!(body_weight(None), "400");
        assert_eq!(line_height(None), "1.5");
    }
}
