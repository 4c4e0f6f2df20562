//! The fixed Skypuff color values.

pub const BASE_COLOR: &str = "#f26e35";
pub const PRIMARY_COLOR: &str = "#d04828";
pub const TEXT_COLOR: &str = "#434f4d";
pub const TEXT_ALT_COLOR: &str = "#a6aaa2";
pub const BACKGROUND_COLOR: &str = "#e7e8e9";
pub const BACKGROUND_ALT_COLOR: &str = "#ffefde";

/// Brand orange.
pub fn base_color() -> &'static str {
    BASE_COLOR
}

/// Darker orange for active and pressed elements.
pub fn primary_color() -> &'static str {
    PRIMARY_COLOR
}

pub fn text_color() -> &'static str {
    TEXT_COLOR
}

/// Muted text, for hints and secondary labels.
pub fn text_alt_color() -> &'static str {
    TEXT_ALT_COLOR
}

pub fn background_color() -> &'static str {
    BACKGROUND_COLOR
}

/// Warm background for highlighted panels.
pub fn background_alt_color() -> &'static str {
    BACKGROUND_ALT_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert_eq!(base_color(), "#f26e35");
        assert_eq!(primary_color(), "#d04828");
        assert_eq!(text_color(), "#434f4d");
        assert_eq!(text_alt_color(), "#a6aaa2");
        assert_eq!(background_color(), "#e7e8e9");
        assert_eq!(background_alt_color(), "#ffefde");
    }

    #[test]
    fn test_colors_are_stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(base_color(), base_color());
            assert_eq!(background_alt_color(), BACKGROUND_ALT_COLOR);
        }
    }

    #[test]
    fn test_colors_are_six_digit_hex() {
        for color in [
            BASE_COLOR,
            PRIMARY_COLOR,
            TEXT_COLOR,
            TEXT_ALT_COLOR,
            BACKGROUND_COLOR,
            BACKGROUND_ALT_COLOR,
        ] {
            let hex = color.strip_prefix('#').unwrap();
            assert_eq!(hex.len(), 6, "{}", color);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit()), "{}", color);
        }
    }
}
