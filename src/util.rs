//! Hex color parsing and terminal palette conversion.

use crate::palette::ColorParseError;

/// An 8-bit-per-channel RGB triple.
pub type Rgb = (u8, u8, u8);

/// Parses a `#rgb` or `#rrggbb` hex color.
///
/// Surrounding whitespace is ignored and digits are case insensitive.
///
/// # Example
///
/// ```rust
/// use skypuff_style::parse_hex;
///
/// assert_eq!(parse_hex("#f26e35").unwrap(), (0xf2, 0x6e, 0x35));
/// assert_eq!(parse_hex("#fff").unwrap(), (255, 255, 255));
/// assert!(parse_hex("f26e35").is_err());
/// ```
pub fn parse_hex(value: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').ok_or_else(|| {
        tracing::debug!(value, "hex color without leading '#'");
        ColorParseError::MissingHash {
            value: value.to_string(),
        }
    })?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        tracing::debug!(value, "hex color with non-hex digit");
        return Err(ColorParseError::InvalidDigit {
            value: value.to_string(),
        });
    }

    // All digits are ASCII from here on, so byte slicing is safe.
    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit {
            value: value.to_string(),
        })
    };

    match hex.len() {
        3 => Ok((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Ok((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        len => {
            tracing::debug!(value, len, "hex color with bad length");
            Err(ColorParseError::InvalidLength {
                value: value.to_string(),
                len,
            })
        }
    }
}

/// Formats an RGB triple as a lowercase `#rrggbb` string.
pub fn to_hex((r, g, b): Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Equal channels map onto the grayscale ramp (232-255, with pure black
/// and white taken from the cube), everything else onto the 6x6x6 cube.
///
/// # Example
///
/// ```rust
/// use skypuff_style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
        };
    }

    let level = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_six_digits() {
        assert_eq!(parse_hex("#d04828").unwrap(), (0xd0, 0x48, 0x28));
        assert_eq!(parse_hex("#FFEFDE").unwrap(), (0xff, 0xef, 0xde));
    }

    #[test]
    fn test_parse_hex_three_digits() {
        assert_eq!(parse_hex("#abc").unwrap(), (0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_parse_hex_trims_whitespace() {
        assert_eq!(parse_hex("  #434f4d\n").unwrap(), (0x43, 0x4f, 0x4d));
    }

    #[test]
    fn test_parse_hex_missing_hash() {
        assert!(matches!(
            parse_hex("434f4d"),
            Err(ColorParseError::MissingHash { .. })
        ));
    }

    #[test]
    fn test_parse_hex_bad_length() {
        assert_eq!(
            parse_hex("#abcd"),
            Err(ColorParseError::InvalidLength {
                value: "#abcd".to_string(),
                len: 4,
            })
        );
        assert!(matches!(
            parse_hex("#"),
            Err(ColorParseError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn test_parse_hex_bad_digit() {
        assert!(matches!(
            parse_hex("#gg0000"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
        // multibyte input must not panic on slicing
        assert!(matches!(
            parse_hex("#é12"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex((0xf2, 0x6e, 0x35)), "#f26e35");
        assert_eq!(to_hex((0, 0, 0)), "#000000");
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }
}
