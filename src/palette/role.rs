//! Named color roles.

use std::fmt;
use std::str::FromStr;

use super::colors::{
    BACKGROUND_ALT_COLOR, BACKGROUND_COLOR, BASE_COLOR, PRIMARY_COLOR, TEXT_ALT_COLOR, TEXT_COLOR,
};
use super::error::ColorParseError;
use crate::util::{parse_hex, Rgb};

/// One of the six palette slots.
///
/// # Example
///
/// ```rust
/// use skypuff_style::ColorRole;
///
/// let role: ColorRole = "textAltColor".parse().unwrap();
/// assert_eq!(role, ColorRole::TextAlt);
/// assert_eq!(role.hex(), "#a6aaa2");
/// assert_eq!(role.to_string(), "text_alt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorRole {
    Base,
    Primary,
    Text,
    TextAlt,
    Background,
    BackgroundAlt,
}

impl ColorRole {
    /// Every role, in palette order.
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Base,
        ColorRole::Primary,
        ColorRole::Text,
        ColorRole::TextAlt,
        ColorRole::Background,
        ColorRole::BackgroundAlt,
    ];

    /// The `#rrggbb` value for this role.
    pub const fn hex(self) -> &'static str {
        match self {
            ColorRole::Base => BASE_COLOR,
            ColorRole::Primary => PRIMARY_COLOR,
            ColorRole::Text => TEXT_COLOR,
            ColorRole::TextAlt => TEXT_ALT_COLOR,
            ColorRole::Background => BACKGROUND_COLOR,
            ColorRole::BackgroundAlt => BACKGROUND_ALT_COLOR,
        }
    }

    /// Snake-case role name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Base => "base",
            ColorRole::Primary => "primary",
            ColorRole::Text => "text",
            ColorRole::TextAlt => "text_alt",
            ColorRole::Background => "background",
            ColorRole::BackgroundAlt => "background_alt",
        }
    }

    /// The name of the UI-layer getter for this role, e.g. `textAltColor`.
    pub const fn getter_name(self) -> &'static str {
        match self {
            ColorRole::Base => "baseColor",
            ColorRole::Primary => "primaryColor",
            ColorRole::Text => "textColor",
            ColorRole::TextAlt => "textAltColor",
            ColorRole::Background => "backgroundColor",
            ColorRole::BackgroundAlt => "backgroundAltColor",
        }
    }

    /// The decoded RGB value.
    pub fn rgb(self) -> Rgb {
        // Palette constants are valid hex, see test_every_role_hex_parses.
        parse_hex(self.hex()).unwrap_or((0, 0, 0))
    }

    /// Whether the role is meant to fill areas rather than color text.
    pub const fn is_background(self) -> bool {
        matches!(self, ColorRole::Background | ColorRole::BackgroundAlt)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = ColorParseError;

    /// Accepts `text_alt`, `text-alt` and `textAltColor` spellings,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let found = ColorRole::ALL.into_iter().find(|role| {
            trimmed.eq_ignore_ascii_case(role.name())
                || trimmed.eq_ignore_ascii_case(&role.name().replace('_', "-"))
                || trimmed.eq_ignore_ascii_case(role.getter_name())
        });

        found.ok_or_else(|| {
            tracing::debug!(name = s, "unknown color role");
            ColorParseError::UnknownRole {
                name: s.to_string(),
            }
        })
    }
}
