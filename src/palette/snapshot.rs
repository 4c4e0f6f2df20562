//! The whole palette as one value.

use super::role::ColorRole;

/// All six palette colors, for handing to a UI layer in one go.
///
/// With the `serde` feature the snapshot serializes to an object keyed by
/// the UI getter names:
///
/// ```rust
/// # #[cfg(feature = "serde")]
/// # {
/// use skypuff_style::Palette;
///
/// let json = serde_json::to_value(Palette::current()).unwrap();
/// assert_eq!(json["baseColor"], "#f26e35");
/// assert_eq!(json["backgroundAltColor"], "#ffefde");
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    #[cfg_attr(feature = "serde", serde(rename = "baseColor"))]
    pub base: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "primaryColor"))]
    pub primary: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "textColor"))]
    pub text: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "textAltColor"))]
    pub text_alt: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "backgroundColor"))]
    pub background: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "backgroundAltColor"))]
    pub background_alt: &'static str,
}

impl Palette {
    pub const fn current() -> Self {
        Self {
            base: ColorRole::Base.hex(),
            primary: ColorRole::Primary.hex(),
            text: ColorRole::Text.hex(),
            text_alt: ColorRole::TextAlt.hex(),
            background: ColorRole::Background.hex(),
            background_alt: ColorRole::BackgroundAlt.hex(),
        }
    }

    pub const fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::Base => self.base,
            ColorRole::Primary => self.primary,
            ColorRole::Text => self.text,
            ColorRole::TextAlt => self.text_alt,
            ColorRole::Background => self.background,
            ColorRole::BackgroundAlt => self.background_alt,
        }
    }

    /// Iterates `(role, color)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &'static str)> + '_ {
        ColorRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::current()
    }
}
