//! Terminal styles for the palette.
//!
//! Front ends that draw with `console` get one [`Style`] per
//! [`ColorRole`]: text roles set the foreground, background roles set the
//! background. Colors go through the 256-color palette so they render on
//! terminals without true-color support.
//!
//! # Example
//!
//! ```rust
//! use skypuff_style::{paint, ColorRole};
//!
//! let label = paint(ColorRole::Primary, "ARMED");
//! assert!(label.contains("ARMED"));
//! ```

use std::collections::HashMap;

use console::Style;
use once_cell::sync::Lazy;

use crate::palette::ColorRole;
use crate::util::rgb_to_ansi256;

static ROLE_STYLES: Lazy<HashMap<ColorRole, Style>> = Lazy::new(|| {
    tracing::trace!("building palette terminal styles");
    ColorRole::ALL
        .into_iter()
        .map(|role| (role, build_style(role)))
        .collect()
});

fn build_style(role: ColorRole) -> Style {
    let index = rgb_to_ansi256(role.rgb());
    if role.is_background() {
        Style::new().on_color256(index)
    } else {
        Style::new().color256(index)
    }
}

/// The terminal style for a role.
pub fn style(role: ColorRole) -> Style {
    ROLE_STYLES
        .get(&role)
        .cloned()
        .unwrap_or_else(|| build_style(role))
}

/// Renders `text` in the role's style.
///
/// ANSI codes are only emitted when `console` has colors enabled for
/// stdout.
pub fn paint(role: ColorRole, text: &str) -> String {
    style(role).apply_to(text).to_string()
}
