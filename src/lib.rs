//! # Skypuff style helpers
//!
//! Size scaling and the color palette shared by the Skypuff UI.
//!
//! - [`dp`] scales an authored size for the screen's pixel density
//! - [`base_color`], [`primary_color`], [`text_color`], [`text_alt_color`],
//!   [`background_color`] and [`background_alt_color`] return the fixed
//!   `#rrggbb` palette values
//!
//! Beyond those, [`ColorRole`] and [`Palette`] address the palette by name
//! or as a whole, [`parse_hex`] and [`rgb_to_ansi256`] convert colors, and
//! [`style`] / [`paint`] give terminal front ends a `console` style per role.
//!
//! Nothing here holds mutable state, so every function is safe to call
//! from any thread.
//!
//! ## Example
//!
//! ```rust
//! use skypuff_style::{dp, primary_color, ColorRole, Palette};
//!
//! let button_height = dp(10.0, 40.0);
//! assert_eq!(button_height, 63.5);
//!
//! assert_eq!(primary_color(), "#d04828");
//! assert_eq!(Palette::current().get(ColorRole::Primary), primary_color());
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`ColorRole`] and
//!   `Serialize` for [`Palette`]

pub mod density;
pub mod palette;
pub mod term;
mod util;

pub use density::{dp, Density, BASELINE_PPI, MM_PER_INCH, SCALE_THRESHOLD_PPI};
pub use palette::{
    background_alt_color, background_color, base_color, primary_color, text_alt_color,
    text_color, ColorParseError, ColorRole, Palette, BACKGROUND_ALT_COLOR, BACKGROUND_COLOR,
    BASE_COLOR, PRIMARY_COLOR, TEXT_ALT_COLOR, TEXT_COLOR,
};
pub use term::{paint, style};
pub use util::{parse_hex, rgb_to_ansi256, to_hex, Rgb};
