//! The Skypuff color palette.
//!
//! This module provides:
//!
//! - Six getter functions and matching constants for the fixed colors
//! - [`ColorRole`]: the palette slots as an enum, parseable from names
//! - [`Palette`]: every color in one serializable value
//! - [`ColorParseError`]: errors from hex and role-name parsing
//!
//! All values are `#rrggbb` strings fixed at compile time.

mod colors;
mod error;
mod role;
mod snapshot;

pub use colors::{
    background_alt_color, background_color, base_color, primary_color, text_alt_color,
    text_color, BACKGROUND_ALT_COLOR, BACKGROUND_COLOR, BASE_COLOR, PRIMARY_COLOR,
    TEXT_ALT_COLOR, TEXT_COLOR,
};
pub use error::ColorParseError;
pub use role::ColorRole;
pub use snapshot::Palette;
