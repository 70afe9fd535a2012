//! Color parsing, normalization and palette lookup.
//!
//! Every color handled by the rest of the workspace goes through this crate
//! first:
//! - [`parse_hex`], [`parse_rgb`] and [`parse_color`] turn user text into a
//!   canonical [`Rgb`];
//! - [`Rgb`] renders back to `#RRGGBB` (or `rgb(r, g, b)`) and serializes
//!   as its canonical string;
//! - [`PaletteIndex`] maps a canonical color to a human-readable name from a
//!   fixed reference dataset.

mod error;
mod palette;
mod parse;
mod rgb;

pub use error::{Channel, ColorError};
pub use palette::{PaletteEntry, PaletteError, PaletteIndex, RawPaletteEntry};
pub use parse::{
    equals_ignore_case, is_hex_color_prefix, parse_color, parse_hex, parse_rgb,
};
pub use rgb::Rgb;
