//! color-depth: bit-depth aware color math for small palettes
//!
//! This library models the color depths used by retro and embedded graphics
//! (RGB555, RGB565, RGBA4444 and friends), converts colors between them, and
//! buckets colors into named hues for palette search.
//!
//! # Quick Start
//!
//! ```
//! use color_depth::{classify, rescale_color, ColorDepth, ColorTuple, Hue, TintThresholds};
//!
//! // A 5-bit orange, brought up to 8 bits per channel
//! let orange = ColorTuple::rgb(27, 25, 2);
//! let rgb888 =
//!     rescale_color(orange, ColorDepth::Rgb555, ColorDepth::Rgb888, false, false).unwrap();
//! assert_eq!(rgb888, ColorTuple::rgb(216, 200, 16));
//!
//! // Classification rescales on its own
//! let tint = classify(orange, ColorDepth::Rgb555, &TintThresholds::default()).unwrap();
//! assert_eq!(tint.hue, Hue::Orange);
//! ```
//!
//! # Color Depths
//!
//! A [`ColorDepth`] is identified by its variant, not by its bit total.
//! RGB444 and RGBA3333 both use 12 bits; [`depth_from_bits`] tells them
//! apart by alpha usage. The full-byte depths (RGB233, RGB332, RGB565) give
//! one channel an extra bit, which rescaling accounts for with a per-channel
//! weight.
//!
//! # Rescaling
//!
//! [`rescale_color`] maps each channel from `[0, 2^old_bits)` onto
//! `[0, 2^new_bits)`, rounding half up. Either range can reserve its top
//! value through the offset flags. Going to fewer bits is allowed and logs a
//! `tracing` warning; [`is_lossy`] checks for it up front.
//!
//! # Hues
//!
//! [`classify`] looks at which channel dominates and how far the other two
//! trail it:
//!
//! ```text
//!              red
//!        pink       orange
//!    magenta           yellow
//!   purple               chartreuse
//!    blue              green
//!        azure       teal
//!              cyan
//! ```
//!
//! Colors whose channels are too close together to call fall back to grey,
//! biased towards the dominant primary.
//!
//! # Palette Search
//!
//! - [`find_similar`] filters a palette by related hue and mean distance
//! - [`find_closest`] picks one entry using a per-hue [`Strategy`]
//! - [`quantize_rows`] maps whole rows of pixels onto palette indices

pub mod color;
pub mod depth;
pub mod matcher;
pub mod rescale;
pub mod rows;
pub mod tint;


pub use color::{Channel, ColorTuple};
pub use depth::{depth_from_bits, is_valid_depth, total_bits, ColorDepth, DepthError};
pub use matcher::{
    find_closest, find_closest_index, find_similar, ChannelDiffs, SimilarityOptions, Strategy,
};
pub use rescale::{is_lossy, rescale_color, rescale_colors};
pub use rows::{
    count_unique_colors, flatten_alpha, index_rows, quantize_rows, unique_colors, IndexedRows,
};
pub use tint::{classify, classify_rgb888, Hue, ParseHueError, Tint, TintThresholds};
