//! palkit - JASC-PAL palette files with bit-depth aware color tooling
//!
//! Reads and writes standard (`JASC-PAL`) and extended (`JASC-PAL-EXT`)
//! palette files, and exposes the color math of the `color-depth` crate for
//! working with the loaded colors.
//!
//! ```
//! use palkit::{parse_str, serialize, ColorTuple, HeaderOptions};
//!
//! let colors = [ColorTuple::rgb(255, 0, 0), ColorTuple::rgb(0, 0, 255)];
//! let options = HeaderOptions::extended().count(2);
//! let text = serialize(&colors, &options).unwrap();
//!
//! let palette = parse_str(&text).unwrap();
//! assert_eq!(palette.colors(), &colors);
//! ```

pub mod codec;
pub mod error;
pub mod models;
pub mod services;

pub use color_depth::{
    classify, find_closest, find_similar, rescale_color, rescale_colors, ColorDepth, ColorTuple,
    Hue, SimilarityOptions, Tint, TintThresholds,
};
pub use error::PaletteError;
pub use models::{AlphaMode, ExtendedHeader, HeaderOptions, Palette, PaletteFormat, PaletteHeader};
pub use services::{
    load_path, load_reader, parse_str, rescale_palette, save_palette, save_path, save_writer,
    scale_to_header_depth, serialize, snap_to_depth,
};
