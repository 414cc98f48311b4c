pub mod config;
pub mod header;
pub mod palette;

pub use config::HeaderOptions;
pub use header::{AlphaMode, ExtendedHeader, PaletteFormat, PaletteHeader, STANDARD_COUNTS};
pub use palette::Palette;
