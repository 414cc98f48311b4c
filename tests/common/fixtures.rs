//! Test fixtures and constants.

use palkit::ColorTuple;

/// Palette file texts
pub mod files {
    /// Extended palette, 4 colors, magenta transparent, 5 bits per subpixel
    pub const EXT_FOUR: &str = "JASC-PAL-EXT
0100
4
0
5
NO_ALPHA
255 0 255
0 0 0
128 128 128
255 255 255";

    /// Extended palette with alpha, one line missing its alpha value
    pub const EXT_ALPHA: &str = "JASC-PAL-EXT
0200
3
-1
8
ALPHA
255 0 0 255
0 255 0 128
0 0 255";

    /// Header only, declares 16 colors
    pub const STD_HEADER: &str = "JASC-PAL\n0100\n16";
}

/// The 16-color CGA palette
pub fn cga() -> Vec<ColorTuple> {
    [
        (0x00, 0x00, 0x00),
        (0x00, 0x00, 0xAA),
        (0x00, 0xAA, 0x00),
        (0x00, 0xAA, 0xAA),
        (0xAA, 0x00, 0x00),
        (0xAA, 0x00, 0xAA),
        (0xAA, 0x55, 0x00),
        (0xAA, 0xAA, 0xAA),
        (0x55, 0x55, 0x55),
        (0x55, 0x55, 0xFF),
        (0x55, 0xFF, 0x55),
        (0x55, 0xFF, 0xFF),
        (0xFF, 0x55, 0x55),
        (0xFF, 0x55, 0xFF),
        (0xFF, 0xFF, 0x55),
        (0xFF, 0xFF, 0xFF),
    ]
    .into_iter()
    .map(|(r, g, b)| ColorTuple::rgb(r, g, b))
    .collect()
}

/// Standard palette text for `colors`, built by hand rather than by the writer
pub fn standard_text(colors: &[ColorTuple]) -> String {
    let mut lines = vec![
        "JASC-PAL".to_string(),
        "0100".to_string(),
        colors.len().to_string(),
    ];
    lines.extend(colors.iter().map(|c| format!("{} {} {}", c.r, c.g, c.b)));
    lines.join("\n")
}
