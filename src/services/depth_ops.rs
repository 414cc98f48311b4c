//! Palette-level color depth operations.
//!
//! Palette files always store 8-bit components. An extended header's bits
//! per subpixel records the precision the colors are meant for; these
//! helpers move a palette between that precision and full 8-bit range.

use color_depth::{rescale_colors, ColorDepth, ColorTuple};

use crate::error::PaletteError;
use crate::models::{AlphaMode, ExtendedHeader, Palette, PaletteHeader};

/// Header describing `depth` that keeps `source`'s version, count and
/// transparency.
fn header_for_depth(
    source: &PaletteHeader,
    depth: ColorDepth,
) -> Result<PaletteHeader, PaletteError> {
    if source.extended.is_none() && depth == ColorDepth::Rgb888 {
        return Ok(source.clone());
    }

    if depth.is_greyscale() || depth.uses_all_bits() {
        return Err(PaletteError::value(format!(
            "{} cannot be described by a bits-per-subpixel header",
            depth
        )));
    }

    let bits_per_subpixel = u8::try_from(depth.channel_bits())
        .map_err(|_| PaletteError::value(format!("{} has too many bits per channel", depth)))?;

    Ok(PaletteHeader::extended(
        source.version.clone(),
        source.count,
        ExtendedHeader {
            transparency: source.transparency(),
            bits_per_subpixel,
            alpha: if depth.has_alpha() {
                AlphaMode::Used
            } else {
                AlphaMode::Unused
            },
        },
    ))
}

/// Rescale every color of a palette from its header depth to `new_depth`.
///
/// The result carries an extended header for `new_depth`, except that a
/// standard palette rescaled to RGB888 keeps its standard header.
///
/// # Errors
///
/// - [`PaletteError::Depth`] if the depths disagree on alpha
/// - [`PaletteError::Value`] if `new_depth` is greyscale or asymmetric and
///   so has no header form
pub fn rescale_palette(
    palette: &Palette,
    new_depth: ColorDepth,
    old_offset: bool,
    new_offset: bool,
) -> Result<Palette, PaletteError> {
    let old_depth = palette.depth()?;
    let header = header_for_depth(palette.header(), new_depth)?;
    let colors = rescale_colors(palette.colors(), old_depth, new_depth, old_offset, new_offset)?;

    tracing::debug!(
        old = %old_depth,
        new = %new_depth,
        count = colors.len(),
        "Rescaled palette"
    );

    Palette::new(header, colors)
}

/// Bring a palette's 8-bit components down to the depth its header declares.
///
/// The target range reserves its top value, so 255 maps onto the largest
/// value the header depth can hold. Standard palettes are returned as is.
pub fn scale_to_header_depth(palette: &Palette) -> Result<Vec<ColorTuple>, PaletteError> {
    let depth = palette.depth()?;
    let full = full_depth(depth);
    if depth == full {
        return Ok(palette.colors().to_vec());
    }
    Ok(rescale_colors(palette.colors(), full, depth, false, true)?)
}

/// Round 8-bit colors to the nearest values representable at `depth`,
/// staying in 8-bit range.
///
/// Each color is taken down to `depth` and back up, with both ends of the
/// conversion reserving their top value so that 0 and 255 survive.
pub fn snap_to_depth(
    colors: &[ColorTuple],
    depth: ColorDepth,
) -> Result<Vec<ColorTuple>, PaletteError> {
    let full = full_depth(depth);
    let reduced = rescale_colors(colors, full, depth, true, true)?;
    Ok(rescale_colors(&reduced, depth, full, true, true)?)
}

fn full_depth(depth: ColorDepth) -> ColorDepth {
    if depth.has_alpha() {
        ColorDepth::Rgba8888
    } else {
        ColorDepth::Rgb888
    }
}
