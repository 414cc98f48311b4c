//! JASC-PAL text rendering.

use color_depth::ColorTuple;

use crate::error::PaletteError;
use crate::models::{AlphaMode, Palette, PaletteHeader};

/// Render `colors` under `header` as JASC-PAL text.
///
/// Everything is validated before any text is produced: the header rules,
/// the color count, and the tuple shapes. Lines are joined with `\n` and
/// the output has no trailing newline.
///
/// Extended palettes that use alpha get 4 components per line, padding a
/// missing alpha with 0; those that do not get 3 components.
///
/// # Errors
///
/// - [`PaletteError::Protocol`] if the header is invalid or the number of
///   colors differs from its count
/// - [`PaletteError::Value`] if a standard palette is given a color with
///   alpha
pub fn serialize(colors: &[ColorTuple], header: &PaletteHeader) -> Result<String, PaletteError> {
    header.validate()?;

    if colors.len() != header.count {
        return Err(PaletteError::protocol(format!(
            "Header declares {} colors but {} were given",
            header.count,
            colors.len()
        )));
    }

    let mut lines = Vec::with_capacity(colors.len() + 6);
    lines.push(header.format().magic().to_string());
    lines.push(header.version.clone());
    lines.push(header.count.to_string());

    if let Some(ext) = header.extended {
        lines.push(ext.transparency.map_or("-1".to_string(), |i| i.to_string()));
        lines.push(ext.bits_per_subpixel.to_string());
        lines.push(ext.alpha.keyword().to_string());
    }

    for (index, &color) in colors.iter().enumerate() {
        let shaped = match header.extended {
            None if color.has_alpha() => {
                return Err(PaletteError::value(format!(
                    "Color {}: standard JASC-PAL expects 3 components, got 4",
                    index
                )));
            }
            None => color,
            Some(ext) => match ext.alpha {
                AlphaMode::Used => color.with_alpha(color.a.unwrap_or(0)),
                AlphaMode::Unused => color.without_alpha(),
            },
        };
        lines.push(shaped.to_string());
    }

    Ok(lines.join("\n"))
}

/// Render a [`Palette`] as JASC-PAL text.
pub fn render(palette: &Palette) -> Result<String, PaletteError> {
    serialize(palette.colors(), palette.header())
}
