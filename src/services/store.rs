//! Loading and saving palette files.
//!
//! Saving renders the whole file into memory first, so a palette that
//! fails validation never touches the destination. Path saves go through a
//! temporary file in the destination directory that is renamed into place.

use std::io::{Read, Write};
use std::path::Path;

use color_depth::ColorTuple;
use tempfile::NamedTempFile;

use crate::codec;
use crate::error::PaletteError;
use crate::models::{HeaderOptions, Palette};

/// Parse palette text already in memory.
pub fn parse_str(text: &str) -> Result<Palette, PaletteError> {
    codec::parse(text)
}

/// Read and parse a palette from any reader.
pub fn load_reader(mut reader: impl Read) -> Result<Palette, PaletteError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let palette = codec::parse(&text)?;
    tracing::debug!(
        format = palette.format().magic(),
        count = palette.len(),
        "Loaded palette from reader"
    );
    Ok(palette)
}

/// Read and parse a palette file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Palette, PaletteError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let palette = codec::parse(&text)?;
    tracing::debug!(
        path = %path.display(),
        format = palette.format().magic(),
        count = palette.len(),
        "Loaded palette"
    );
    Ok(palette)
}

/// Render `colors` with the header described by `options`.
pub fn serialize(colors: &[ColorTuple], options: &HeaderOptions) -> Result<String, PaletteError> {
    let header = options.to_header()?;
    codec::serialize(colors, &header)
}

/// Validate, render and write a palette to `writer`.
///
/// Nothing is written if validation fails.
pub fn save_writer(
    colors: &[ColorTuple],
    mut writer: impl Write,
    options: &HeaderOptions,
) -> Result<(), PaletteError> {
    let text = serialize(colors, options)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    tracing::debug!(
        format = options.format.magic(),
        count = colors.len(),
        "Wrote palette"
    );
    Ok(())
}

/// Validate, render and atomically write a palette file.
///
/// On any error the destination is left as it was: untouched if it
/// existed, absent if it did not.
pub fn save_path(
    colors: &[ColorTuple],
    path: impl AsRef<Path>,
    options: &HeaderOptions,
) -> Result<(), PaletteError> {
    let path = path.as_ref();
    let text = serialize(colors, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(text.as_bytes())?;
    staged.flush()?;
    staged.persist(path).map_err(|e| e.error)?;

    tracing::debug!(
        path = %path.display(),
        format = options.format.magic(),
        count = colors.len(),
        "Saved palette"
    );
    Ok(())
}

/// Save a [`Palette`] with its own header.
pub fn save_palette(palette: &Palette, path: impl AsRef<Path>) -> Result<(), PaletteError> {
    save_path(
        palette.colors(),
        path,
        &HeaderOptions::from_header(palette.header()),
    )
}
