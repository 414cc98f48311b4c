//! JASC-PAL text parsing.

use std::iter::Enumerate;
use std::str::{FromStr, Lines};

use color_depth::ColorTuple;

use crate::error::PaletteError;
use crate::models::{AlphaMode, ExtendedHeader, Palette, PaletteFormat, PaletteHeader};

const COMPONENT_NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];

type NumberedLines<'a> = Enumerate<Lines<'a>>;

/// Parse a complete JASC-PAL or JASC-PAL-EXT document.
///
/// Trailing blank lines after the last color are ignored; any other
/// deviation from the declared count is an error.
///
/// # Errors
///
/// - [`PaletteError::Protocol`] for a malformed or missing header line, a
///   body that does not have exactly `count` colors, a line without 3 or 4
///   components, a non-numeric component, or alpha in a standard file
/// - [`PaletteError::Value`] for a numeric component outside `[0, 255]`
pub fn parse(text: &str) -> Result<Palette, PaletteError> {
    let mut lines = text.lines().enumerate();
    let header = parse_header(&mut lines)?;
    header.validate()?;

    let mut body: Vec<(usize, &str)> = lines.collect();
    while body.last().is_some_and(|(_, line)| line.trim().is_empty()) {
        body.pop();
    }

    if body.len() != header.count {
        return Err(PaletteError::protocol(format!(
            "Header declares {} colors but the body has {} lines",
            header.count,
            body.len()
        )));
    }

    let colors = body
        .into_iter()
        .map(|(index, line)| parse_color(index + 1, line, &header))
        .collect::<Result<Vec<_>, _>>()?;

    Palette::new(header, colors)
}

fn next_line<'a>(lines: &mut NumberedLines<'a>, what: &str) -> Result<&'a str, PaletteError> {
    lines
        .next()
        .map(|(_, line)| line.trim())
        .ok_or_else(|| PaletteError::protocol(format!("Missing {} line", what)))
}

fn header_number<T: FromStr>(line: &str, what: &str) -> Result<T, PaletteError> {
    line.parse()
        .map_err(|_| PaletteError::protocol(format!("Invalid {}: {:?}", what, line)))
}

fn parse_header(lines: &mut NumberedLines<'_>) -> Result<PaletteHeader, PaletteError> {
    let magic = next_line(lines, "format")?;
    let format = PaletteFormat::from_magic(magic)
        .ok_or_else(|| PaletteError::protocol(format!("Unknown format {:?}", magic)))?;

    let version = next_line(lines, "version")?.to_string();
    let count: usize = header_number(next_line(lines, "color count")?, "color count")?;

    if format == PaletteFormat::Standard {
        return Ok(PaletteHeader::standard(version, count));
    }

    let transparency: i64 = header_number(next_line(lines, "transparency")?, "transparency index")?;
    let transparency = match transparency {
        -1 => None,
        index => Some(usize::try_from(index).map_err(|_| {
            PaletteError::protocol(format!(
                "Transparency index {} outside of [-1, {})",
                index, count
            ))
        })?),
    };

    let bits_per_subpixel: u8 =
        header_number(next_line(lines, "bits per subpixel")?, "bits per subpixel")?;

    let keyword = next_line(lines, "alpha")?;
    let alpha = AlphaMode::from_keyword(keyword).ok_or_else(|| {
        PaletteError::protocol(format!(
            "Invalid alpha entry {:?}, expected {} or {}",
            keyword,
            AlphaMode::Used.keyword(),
            AlphaMode::Unused.keyword()
        ))
    })?;

    Ok(PaletteHeader::extended(
        version,
        count,
        ExtendedHeader {
            transparency,
            bits_per_subpixel,
            alpha,
        },
    ))
}

fn looks_numeric(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_component(line_no: usize, name: &str, token: &str) -> Result<u8, PaletteError> {
    let out_of_range = || {
        PaletteError::value(format!(
            "Line {}: {} value {} not in [0, 255]",
            line_no, name, token
        ))
    };

    match token.parse::<i64>() {
        Ok(value) => u8::try_from(value).map_err(|_| out_of_range()),
        Err(_) if looks_numeric(token) => Err(out_of_range()),
        Err(_) => Err(PaletteError::protocol(format!(
            "Line {}: {} is not a number: {:?}",
            line_no, name, token
        ))),
    }
}

fn parse_color(
    line_no: usize,
    line: &str,
    header: &PaletteHeader,
) -> Result<ColorTuple, PaletteError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(3..=4).contains(&tokens.len()) {
        return Err(PaletteError::protocol(format!(
            "Line {}: expected 3 or 4 components, got {}",
            line_no,
            tokens.len()
        )));
    }

    let mut values = [0u8; 4];
    for (i, token) in tokens.iter().enumerate() {
        values[i] = parse_component(line_no, COMPONENT_NAMES[i], token)?;
    }
    let [r, g, b, a] = values;
    let given_alpha = tokens.len() == 4;

    match header.extended {
        None if given_alpha => Err(PaletteError::protocol(format!(
            "Line {}: alpha value given, but standard JASC-PAL expects RGB",
            line_no
        ))),
        None => Ok(ColorTuple::rgb(r, g, b)),
        Some(ext) => match ext.alpha {
            AlphaMode::Unused => Ok(ColorTuple::rgb(r, g, b)),
            // missing alpha reads as 0, matching what the writer pads with
            AlphaMode::Used => Ok(ColorTuple::rgba(r, g, b, if given_alpha { a } else { 0 })),
        },
    }
}
