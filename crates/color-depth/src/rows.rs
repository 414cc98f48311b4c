//! Helpers over rows of decoded pixels.
//!
//! Image decoding happens elsewhere; these functions work on rows of
//! [`ColorTuple`]s as a decoder would hand them over, and produce a palette
//! plus per-pixel indices that an encoder can write back out.

use std::collections::{HashMap, HashSet};

use crate::color::ColorTuple;
use crate::depth::{ColorDepth, DepthError};
use crate::matcher::find_closest_index;
use crate::tint::TintThresholds;

/// Distinct colors across all rows, in first-seen order.
pub fn unique_colors<'a, I>(rows: I) -> Vec<ColorTuple>
where
    I: IntoIterator<Item = &'a [ColorTuple]>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for row in rows {
        for &color in row {
            if seen.insert(color) {
                unique.push(color);
            }
        }
    }
    unique
}

/// Number of distinct colors across all rows.
pub fn count_unique_colors<'a, I>(rows: I) -> usize
where
    I: IntoIterator<Item = &'a [ColorTuple]>,
{
    rows.into_iter().flatten().collect::<HashSet<_>>().len()
}

/// Rows rewritten as indices into a palette.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexedRows {
    /// Distinct colors in first-seen order
    pub palette: Vec<ColorTuple>,
    /// One index into `palette` per pixel
    pub rows: Vec<Vec<usize>>,
}

/// Build a palette from the rows and replace every pixel with its index.
///
/// # Example
///
/// ```
/// use color_depth::{index_rows, ColorTuple};
///
/// let black = ColorTuple::rgb(0, 0, 0);
/// let white = ColorTuple::rgb(255, 255, 255);
/// let rows = vec![vec![black, white], vec![white, white]];
///
/// let indexed = index_rows(rows.iter().map(Vec::as_slice));
/// assert_eq!(indexed.palette, vec![black, white]);
/// assert_eq!(indexed.rows, vec![vec![0, 1], vec![1, 1]]);
/// ```
pub fn index_rows<'a, I>(rows: I) -> IndexedRows
where
    I: IntoIterator<Item = &'a [ColorTuple]>,
{
    let mut lookup: HashMap<ColorTuple, usize> = HashMap::new();
    let mut indexed = IndexedRows::default();

    for row in rows {
        let mut out = Vec::with_capacity(row.len());
        for &color in row {
            let index = *lookup.entry(color).or_insert_with(|| {
                indexed.palette.push(color);
                indexed.palette.len() - 1
            });
            out.push(index);
        }
        indexed.rows.push(out);
    }

    indexed
}

/// Composite a color over an opaque background and drop its alpha.
///
/// Each channel becomes `c * a + bg * (1 - a)` rounded half up, with
/// `a = alpha / 255`. Colors without alpha are returned unchanged.
pub fn flatten_alpha(color: ColorTuple, background: ColorTuple) -> ColorTuple {
    let Some(alpha) = color.a else {
        return color;
    };
    let a = f64::from(alpha) / 255.0;
    let blend = |c: u8, bg: u8| (f64::from(c) * a + f64::from(bg) * (1.0 - a) + 0.5) as u8;
    ColorTuple::rgb(
        blend(color.r, background.r),
        blend(color.g, background.g),
        blend(color.b, background.b),
    )
}

/// Map every pixel onto the index of its closest `palette` entry.
///
/// Closeness follows [`find_closest_index`].
///
/// # Errors
///
/// - [`DepthError::InvalidArgument`] if the palette is empty while there
///   are pixels to map, or if `depth` is greyscale
pub fn quantize_rows<'a, I>(
    rows: I,
    palette: &[ColorTuple],
    depth: ColorDepth,
    thresholds: &TintThresholds,
) -> Result<Vec<Vec<usize>>, DepthError>
where
    I: IntoIterator<Item = &'a [ColorTuple]>,
{
    let mut cache: HashMap<ColorTuple, usize> = HashMap::new();
    let mut out = Vec::new();

    for row in rows {
        let mut indices = Vec::with_capacity(row.len());
        for &color in row {
            let index = match cache.get(&color) {
                Some(&index) => index,
                None => {
                    let index = find_closest_index(color, palette, depth, thresholds)?
                        .ok_or_else(|| {
                            DepthError::InvalidArgument(
                                "cannot quantize against an empty palette".to_string(),
                            )
                        })?;
                    cache.insert(color, index);
                    index
                }
            };
            indices.push(index);
        }
        out.push(indices);
    }

    Ok(out)
}
