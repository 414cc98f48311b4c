//! Color rescaling between bit depths.
//!
//! Rescaling maps each color channel from the value range of one
//! [`ColorDepth`] onto the range of another, rounding half up. The wider
//! channel of a full-byte depth (green in RGB565, for instance) is weighted
//! by its [`channel_scalar`](ColorDepth::channel_scalar).
//!
//! Converting to a depth with fewer bits discards precision. That is allowed;
//! a `tracing` warning is emitted before any value is converted, and
//! [`is_lossy`] lets callers check ahead of time.

use crate::color::{Channel, ColorTuple};
use crate::depth::{ColorDepth, DepthError};

/// Returns true if converting from `old` to `new` loses precision.
#[inline]
pub fn is_lossy(old: ColorDepth, new: ColorDepth) -> bool {
    new.total_bits() < old.total_bits()
}

/// Largest channel value of a depth: `2^bits`, minus one when the offset
/// flag reserves the top value.
#[inline]
fn largest_value(depth: ColorDepth, offset: bool) -> f64 {
    let max = f64::from(1u32 << depth.channel_bits());
    if offset {
        max - 1.0
    } else {
        max
    }
}

fn check_compatible(old: ColorDepth, new: ColorDepth) -> Result<(), DepthError> {
    for depth in [old, new] {
        if depth.is_greyscale() {
            return Err(DepthError::InvalidArgument(format!(
                "{} has no RGB channels to rescale",
                depth
            )));
        }
    }
    if old.has_alpha() != new.has_alpha() {
        return Err(DepthError::IncompatibleDepth { old, new });
    }
    Ok(())
}

fn warn_lossy(old: ColorDepth, new: ColorDepth, colors: usize) {
    tracing::warn!(
        old = %old,
        new = %new,
        colors,
        "Converting to a lower color depth, precision will be lost"
    );
}

/// Rescale a single channel value.
///
/// `floor(new_max * new_scalar / (old_max * old_scalar) * value + 0.5)`,
/// then values above `new_max` are pulled back by `new_max / old_max` and
/// truncated. The result saturates into a byte.
fn rescale_channel(
    value: u8,
    channel: Channel,
    old: ColorDepth,
    new: ColorDepth,
    old_offset: bool,
    new_offset: bool,
) -> u8 {
    let new_max = largest_value(new, new_offset);
    let old_max = largest_value(old, old_offset);
    let new_scalar = f64::from(new.channel_scalar(channel));
    let old_scalar = f64::from(old.channel_scalar(channel));

    let scaled = ((new_max * new_scalar) / (old_max * old_scalar) * f64::from(value) + 0.5).floor();

    let corrected = if scaled > new_max {
        (scaled - new_max / old_max).trunc()
    } else if scaled < 0.0 {
        0.0
    } else {
        scaled
    };

    // `as` saturates for float-to-int casts
    corrected as u8
}

fn rescale_unchecked(
    color: ColorTuple,
    old: ColorDepth,
    new: ColorDepth,
    old_offset: bool,
    new_offset: bool,
) -> ColorTuple {
    let [r, g, b] = Channel::ALL.map(|channel| {
        rescale_channel(
            color.channel(channel),
            channel,
            old,
            new,
            old_offset,
            new_offset,
        )
    });
    ColorTuple { r, g, b, a: color.a }
}

/// Rescale one color from `old_depth` to `new_depth`.
///
/// Only the red, green and blue channels are transformed; an alpha
/// component is carried through unchanged.
///
/// # Arguments
///
/// * `old_offset` - the source depth reserves its top value
/// * `new_offset` - the target depth reserves its top value
///
/// # Errors
///
/// - [`DepthError::IncompatibleDepth`] if exactly one depth uses alpha
/// - [`DepthError::InvalidArgument`] if either depth is greyscale
///
/// # Example
///
/// ```
/// use color_depth::{rescale_color, ColorDepth, ColorTuple};
///
/// let rgb555 = ColorTuple::rgb(31, 16, 0);
/// let rgb888 =
///     rescale_color(rgb555, ColorDepth::Rgb555, ColorDepth::Rgb888, false, false).unwrap();
/// assert_eq!(rgb888, ColorTuple::rgb(248, 128, 0));
/// ```
pub fn rescale_color(
    color: ColorTuple,
    old_depth: ColorDepth,
    new_depth: ColorDepth,
    old_offset: bool,
    new_offset: bool,
) -> Result<ColorTuple, DepthError> {
    check_compatible(old_depth, new_depth)?;
    if is_lossy(old_depth, new_depth) {
        warn_lossy(old_depth, new_depth, 1);
    }
    Ok(rescale_unchecked(
        color, old_depth, new_depth, old_offset, new_offset,
    ))
}

/// Rescale every color in `colors`, preserving order.
///
/// Validation happens once up front and the lossy-conversion warning is
/// emitted at most once for the whole batch.
///
/// # Errors
///
/// Same as [`rescale_color`].
pub fn rescale_colors(
    colors: &[ColorTuple],
    old_depth: ColorDepth,
    new_depth: ColorDepth,
    old_offset: bool,
    new_offset: bool,
) -> Result<Vec<ColorTuple>, DepthError> {
    check_compatible(old_depth, new_depth)?;
    if is_lossy(old_depth, new_depth) && !colors.is_empty() {
        warn_lossy(old_depth, new_depth, colors.len());
    }
    Ok(colors
        .iter()
        .map(|&c| rescale_unchecked(c, old_depth, new_depth, old_offset, new_offset))
        .collect())
}
