//! Color depth enumeration and bit arithmetic.
//!
//! A [`ColorDepth`] names a bit-allocation scheme. Several schemes share the
//! same total bit count (RGB444 and RGBA3333 both use 12 bits), so the depth
//! is identified by its variant and the bit total is derived from it, never
//! the other way around.

use std::fmt;

use super::error::DepthError;
use crate::color::Channel;

/// A bit-allocation scheme for a color's channels.
///
/// Symmetric depths spend the same number of bits on every channel.
/// The three full-byte depths ([`Rgb233`](ColorDepth::Rgb233),
/// [`Rgb332`](ColorDepth::Rgb332), [`Rgb565`](ColorDepth::Rgb565)) give one
/// channel an extra bit so that the color exactly fills its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorDepth {
    Greyscale,
    GreyscaleAlpha,
    Rgb111,
    Rgba1111,
    Rgb222,
    Rgba2222,
    Rgb333,
    Rgba3333,
    Rgb444,
    Rgba4444,
    Rgb555,
    Rgba5555,
    Rgb666,
    Rgba6666,
    Rgb777,
    Rgba7777,
    Rgb888,
    Rgba8888,
    Rgb233,
    Rgb332,
    Rgb565,
}

impl ColorDepth {
    /// Every known depth, symmetric depths first.
    pub const ALL: [ColorDepth; 21] = [
        ColorDepth::Greyscale,
        ColorDepth::GreyscaleAlpha,
        ColorDepth::Rgb111,
        ColorDepth::Rgba1111,
        ColorDepth::Rgb222,
        ColorDepth::Rgba2222,
        ColorDepth::Rgb333,
        ColorDepth::Rgba3333,
        ColorDepth::Rgb444,
        ColorDepth::Rgba4444,
        ColorDepth::Rgb555,
        ColorDepth::Rgba5555,
        ColorDepth::Rgb666,
        ColorDepth::Rgba6666,
        ColorDepth::Rgb777,
        ColorDepth::Rgba7777,
        ColorDepth::Rgb888,
        ColorDepth::Rgba8888,
        ColorDepth::Rgb233,
        ColorDepth::Rgb332,
        ColorDepth::Rgb565,
    ];

    /// Total number of bits used by one color at this depth.
    ///
    /// Greyscale depths report 0 (greyscale) and 1 (greyscale with alpha);
    /// these are markers rather than real bit counts.
    pub const fn total_bits(self) -> u32 {
        match self {
            ColorDepth::Greyscale => 0,
            ColorDepth::GreyscaleAlpha => 1,
            ColorDepth::Rgb111 => 3,
            ColorDepth::Rgba1111 => 4,
            ColorDepth::Rgb222 => 6,
            ColorDepth::Rgba2222 => 8,
            ColorDepth::Rgb333 => 9,
            ColorDepth::Rgba3333 => 12,
            ColorDepth::Rgb444 => 12,
            ColorDepth::Rgba4444 => 16,
            ColorDepth::Rgb555 => 15,
            ColorDepth::Rgba5555 => 20,
            ColorDepth::Rgb666 => 18,
            ColorDepth::Rgba6666 => 24,
            ColorDepth::Rgb777 => 21,
            ColorDepth::Rgba7777 => 28,
            ColorDepth::Rgb888 => 24,
            ColorDepth::Rgba8888 => 32,
            ColorDepth::Rgb233 => 8,
            ColorDepth::Rgb332 => 8,
            ColorDepth::Rgb565 => 16,
        }
    }

    /// Returns true if this depth carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorDepth::GreyscaleAlpha
                | ColorDepth::Rgba1111
                | ColorDepth::Rgba2222
                | ColorDepth::Rgba3333
                | ColorDepth::Rgba4444
                | ColorDepth::Rgba5555
                | ColorDepth::Rgba6666
                | ColorDepth::Rgba7777
                | ColorDepth::Rgba8888
        )
    }

    /// Returns true for the two greyscale depths.
    pub const fn is_greyscale(self) -> bool {
        matches!(self, ColorDepth::Greyscale | ColorDepth::GreyscaleAlpha)
    }

    /// Returns true for the asymmetric depths that fill every bit of their
    /// bytes (RGB233, RGB332, RGB565).
    pub const fn uses_all_bits(self) -> bool {
        matches!(
            self,
            ColorDepth::Rgb233 | ColorDepth::Rgb332 | ColorDepth::Rgb565
        )
    }

    /// Base bits per channel: the total divided by 4 with alpha, else by 3.
    ///
    /// For full-byte depths this is the width of the narrower channels;
    /// the wider channel is expressed through [`channel_scalar`](Self::channel_scalar).
    pub const fn channel_bits(self) -> u32 {
        if self.has_alpha() {
            self.total_bits() / 4
        } else {
            self.total_bits() / 3
        }
    }

    /// Weight applied to `channel` when rescaling.
    ///
    /// 2 for the channel that owns the extra bit of a full-byte depth
    /// (green in 5-6-5, red in 3-3-2, blue in 2-3-3), otherwise 1.
    pub const fn channel_scalar(self, channel: Channel) -> u32 {
        match (self, channel) {
            (ColorDepth::Rgb565, Channel::Green)
            | (ColorDepth::Rgb332, Channel::Red)
            | (ColorDepth::Rgb233, Channel::Blue) => 2,
            _ => 1,
        }
    }

    /// Canonical upper-case name, e.g. `"RGB565"`.
    pub const fn name(self) -> &'static str {
        match self {
            ColorDepth::Greyscale => "GREYSCALE",
            ColorDepth::GreyscaleAlpha => "GREYSCALE_ALPHA",
            ColorDepth::Rgb111 => "RGB111",
            ColorDepth::Rgba1111 => "RGBA1111",
            ColorDepth::Rgb222 => "RGB222",
            ColorDepth::Rgba2222 => "RGBA2222",
            ColorDepth::Rgb333 => "RGB333",
            ColorDepth::Rgba3333 => "RGBA3333",
            ColorDepth::Rgb444 => "RGB444",
            ColorDepth::Rgba4444 => "RGBA4444",
            ColorDepth::Rgb555 => "RGB555",
            ColorDepth::Rgba5555 => "RGBA5555",
            ColorDepth::Rgb666 => "RGB666",
            ColorDepth::Rgba6666 => "RGBA6666",
            ColorDepth::Rgb777 => "RGB777",
            ColorDepth::Rgba7777 => "RGBA7777",
            ColorDepth::Rgb888 => "RGB888",
            ColorDepth::Rgba8888 => "RGBA8888",
            ColorDepth::Rgb233 => "RGB233",
            ColorDepth::Rgb332 => "RGB332",
            ColorDepth::Rgb565 => "RGB565",
        }
    }
}

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn non_negative(per_channel_bits: i32) -> Result<u32, DepthError> {
    u32::try_from(per_channel_bits).map_err(|_| {
        DepthError::InvalidArgument(format!(
            "color depth cannot be less than 0 bits (got {})",
            per_channel_bits
        ))
    })
}

/// Compute the total bits for a color with `per_channel_bits` per channel.
///
/// The per-channel count is multiplied by 4 with alpha and by 3 without.
/// With `fill_byte`, the total is moved to the nearest multiple of 8: a
/// remainder of 4 or more rounds up, anything smaller rounds down. This
/// models depths such as 5-6-5 that spend every bit of their bytes.
///
/// # Errors
///
/// Returns [`DepthError::InvalidArgument`] if `per_channel_bits` is negative
/// or the total overflows.
///
/// # Example
///
/// ```
/// use color_depth::total_bits;
///
/// assert_eq!(total_bits(8, true, false).unwrap(), 32);
/// assert_eq!(total_bits(5, false, true).unwrap(), 16);
/// ```
pub fn total_bits(
    per_channel_bits: i32,
    has_alpha: bool,
    fill_byte: bool,
) -> Result<u32, DepthError> {
    let bits = non_negative(per_channel_bits)?;
    let channels = if has_alpha { 4 } else { 3 };
    let total = bits.checked_mul(channels).ok_or_else(|| {
        DepthError::InvalidArgument(format!("{} bits per channel overflows", bits))
    })?;

    if !fill_byte {
        return Ok(total);
    }

    let remainder = total % 8;
    if remainder >= 4 {
        Ok(total.saturating_add(8 - remainder))
    } else {
        Ok(total - remainder)
    }
}

/// Greyscale depths are addressed with 0 bits per channel.
fn resolve_total(
    per_channel_bits: i32,
    has_alpha: bool,
    fill_byte: bool,
) -> Result<u32, DepthError> {
    if non_negative(per_channel_bits)? == 0 {
        return Ok(if has_alpha {
            ColorDepth::GreyscaleAlpha.total_bits()
        } else {
            ColorDepth::Greyscale.total_bits()
        });
    }
    total_bits(per_channel_bits, has_alpha, fill_byte)
}

/// Check whether the bit configuration matches the total of a known depth.
///
/// # Errors
///
/// Returns [`DepthError::InvalidArgument`] for negative bit counts.
pub fn is_valid_depth(
    per_channel_bits: i32,
    has_alpha: bool,
    fill_byte: bool,
) -> Result<bool, DepthError> {
    let total = resolve_total(per_channel_bits, has_alpha, fill_byte)?;
    Ok(ColorDepth::ALL.iter().any(|d| d.total_bits() == total))
}

/// Resolve a bit configuration to a [`ColorDepth`].
///
/// The total is computed as in [`total_bits`], then disambiguated by alpha
/// usage: 12 bits resolve to RGBA3333 with alpha and RGB444 without, 24 bits
/// to RGBA6666 or RGB888, 16 bits to RGBA4444 or RGB565. Eight bits without
/// alpha resolve to RGB233 for 2-bit channels and RGB332 otherwise.
///
/// # Errors
///
/// - [`DepthError::InvalidArgument`] for negative bit counts
/// - [`DepthError::UnknownDepth`] when no depth matches
///
/// # Example
///
/// ```
/// use color_depth::{depth_from_bits, ColorDepth};
///
/// assert_eq!(depth_from_bits(4, true, false).unwrap(), ColorDepth::Rgba3333);
/// assert_eq!(depth_from_bits(4, false, false).unwrap(), ColorDepth::Rgb444);
/// ```
pub fn depth_from_bits(
    per_channel_bits: i32,
    has_alpha: bool,
    fill_byte: bool,
) -> Result<ColorDepth, DepthError> {
    let total = resolve_total(per_channel_bits, has_alpha, fill_byte)?;

    // 8 bits without alpha: 2-3-3 and 3-3-2 only differ in which end is wide
    if total == 8 && !has_alpha {
        return Ok(if per_channel_bits == 2 {
            ColorDepth::Rgb233
        } else {
            ColorDepth::Rgb332
        });
    }

    ColorDepth::ALL
        .iter()
        .copied()
        .find(|d| d.total_bits() == total && d.has_alpha() == has_alpha)
        .ok_or(DepthError::UnknownDepth {
            total_bits: total,
            has_alpha,
        })
}
