//! Heuristic hue classification.
//!
//! Classification runs on 8-bit channels. The dominant channel picks one of
//! three wheel branches; the differences between the dominant channel and
//! its two neighbours then pick one of five hues in that branch, or grey
//! when the differences are inconclusive.

use super::hue::Hue;
use crate::color::{Channel, ColorTuple};
use crate::depth::{ColorDepth, DepthError};
use crate::rescale::rescale_color;

/// Difference thresholds used by [`classify`].
///
/// # Defaults
///
/// - `large`: 25
/// - `small`: 10
/// - `bias`: 3
///
/// # Example
///
/// ```
/// use color_depth::TintThresholds;
///
/// let strict = TintThresholds::new().large(100).small(60);
/// assert_eq!(strict.bias, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintThresholds {
    /// A channel difference at or above this counts as clearly apart.
    pub large: i32,
    /// A channel difference below this counts as level.
    pub small: i32,
    /// Minimum lead one non-dominant channel needs over the other to
    /// produce a bias.
    pub bias: i32,
}

impl Default for TintThresholds {
    fn default() -> Self {
        Self {
            large: 25,
            small: 10,
            bias: 3,
        }
    }
}

impl TintThresholds {
    /// Thresholds with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the large threshold.
    #[inline]
    pub fn large(mut self, large: i32) -> Self {
        self.large = large;
        self
    }

    /// Set the small threshold.
    #[inline]
    pub fn small(mut self, small: i32) -> Self {
        self.small = small;
        self
    }

    /// Set the bias threshold.
    #[inline]
    pub fn bias(mut self, bias: i32) -> Self {
        self.bias = bias;
        self
    }
}

/// Result of classifying a color: its hue and an optional lean.
///
/// The bias is the primary hue (red, green or blue) the color leans
/// towards, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    pub hue: Hue,
    pub bias: Option<Hue>,
}

impl Tint {
    const fn unbiased(hue: Hue) -> Self {
        Self { hue, bias: None }
    }
}

/// One third of the wheel, centered on a dominant channel.
struct Branch {
    dominant: Channel,
    /// Channel subtracted for the left difference
    left: Channel,
    /// Channel subtracted for the right difference
    right: Channel,
    /// Left, near-left, center, near-right, right
    hues: [Hue; 5],
}

const RED_BRANCH: Branch = Branch {
    dominant: Channel::Red,
    left: Channel::Green,
    right: Channel::Blue,
    hues: [Hue::Yellow, Hue::Orange, Hue::Red, Hue::Pink, Hue::Magenta],
};

const GREEN_BRANCH: Branch = Branch {
    dominant: Channel::Green,
    left: Channel::Blue,
    right: Channel::Red,
    hues: [Hue::Cyan, Hue::Teal, Hue::Green, Hue::Chartreuse, Hue::Yellow],
};

const BLUE_BRANCH: Branch = Branch {
    dominant: Channel::Blue,
    left: Channel::Red,
    right: Channel::Green,
    hues: [Hue::Magenta, Hue::Purple, Hue::Blue, Hue::Azure, Hue::Cyan],
};

fn branch_for(r: u8, g: u8, b: u8) -> &'static Branch {
    if r >= g && r >= b {
        &RED_BRANCH
    } else if g >= r && g >= b {
        &GREEN_BRANCH
    } else {
        &BLUE_BRANCH
    }
}

impl Branch {
    fn hue(&self, left: i32, right: i32, t: &TintThresholds) -> Hue {
        let [far_left, near_left, center, near_right, far_right] = self.hues;
        let left_large = left >= t.large;
        let right_large = right >= t.large;
        let left_mid = t.small <= left && left < t.large;
        let right_mid = t.small <= right && right < t.large;

        if left_large && right_large {
            center
        } else if left_large && right_mid {
            near_right
        } else if left_large && right < t.small {
            far_right
        } else if right_large && left_mid {
            near_left
        } else if right_large && left < t.small {
            far_left
        } else {
            Hue::Grey
        }
    }

    fn bias(&self, hue: Hue, color: ColorTuple, t: &TintThresholds) -> Option<Hue> {
        if hue == Hue::Grey {
            return Some(Hue::primary(self.dominant));
        }

        let left = i32::from(color.channel(self.left));
        let right = i32::from(color.channel(self.right));
        if left > right && left - right >= t.bias {
            Some(Hue::primary(self.left))
        } else if right > left && right - left >= t.bias {
            Some(Hue::primary(self.right))
        } else {
            None
        }
    }
}

/// Classify a color whose channels are already 8-bit.
///
/// Any alpha component is ignored.
///
/// # Example
///
/// ```
/// use color_depth::{classify_rgb888, ColorTuple, Hue, TintThresholds};
///
/// let tint = classify_rgb888(ColorTuple::rgb(255, 0, 0), &TintThresholds::default());
/// assert_eq!(tint.hue, Hue::Red);
/// assert_eq!(tint.bias, None);
/// ```
pub fn classify_rgb888(color: ColorTuple, thresholds: &TintThresholds) -> Tint {
    let [r, g, b] = color.channels();

    if r == g && g == b {
        return Tint::unbiased(match r {
            255 => Hue::White,
            0 => Hue::Black,
            _ => Hue::Grey,
        });
    }

    let branch = branch_for(r, g, b);
    let dominant = i32::from(color.channel(branch.dominant));
    let left = dominant - i32::from(color.channel(branch.left));
    let right = dominant - i32::from(color.channel(branch.right));

    let hue = branch.hue(left, right, thresholds);
    Tint {
        hue,
        bias: branch.bias(hue, color, thresholds),
    }
}

/// Classify a color given at `depth`.
///
/// Colors not already at 8 bits per channel are first rescaled to RGB888
/// (RGBA8888 for alpha depths) without offsets.
///
/// # Errors
///
/// Returns [`DepthError::InvalidArgument`] for greyscale depths.
pub fn classify(
    color: ColorTuple,
    depth: ColorDepth,
    thresholds: &TintThresholds,
) -> Result<Tint, DepthError> {
    let target = if depth.has_alpha() {
        ColorDepth::Rgba8888
    } else {
        ColorDepth::Rgb888
    };

    let color = if depth == target {
        color
    } else {
        rescale_color(color, depth, target, false, false)?
    };

    Ok(classify_rgb888(color, thresholds))
}
