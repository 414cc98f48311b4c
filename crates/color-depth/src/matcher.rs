//! Palette search built on hue classification.
//!
//! Two queries are offered over a palette of [`ColorTuple`]s:
//!
//! - [`find_similar`] keeps every entry whose hue is related to the
//!   reference and whose average channel distance is within a threshold.
//! - [`find_closest`] picks a single entry, comparing only the channels
//!   that define the reference's hue.
//!
//! Distances are measured on the raw components as given; alpha is never
//! compared.

use crate::color::{Channel, ColorTuple};
use crate::depth::{ColorDepth, DepthError};
use crate::tint::{classify, Hue, TintThresholds};

/// Options for [`find_similar`].
///
/// # Defaults
///
/// - `threshold`: 256.0 (every related hue passes)
/// - `exact_tint`: false
/// - `check_bias`: false
/// - `depth`: RGB888
/// - `thresholds`: [`TintThresholds::default()`]
///
/// # Example
///
/// ```
/// use color_depth::SimilarityOptions;
///
/// let options = SimilarityOptions::new().threshold(32.0).exact_tint(true);
/// assert!(!options.check_bias);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityOptions {
    /// Largest mean absolute channel difference still counted as similar.
    pub threshold: f64,

    /// Only accept entries with exactly the reference hue instead of the
    /// hue and its two wheel neighbours.
    pub exact_tint: bool,

    /// Also require the bias to match. Ignored unless `exact_tint` is set.
    pub check_bias: bool,

    /// Depth the reference and palette colors are given at.
    pub depth: ColorDepth,

    /// Classification thresholds.
    pub thresholds: TintThresholds,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            threshold: 256.0,
            exact_tint: false,
            check_bias: false,
            depth: ColorDepth::Rgb888,
            thresholds: TintThresholds::default(),
        }
    }
}

impl SimilarityOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance threshold.
    #[inline]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Require an exact hue match.
    #[inline]
    pub fn exact_tint(mut self, exact: bool) -> Self {
        self.exact_tint = exact;
        self
    }

    /// Require the bias to match as well (needs `exact_tint`).
    #[inline]
    pub fn check_bias(mut self, check: bool) -> Self {
        self.check_bias = check;
        self
    }

    /// Set the depth colors are given at.
    #[inline]
    pub fn depth(mut self, depth: ColorDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the classification thresholds.
    #[inline]
    pub fn thresholds(mut self, thresholds: TintThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Absolute per-channel differences between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDiffs {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl ChannelDiffs {
    /// Worse than any real pair of 8-bit colors.
    pub const WORST: ChannelDiffs = ChannelDiffs {
        r: 256,
        g: 256,
        b: 256,
    };

    /// Differences between `a` and `b`, ignoring alpha.
    pub fn between(a: ColorTuple, b: ColorTuple) -> Self {
        let diff = |x: u8, y: u8| u16::from(x.abs_diff(y));
        Self {
            r: diff(a.r, b.r),
            g: diff(a.g, b.g),
            b: diff(a.b, b.b),
        }
    }

    /// Difference on a single channel.
    #[inline]
    pub const fn get(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Sum of the three differences.
    #[inline]
    pub const fn total(&self) -> u16 {
        self.r + self.g + self.b
    }

    /// Mean of the three differences.
    #[inline]
    pub fn mean(&self) -> f64 {
        f64::from(self.total()) / 3.0
    }
}

/// How candidates are compared for a given reference hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Compare the single channel that defines the hue.
    Primary(Channel),
    /// Compare the two channels that define the hue; both must not get worse.
    Composite(Channel, Channel),
    /// Compare the mean difference.
    Neutral,
}

impl Strategy {
    /// Comparison strategy for a reference hue.
    pub const fn for_hue(hue: Hue) -> Strategy {
        match hue {
            Hue::Red => Strategy::Primary(Channel::Red),
            Hue::Green => Strategy::Primary(Channel::Green),
            Hue::Blue => Strategy::Primary(Channel::Blue),
            Hue::Pink | Hue::Magenta | Hue::Purple => {
                Strategy::Composite(Channel::Red, Channel::Blue)
            }
            Hue::Azure | Hue::Cyan | Hue::Teal => {
                Strategy::Composite(Channel::Blue, Channel::Green)
            }
            Hue::Chartreuse | Hue::Yellow | Hue::Orange => {
                Strategy::Composite(Channel::Green, Channel::Red)
            }
            Hue::Black | Hue::Grey | Hue::White => Strategy::Neutral,
        }
    }

    /// Returns true if `candidate` should replace `best`.
    pub fn is_closer(self, candidate: &ChannelDiffs, best: &ChannelDiffs) -> bool {
        match self {
            Strategy::Primary(channel) => closer_primary(channel, candidate, best),
            Strategy::Composite(first, second) => {
                closer_composite(first, second, candidate, best)
            }
            Strategy::Neutral => closer_neutral(candidate, best),
        }
    }
}

/// Smaller difference on `channel`; a tie goes to the smaller total.
pub fn closer_primary(channel: Channel, candidate: &ChannelDiffs, best: &ChannelDiffs) -> bool {
    let (c, b) = (candidate.get(channel), best.get(channel));
    c < b || (c == b && candidate.total() < best.total())
}

/// Neither channel worse and at least one better; a tie on both goes to the
/// smaller total.
pub fn closer_composite(
    first: Channel,
    second: Channel,
    candidate: &ChannelDiffs,
    best: &ChannelDiffs,
) -> bool {
    let (c1, b1) = (candidate.get(first), best.get(first));
    let (c2, b2) = (candidate.get(second), best.get(second));
    c1 <= b1 && c2 <= b2 && (c1 < b1 || c2 < b2 || candidate.total() < best.total())
}

/// Strictly smaller mean difference.
pub fn closer_neutral(candidate: &ChannelDiffs, best: &ChannelDiffs) -> bool {
    candidate.total() < best.total()
}

/// Entries of `palette` similar to `color`, in palette order.
///
/// The reference and every entry are classified at `options.depth` with
/// `options.thresholds`. An entry is kept when its hue is eligible (the
/// reference hue, plus its wheel neighbours unless `exact_tint`), its bias
/// matches when `exact_tint && check_bias`, and its mean channel difference
/// is at most `options.threshold`.
///
/// # Errors
///
/// Returns [`DepthError::InvalidArgument`] if `options.depth` is greyscale.
pub fn find_similar(
    color: ColorTuple,
    palette: &[ColorTuple],
    options: &SimilarityOptions,
) -> Result<Vec<ColorTuple>, DepthError> {
    let reference = classify(color, options.depth, &options.thresholds)?;

    let eligible: &[Hue] = if options.exact_tint {
        std::slice::from_ref(&reference.hue)
    } else {
        reference.hue.relatives()
    };
    let check_bias = options.exact_tint && options.check_bias;

    let mut similar = Vec::new();
    for &candidate in palette {
        let tint = classify(candidate, options.depth, &options.thresholds)?;
        if !eligible.contains(&tint.hue) {
            continue;
        }
        if check_bias && tint.bias != reference.bias {
            continue;
        }
        if ChannelDiffs::between(color, candidate).mean() <= options.threshold {
            similar.push(candidate);
        }
    }

    tracing::trace!(
        reference = %color,
        hue = %reference.hue,
        candidates = palette.len(),
        matched = similar.len(),
        "Similarity search finished"
    );

    Ok(similar)
}

/// Index of the palette entry closest to `color`.
///
/// The reference hue picks a [`Strategy`]; the first entry that no later
/// entry beats wins. Returns `None` for an empty palette.
///
/// # Errors
///
/// Returns [`DepthError::InvalidArgument`] if `depth` is greyscale.
pub fn find_closest_index(
    color: ColorTuple,
    palette: &[ColorTuple],
    depth: ColorDepth,
    thresholds: &TintThresholds,
) -> Result<Option<usize>, DepthError> {
    let strategy = Strategy::for_hue(classify(color, depth, thresholds)?.hue);

    let mut best = ChannelDiffs::WORST;
    let mut best_index = None;
    for (index, &candidate) in palette.iter().enumerate() {
        let diffs = ChannelDiffs::between(color, candidate);
        if strategy.is_closer(&diffs, &best) {
            best = diffs;
            best_index = Some(index);
        }
    }
    Ok(best_index)
}

/// The palette entry closest to `color`.
///
/// See [`find_closest_index`].
///
/// # Example
///
/// ```
/// use color_depth::{find_closest, ColorDepth, ColorTuple, TintThresholds};
///
/// let palette = [
///     ColorTuple::rgb(0, 0, 0),
///     ColorTuple::rgb(200, 10, 10),
///     ColorTuple::rgb(10, 10, 200),
/// ];
/// let closest = find_closest(
///     ColorTuple::rgb(250, 0, 0),
///     &palette,
///     ColorDepth::Rgb888,
///     &TintThresholds::default(),
/// )
/// .unwrap();
/// assert_eq!(closest, Some(ColorTuple::rgb(200, 10, 10)));
/// ```
pub fn find_closest(
    color: ColorTuple,
    palette: &[ColorTuple],
    depth: ColorDepth,
    thresholds: &TintThresholds,
) -> Result<Option<ColorTuple>, DepthError> {
    Ok(find_closest_index(color, palette, depth, thresholds)?.map(|index| palette[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closest(color: ColorTuple, palette: &[ColorTuple]) -> Option<ColorTuple> {
        find_closest(color, palette, ColorDepth::Rgb888, &TintThresholds::default()).unwrap()
    }

    #[test]
    fn test_find_closest_empty_palette() {
        assert_eq!(closest(ColorTuple::rgb(1, 2, 3), &[]), None);
    }

    #[test]
    fn test_find_closest_prefers_exact_match() {
        let target = ColorTuple::rgb(0, 200, 180);
        let palette = [
            ColorTuple::rgb(0, 201, 180),
            target,
            ColorTuple::rgb(0, 200, 181),
        ];
        assert_eq!(closest(target, &palette), Some(target));
    }

    #[test]
    fn test_primary_strategy_only_looks_at_its_channel() {
        // Red reference: the second entry is far off in green/blue but its
        // red channel is exact.
        let palette = [ColorTuple::rgb(200, 0, 0), ColorTuple::rgb(250, 90, 90)];
        assert_eq!(
            closest(ColorTuple::rgb(250, 0, 0), &palette),
            Some(ColorTuple::rgb(250, 90, 90))
        );
    }

    #[test]
    fn test_composite_strategy_needs_both_channels() {
        // Magenta reference compares red and blue. The second entry improves
        // red but worsens blue, so it does not replace the first.
        let reference = ColorTuple::rgb(255, 0, 255);
        let palette = [ColorTuple::rgb(240, 0, 240), ColorTuple::rgb(255, 0, 200)];
        assert_eq!(closest(reference, &palette), Some(palette[0]));
    }

    #[test]
    fn test_neutral_strategy_uses_mean() {
        let palette = [
            ColorTuple::rgb(100, 100, 100),
            ColorTuple::rgb(130, 120, 125),
            ColorTuple::rgb(128, 128, 128),
        ];
        assert_eq!(
            closest(ColorTuple::rgb(127, 127, 127), &palette),
            Some(ColorTuple::rgb(128, 128, 128))
        );
    }

    #[test]
    fn test_first_of_equal_candidates_wins() {
        let palette = [ColorTuple::rgb(10, 10, 10), ColorTuple::rgb(10, 10, 10)];
        let index = find_closest_index(
            ColorTuple::rgb(0, 0, 0),
            &palette,
            ColorDepth::Rgb888,
            &TintThresholds::default(),
        )
        .unwrap();
        assert_eq!(index, Some(0));
    }

    #[test]
    fn test_strategy_table() {
        assert_eq!(Strategy::for_hue(Hue::Green), Strategy::Primary(Channel::Green));
        assert_eq!(
            Strategy::for_hue(Hue::Purple),
            Strategy::Composite(Channel::Red, Channel::Blue)
        );
        assert_eq!(
            Strategy::for_hue(Hue::Teal),
            Strategy::Composite(Channel::Blue, Channel::Green)
        );
        assert_eq!(
            Strategy::for_hue(Hue::Orange),
            Strategy::Composite(Channel::Green, Channel::Red)
        );
        assert_eq!(Strategy::for_hue(Hue::White), Strategy::Neutral);
    }

    #[test]
    fn test_find_similar_uses_relatives() {
        let palette = [
            ColorTuple::rgb(255, 0, 0),   // red
            ColorTuple::rgb(215, 200, 15), // orange
            ColorTuple::rgb(0, 255, 0),   // green
            ColorTuple::rgb(215, 15, 200), // pink
        ];
        let similar =
            find_similar(ColorTuple::rgb(250, 0, 0), &palette, &SimilarityOptions::new()).unwrap();
        assert_eq!(similar, vec![palette[0], palette[1], palette[3]]);
    }

    #[test]
    fn test_find_similar_exact_tint() {
        let palette = [ColorTuple::rgb(255, 0, 0), ColorTuple::rgb(215, 200, 15)];
        let options = SimilarityOptions::new().exact_tint(true);
        let similar = find_similar(ColorTuple::rgb(250, 0, 0), &palette, &options).unwrap();
        assert_eq!(similar, vec![palette[0]]);
    }

    #[test]
    fn test_find_similar_bias_only_checked_with_exact_tint() {
        // Both red, but leaning green and blue respectively
        let palette = [ColorTuple::rgb(255, 40, 0), ColorTuple::rgb(255, 0, 40)];
        let reference = ColorTuple::rgb(255, 30, 0);

        let loose = SimilarityOptions::new().check_bias(true);
        assert_eq!(find_similar(reference, &palette, &loose).unwrap().len(), 2);

        let strict = SimilarityOptions::new().exact_tint(true).check_bias(true);
        assert_eq!(find_similar(reference, &palette, &strict).unwrap(), vec![palette[0]]);
    }

    #[test]
    fn test_find_similar_threshold() {
        let palette = [ColorTuple::rgb(255, 0, 0), ColorTuple::rgb(200, 0, 0)];
        let options = SimilarityOptions::new().threshold(10.0);
        let similar = find_similar(ColorTuple::rgb(250, 0, 0), &palette, &options).unwrap();
        assert_eq!(similar, vec![palette[0]]);
    }

    #[test]
    fn test_find_similar_neutral_reference() {
        let palette = [
            ColorTuple::rgb(128, 128, 128),
            ColorTuple::rgb(0, 0, 0),
            ColorTuple::rgb(255, 255, 255),
        ];
        let similar =
            find_similar(ColorTuple::rgb(60, 60, 60), &palette, &SimilarityOptions::new()).unwrap();
        assert_eq!(similar, vec![palette[0]]);
    }
}
