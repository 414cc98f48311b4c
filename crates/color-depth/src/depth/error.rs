//! Error types for color depth operations
//!
//! This module provides the error type shared by depth resolution,
//! rescaling and classification.

use std::fmt;

use super::color_depth::ColorDepth;

/// Error type for color depth resolution and conversion.
///
/// Returned when a bit count is out of range, when a bit count does not
/// resolve to a known depth, or when a conversion is requested between
/// depths that disagree on alpha usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepthError {
    /// An argument is syntactically valid but semantically out of range
    /// (negative bit counts, greyscale depths passed to RGB conversions)
    InvalidArgument(String),
    /// The computed bit total does not correspond to any known depth
    UnknownDepth {
        /// Total bits after alpha and fill-byte adjustment
        total_bits: u32,
        /// Whether alpha was requested
        has_alpha: bool,
    },
    /// Conversion requested between an alpha and a non-alpha depth
    IncompatibleDepth {
        /// Source depth
        old: ColorDepth,
        /// Target depth
        new: ColorDepth,
    },
}

impl fmt::Display for DepthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
            DepthError::UnknownDepth {
                total_bits,
                has_alpha,
            } => {
                let kind = if *has_alpha { "with" } else { "without" };
                write!(
                    f,
                    "no color depth uses {} bits {} alpha",
                    total_bits, kind
                )
            }
            DepthError::IncompatibleDepth { old, new } => {
                write!(
                    f,
                    "incompatible depths: {} and {} disagree on alpha usage",
                    old, new
                )
            }
        }
    }
}

impl std::error::Error for DepthError {}
