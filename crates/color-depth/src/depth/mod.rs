//! Color depth model
//!
//! This module enumerates the supported bit-depth configurations and the
//! bit arithmetic used to resolve a per-channel bit count into a depth.

mod color_depth;
mod error;

pub use color_depth::{depth_from_bits, is_valid_depth, total_bits, ColorDepth};
pub use error::DepthError;
