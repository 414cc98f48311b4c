//! Hue classification.
//!
//! [`classify`] buckets a color into one of fifteen [`Hue`]s and reports
//! which primary it leans towards. The thresholds that separate "clearly
//! apart" from "level" channel differences are configurable through
//! [`TintThresholds`].

mod classify;
mod hue;

pub use classify::{classify, classify_rgb888, Tint, TintThresholds};
pub use hue::{Hue, ParseHueError};
