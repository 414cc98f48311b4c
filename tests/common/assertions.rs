//! Assertion helpers for tests.

use palkit::{Palette, PaletteError};
use pretty_assertions::assert_eq;

/// Assert two palettes carry the same header and colors
pub fn assert_same_palette(actual: &Palette, expected: &Palette) {
    assert_eq!(actual.header(), expected.header(), "headers differ");
    assert_eq!(actual.colors(), expected.colors(), "colors differ");
}

/// Assert a result failed with a protocol error
pub fn assert_protocol_error<T: std::fmt::Debug>(result: Result<T, PaletteError>) {
    match result {
        Err(PaletteError::Protocol(_)) => {}
        other => panic!("Expected protocol error, got {:?}", other),
    }
}

/// Assert a result failed with a value error
pub fn assert_value_error<T: std::fmt::Debug>(result: Result<T, PaletteError>) {
    match result {
        Err(PaletteError::Value(_)) => {}
        other => panic!("Expected value error, got {:?}", other),
    }
}
