//! Tests for color matching against loaded palettes.

mod common;

use color_depth::{quantize_rows, unique_colors};
use common::fixtures::{self, files};
use palkit::{
    find_closest, find_similar, parse_str, scale_to_header_depth, ColorDepth, ColorTuple,
    SimilarityOptions, TintThresholds,
};
use pretty_assertions::assert_eq;

fn cga_palette() -> Vec<ColorTuple> {
    parse_str(&fixtures::standard_text(&fixtures::cga()))
        .unwrap()
        .into_colors()
}

#[test]
fn test_find_closest_returns_exact_member() {
    common::init_tracing();
    let palette = cga_palette();
    let thresholds = TintThresholds::default();

    for &color in &palette {
        let closest = find_closest(color, &palette, ColorDepth::Rgb888, &thresholds).unwrap();
        assert_eq!(closest, Some(color));
    }
}

#[test]
fn test_find_closest_on_empty_palette() {
    let closest = find_closest(
        ColorTuple::rgb(12, 34, 56),
        &[],
        ColorDepth::Rgb888,
        &TintThresholds::default(),
    )
    .unwrap();
    assert_eq!(closest, None);
}

#[test]
fn test_find_closest_rejects_greyscale_depth() {
    let result = find_closest(
        ColorTuple::rgb(1, 2, 3),
        &cga_palette(),
        ColorDepth::Greyscale,
        &TintThresholds::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_find_similar_keeps_palette_order() {
    let palette = cga_palette();
    let reference = ColorTuple::rgb(0xFF, 0x55, 0x55);

    let similar = find_similar(reference, &palette, &SimilarityOptions::default()).unwrap();

    assert!(similar.contains(&reference));
    let positions: Vec<usize> = similar
        .iter()
        .map(|c| palette.iter().position(|p| p == c).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_find_similar_exact_with_zero_threshold() {
    let palette = cga_palette();
    let reference = palette[6];
    let options = SimilarityOptions::default()
        .threshold(0.0)
        .exact_tint(true)
        .check_bias(true);

    let similar = find_similar(reference, &palette, &options).unwrap();
    assert_eq!(similar, vec![reference]);
}

#[test]
fn test_scale_loaded_palette_to_header_depth() {
    let palette = parse_str(files::EXT_FOUR).unwrap();
    let scaled = scale_to_header_depth(&palette).unwrap();

    assert_eq!(
        scaled,
        vec![
            ColorTuple::rgb(31, 0, 31),
            ColorTuple::rgb(0, 0, 0),
            ColorTuple::rgb(16, 16, 16),
            ColorTuple::rgb(31, 31, 31),
        ]
    );
}

#[test]
fn test_quantize_rows_against_loaded_palette() {
    let palette = cga_palette();
    let rows: Vec<Vec<ColorTuple>> = vec![
        vec![palette[0], palette[15], palette[0]],
        vec![palette[9], palette[9], palette[4]],
    ];

    let indices = quantize_rows(
        rows.iter().map(Vec::as_slice),
        &palette,
        ColorDepth::Rgb888,
        &TintThresholds::default(),
    )
    .unwrap();

    assert_eq!(indices, vec![vec![0, 15, 0], vec![9, 9, 4]]);
    assert_eq!(unique_colors(rows.iter().map(Vec::as_slice)).len(), 4);
}
