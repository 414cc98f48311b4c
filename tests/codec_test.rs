//! Tests for JASC-PAL parsing and rendering.

mod common;

use common::fixtures::{self, files};
use palkit::{
    codec, parse_str, serialize, AlphaMode, ColorTuple, HeaderOptions, PaletteFormat,
};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_hand_written_standard_palette() {
    let colors = fixtures::cga();
    let palette = parse_str(&fixtures::standard_text(&colors)).unwrap();

    assert_eq!(palette.format(), PaletteFormat::Standard);
    assert_eq!(palette.header().count, 16);
    assert_eq!(palette.colors(), colors.as_slice());
}

#[test]
fn test_parse_extended_palette() {
    let palette = parse_str(files::EXT_FOUR).unwrap();
    let header = palette.header();

    assert_eq!(palette.format(), PaletteFormat::Extended);
    assert_eq!(header.count, 4);
    assert_eq!(header.transparency(), Some(0));
    assert_eq!(header.extended.unwrap().bits_per_subpixel, 5);
    assert_eq!(palette.transparent_color(), Some(ColorTuple::rgb(255, 0, 255)));
}

#[test]
fn test_parse_extended_alpha_pads_missing_value() {
    let palette = parse_str(files::EXT_ALPHA).unwrap();

    assert_eq!(palette.header().version, "0200");
    assert_eq!(palette.header().alpha(), AlphaMode::Used);
    assert_eq!(
        palette.colors(),
        &[
            ColorTuple::rgba(255, 0, 0, 255),
            ColorTuple::rgba(0, 255, 0, 128),
            ColorTuple::rgba(0, 0, 255, 0),
        ]
    );
}

#[test]
fn test_round_trip_preserves_palettes() {
    for text in [files::EXT_FOUR, files::EXT_ALPHA] {
        let palette = parse_str(text).unwrap();
        let rendered = codec::render(&palette).unwrap();
        let reparsed = parse_str(&rendered).unwrap();
        common::assert_same_palette(&reparsed, &palette);
    }

    let standard = parse_str(&fixtures::standard_text(&fixtures::cga())).unwrap();
    let reparsed = parse_str(&codec::render(&standard).unwrap()).unwrap();
    common::assert_same_palette(&reparsed, &standard);
}

#[test]
fn test_round_trip_keeps_custom_version() {
    let colors = vec![ColorTuple::rgb(10, 20, 30), ColorTuple::rgb(40, 50, 60)];
    let options = HeaderOptions::extended().count(2).version("v2 beta");

    let text = serialize(&colors, &options).unwrap();
    let palette = parse_str(&text).unwrap();
    assert_eq!(palette.header().version, "v2 beta");

    let reparsed = parse_str(&codec::render(&palette).unwrap()).unwrap();
    common::assert_same_palette(&reparsed, &palette);
}

#[test]
fn test_padded_version_is_not_written() {
    let colors = vec![ColorTuple::rgb(10, 20, 30)];
    let options = HeaderOptions::extended().count(1).version(" 0100 ");
    common::assert_protocol_error(serialize(&colors, &options));
}

#[test]
fn test_padded_alpha_is_written_back() {
    let palette = parse_str(files::EXT_ALPHA).unwrap();
    let rendered = codec::render(&palette).unwrap();
    assert!(rendered.ends_with("\n0 0 255 0"));
}

#[test]
fn test_standard_count_ten_is_rejected() {
    let colors = vec![ColorTuple::rgb(0, 0, 0); 10];
    common::assert_protocol_error(parse_str(&fixtures::standard_text(&colors)));
}

#[test]
fn test_out_of_range_component_is_value_error() {
    let text = files::EXT_FOUR.replace("128 128 128", "128 300 128");
    common::assert_value_error(parse_str(&text));
}

#[test]
fn test_transparency_equal_to_count_is_rejected() {
    let text = files::EXT_FOUR.replacen("\n0\n5\n", "\n4\n5\n", 1);
    common::assert_protocol_error(parse_str(&text));
}

#[test]
fn test_header_without_body_is_rejected() {
    common::assert_protocol_error(parse_str(files::STD_HEADER));
}

#[test]
fn test_serialize_from_options() {
    let colors = [ColorTuple::rgb(1, 2, 3), ColorTuple::rgb(4, 5, 6)];
    let options = HeaderOptions::extended().count(2).transparency(1).depth_bits(6);

    let text = serialize(&colors, &options).unwrap();
    assert_eq!(text, "JASC-PAL-EXT\n0100\n2\n1\n6\nNO_ALPHA\n1 2 3\n4 5 6");
}

#[test]
fn test_serialize_standard_with_alpha_tuple_is_value_error() {
    let mut colors = fixtures::cga();
    colors[0] = colors[0].with_alpha(255);
    common::assert_value_error(serialize(&colors, &HeaderOptions::standard()));
}

#[test]
fn test_serialize_extended_default_count_is_rejected() {
    // The extended factory starts at count 0, which is never valid on disk
    let colors = [ColorTuple::rgb(1, 2, 3)];
    common::assert_protocol_error(serialize(&colors, &HeaderOptions::extended()));
}
