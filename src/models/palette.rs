use color_depth::{ColorDepth, ColorTuple};

use super::header::{PaletteFormat, PaletteHeader};
use crate::error::PaletteError;

/// A header together with its colors.
///
/// Construction checks that the color count matches the header and that
/// every tuple has the component count the header's alpha mode implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    header: PaletteHeader,
    colors: Vec<ColorTuple>,
}

impl Palette {
    pub fn new(header: PaletteHeader, colors: Vec<ColorTuple>) -> Result<Self, PaletteError> {
        header.validate()?;

        if colors.len() != header.count {
            return Err(PaletteError::protocol(format!(
                "Header declares {} colors but {} were given",
                header.count,
                colors.len()
            )));
        }

        let expected = header.component_count();
        if let Some((index, color)) = colors
            .iter()
            .enumerate()
            .find(|(_, c)| c.component_count() != expected)
        {
            return Err(PaletteError::protocol(format!(
                "Color {} has {} components, {} header expects {}",
                index,
                color.component_count(),
                header.format().magic(),
                expected
            )));
        }

        Ok(Self { header, colors })
    }

    pub fn header(&self) -> &PaletteHeader {
        &self.header
    }

    pub fn colors(&self) -> &[ColorTuple] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<ColorTuple> {
        self.colors
    }

    pub fn format(&self) -> PaletteFormat {
        self.header.format()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color depth declared by the header.
    pub fn depth(&self) -> Result<ColorDepth, PaletteError> {
        self.header.depth()
    }

    /// The color marked transparent, if any.
    pub fn transparent_color(&self) -> Option<ColorTuple> {
        self.header
            .transparency()
            .and_then(|index| self.colors.get(index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::header::{AlphaMode, ExtendedHeader};

    fn ext_header(count: usize, alpha: AlphaMode) -> PaletteHeader {
        PaletteHeader::extended(
            "0100",
            count,
            ExtendedHeader {
                transparency: Some(0),
                bits_per_subpixel: 8,
                alpha,
            },
        )
    }

    #[test]
    fn test_count_must_match_header() {
        let colors = vec![ColorTuple::rgb(0, 0, 0); 15];
        let result = Palette::new(PaletteHeader::standard("0100", 16), colors);
        assert!(matches!(result, Err(PaletteError::Protocol(_))));
    }

    #[test]
    fn test_component_count_follows_alpha_mode() {
        let rgb = vec![ColorTuple::rgb(1, 2, 3)];
        let rgba = vec![ColorTuple::rgba(1, 2, 3, 4)];

        assert!(Palette::new(ext_header(1, AlphaMode::Unused), rgb.clone()).is_ok());
        assert!(Palette::new(ext_header(1, AlphaMode::Used), rgba.clone()).is_ok());
        assert!(Palette::new(ext_header(1, AlphaMode::Used), rgb).is_err());
        assert!(Palette::new(ext_header(1, AlphaMode::Unused), rgba).is_err());
    }

    #[test]
    fn test_transparent_color() {
        let colors = vec![ColorTuple::rgb(255, 0, 255), ColorTuple::rgb(0, 0, 0)];
        let palette = Palette::new(ext_header(2, AlphaMode::Unused), colors).unwrap();
        assert_eq!(palette.transparent_color(), Some(ColorTuple::rgb(255, 0, 255)));
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.format(), PaletteFormat::Extended);
    }
}
