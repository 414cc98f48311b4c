use color_depth::{depth_from_bits, ColorDepth};
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// The two JASC-PAL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteFormat {
    /// Plain JASC-PAL: 16 or 256 RGB colors
    #[serde(rename = "JASC-PAL")]
    Standard,
    /// JASC-PAL-EXT: any count, transparency, bit depth and alpha
    #[serde(rename = "JASC-PAL-EXT")]
    Extended,
}

impl PaletteFormat {
    /// The first line of a file in this format.
    pub const fn magic(self) -> &'static str {
        match self {
            PaletteFormat::Standard => "JASC-PAL",
            PaletteFormat::Extended => "JASC-PAL-EXT",
        }
    }

    pub fn from_magic(line: &str) -> Option<Self> {
        match line {
            "JASC-PAL" => Some(PaletteFormat::Standard),
            "JASC-PAL-EXT" => Some(PaletteFormat::Extended),
            _ => None,
        }
    }
}

/// Whether an extended palette carries alpha values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AlphaMode {
    #[serde(rename = "ALPHA")]
    Used,
    #[default]
    #[serde(rename = "NO_ALPHA")]
    Unused,
}

impl AlphaMode {
    pub const fn keyword(self) -> &'static str {
        match self {
            AlphaMode::Used => "ALPHA",
            AlphaMode::Unused => "NO_ALPHA",
        }
    }

    pub fn from_keyword(line: &str) -> Option<Self> {
        match line {
            "ALPHA" => Some(AlphaMode::Used),
            "NO_ALPHA" => Some(AlphaMode::Unused),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_used(self) -> bool {
        matches!(self, AlphaMode::Used)
    }
}

/// Header lines only present in JASC-PAL-EXT files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedHeader {
    /// Index of the transparent color, `None` when written as -1
    pub transparency: Option<usize>,
    /// Bits per subpixel, 1 to 8
    pub bits_per_subpixel: u8,
    pub alpha: AlphaMode,
}

impl Default for ExtendedHeader {
    fn default() -> Self {
        Self {
            transparency: None,
            bits_per_subpixel: 8,
            alpha: AlphaMode::Unused,
        }
    }
}

/// Parsed or to-be-written palette header.
///
/// `extended` is `Some` exactly for JASC-PAL-EXT headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteHeader {
    pub version: String,
    pub count: usize,
    pub extended: Option<ExtendedHeader>,
}

/// Counts a standard palette may declare.
pub const STANDARD_COUNTS: [usize; 2] = [16, 256];

impl PaletteHeader {
    pub fn standard(version: impl Into<String>, count: usize) -> Self {
        Self {
            version: version.into(),
            count,
            extended: None,
        }
    }

    pub fn extended(version: impl Into<String>, count: usize, extended: ExtendedHeader) -> Self {
        Self {
            version: version.into(),
            count,
            extended: Some(extended),
        }
    }

    pub fn format(&self) -> PaletteFormat {
        if self.extended.is_some() {
            PaletteFormat::Extended
        } else {
            PaletteFormat::Standard
        }
    }

    pub fn alpha(&self) -> AlphaMode {
        self.extended.map(|ext| ext.alpha).unwrap_or_default()
    }

    /// Components per body line: 4 when alpha is used, else 3.
    pub fn component_count(&self) -> usize {
        if self.alpha().is_used() {
            4
        } else {
            3
        }
    }

    pub fn transparency(&self) -> Option<usize> {
        self.extended.and_then(|ext| ext.transparency)
    }

    /// The color depth the header describes.
    ///
    /// Standard palettes are always RGB888. Extended palettes resolve their
    /// bits per subpixel and alpha mode through [`depth_from_bits`].
    pub fn depth(&self) -> Result<ColorDepth, PaletteError> {
        match self.extended {
            None => Ok(ColorDepth::Rgb888),
            Some(ext) => Ok(depth_from_bits(
                i32::from(ext.bits_per_subpixel),
                ext.alpha.is_used(),
                false,
            )?),
        }
    }

    /// Check the header against the format rules.
    ///
    /// - version must fit on one line, without surrounding whitespace
    /// - standard: count is 16 or 256
    /// - extended: count is at least 1, the transparency index is below the
    ///   count, bits per subpixel are 1 to 8
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.version.contains(['\n', '\r']) {
            return Err(PaletteError::protocol("Version must fit on a single line"));
        }
        if self.version != self.version.trim() {
            return Err(PaletteError::protocol(format!(
                "Version {:?} has surrounding whitespace",
                self.version
            )));
        }

        match self.extended {
            None => {
                if !STANDARD_COUNTS.contains(&self.count) {
                    return Err(PaletteError::protocol(format!(
                        "Standard JASC-PAL files may only have 16 or 256 colors, got {}",
                        self.count
                    )));
                }
            }
            Some(ext) => {
                if self.count < 1 {
                    return Err(PaletteError::protocol(
                        "Extended JASC-PAL files must have at least one color",
                    ));
                }
                if let Some(index) = ext.transparency {
                    if index >= self.count {
                        return Err(PaletteError::protocol(format!(
                            "Transparency index {} outside of [-1, {})",
                            index, self.count
                        )));
                    }
                }
                if !(1..=8).contains(&ext.bits_per_subpixel) {
                    return Err(PaletteError::protocol(format!(
                        "Bits per subpixel must be 1 to 8, got {}",
                        ext.bits_per_subpixel
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_round_trip() {
        for format in [PaletteFormat::Standard, PaletteFormat::Extended] {
            assert_eq!(PaletteFormat::from_magic(format.magic()), Some(format));
        }
        assert_eq!(PaletteFormat::from_magic("RIFF"), None);
    }

    #[test]
    fn test_alpha_keyword_round_trip() {
        for mode in [AlphaMode::Used, AlphaMode::Unused] {
            assert_eq!(AlphaMode::from_keyword(mode.keyword()), Some(mode));
        }
        assert_eq!(AlphaMode::from_keyword("NO ALPHA"), None);
    }

    #[test]
    fn test_standard_counts() {
        assert!(PaletteHeader::standard("0100", 16).validate().is_ok());
        assert!(PaletteHeader::standard("0100", 256).validate().is_ok());
        assert!(matches!(
            PaletteHeader::standard("0100", 10).validate(),
            Err(PaletteError::Protocol(_))
        ));
    }

    #[test]
    fn test_extended_rules() {
        let ext = ExtendedHeader::default();
        assert!(PaletteHeader::extended("0100", 1, ext).validate().is_ok());
        assert!(PaletteHeader::extended("0100", 0, ext).validate().is_err());

        let transparent = ExtendedHeader {
            transparency: Some(3),
            ..ext
        };
        assert!(PaletteHeader::extended("0100", 4, transparent).validate().is_ok());
        assert!(PaletteHeader::extended("0100", 3, transparent).validate().is_err());

        for bits in [0, 9] {
            let header = PaletteHeader::extended(
                "0100",
                4,
                ExtendedHeader {
                    bits_per_subpixel: bits,
                    ..ext
                },
            );
            assert!(header.validate().is_err(), "{} bits accepted", bits);
        }
    }

    #[test]
    fn test_multiline_version_rejected() {
        assert!(PaletteHeader::standard("01\n00", 16).validate().is_err());
    }

    #[test]
    fn test_padded_version_rejected() {
        for version in [" 0100", "0100 ", "\t0100"] {
            assert!(
                matches!(
                    PaletteHeader::standard(version, 16).validate(),
                    Err(PaletteError::Protocol(_))
                ),
                "{:?} accepted",
                version
            );
        }
        assert!(PaletteHeader::standard("v 1.0", 16).validate().is_ok());
    }

    #[test]
    fn test_header_depth() {
        assert_eq!(
            PaletteHeader::standard("0100", 16).depth().unwrap(),
            ColorDepth::Rgb888
        );
        let header = PaletteHeader::extended(
            "0100",
            2,
            ExtendedHeader {
                transparency: None,
                bits_per_subpixel: 4,
                alpha: AlphaMode::Used,
            },
        );
        assert_eq!(header.depth().unwrap(), ColorDepth::Rgba4444);
        assert_eq!(header.component_count(), 4);
    }
}
