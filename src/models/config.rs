use serde::{Deserialize, Serialize};
use std::path::Path;

use super::header::{AlphaMode, ExtendedHeader, PaletteFormat, PaletteHeader};
use crate::error::PaletteError;

/// Header settings used when saving a palette.
///
/// This is the flat, file-friendly form of a [`PaletteHeader`]: the
/// transparency index is written as -1 for "none", and the extended fields
/// are present but ignored for standard palettes. It can be loaded from
/// YAML:
///
/// ```yaml
/// format: JASC-PAL-EXT
/// version: "0100"
/// count: 4
/// transparency: 0
/// depth_bits: 5
/// alpha: NO_ALPHA
/// ```
///
/// Missing fields take the standard header defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOptions {
    #[serde(default = "default_format")]
    pub format: PaletteFormat,

    #[serde(default = "default_version")]
    pub version: String,

    /// Number of colors the header declares
    #[serde(default = "default_count")]
    pub count: usize,

    /// Index of the transparent color, -1 for none (extended only)
    #[serde(default = "default_transparency")]
    pub transparency: i64,

    /// Bits per subpixel (extended only)
    #[serde(default = "default_depth_bits")]
    pub depth_bits: u8,

    /// Alpha usage (extended only)
    #[serde(default)]
    pub alpha: AlphaMode,
}

fn default_format() -> PaletteFormat {
    PaletteFormat::Standard
}

fn default_version() -> String {
    "0100".to_string()
}

fn default_count() -> usize {
    16
}

fn default_transparency() -> i64 {
    -1
}

fn default_depth_bits() -> u8 {
    8
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl HeaderOptions {
    /// Standard header: version "0100", 16 colors.
    pub fn standard() -> Self {
        Self {
            format: default_format(),
            version: default_version(),
            count: default_count(),
            transparency: default_transparency(),
            depth_bits: default_depth_bits(),
            alpha: AlphaMode::Unused,
        }
    }

    /// Extended header: version "0100", no colors yet, no transparency,
    /// 8 bits per subpixel, no alpha.
    ///
    /// The count must be set before saving.
    pub fn extended() -> Self {
        Self {
            format: PaletteFormat::Extended,
            count: 0,
            ..Self::standard()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn transparency(mut self, index: i64) -> Self {
        self.transparency = index;
        self
    }

    pub fn depth_bits(mut self, bits: u8) -> Self {
        self.depth_bits = bits;
        self
    }

    pub fn alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PaletteError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            format = options.format.magic(),
            count = options.count,
            "Loaded header options"
        );
        Ok(options)
    }

    /// Options that reproduce `header` when saved.
    pub fn from_header(header: &PaletteHeader) -> Self {
        let base = match header.extended {
            None => Self::standard(),
            Some(ext) => Self {
                transparency: ext
                    .transparency
                    .and_then(|i| i64::try_from(i).ok())
                    .unwrap_or(-1),
                depth_bits: ext.bits_per_subpixel,
                alpha: ext.alpha,
                ..Self::extended()
            },
        };
        Self {
            version: header.version.clone(),
            count: header.count,
            ..base
        }
    }

    /// Convert to a validated [`PaletteHeader`].
    pub fn to_header(&self) -> Result<PaletteHeader, PaletteError> {
        let header = match self.format {
            PaletteFormat::Standard => PaletteHeader::standard(self.version.clone(), self.count),
            PaletteFormat::Extended => {
                let transparency = match self.transparency {
                    -1 => None,
                    index => Some(usize::try_from(index).map_err(|_| {
                        PaletteError::protocol(format!(
                            "Transparency index {} outside of [-1, {})",
                            index, self.count
                        ))
                    })?),
                };
                PaletteHeader::extended(
                    self.version.clone(),
                    self.count,
                    ExtendedHeader {
                        transparency,
                        bits_per_subpixel: self.depth_bits,
                        alpha: self.alpha,
                    },
                )
            }
        };
        header.validate()?;
        Ok(header)
    }
}
