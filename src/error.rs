use color_depth::DepthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    /// The file or header breaks the JASC-PAL format rules
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A component value is outside its allowed range
    #[error("Value error: {0}")]
    Value(String),

    #[error("Depth error: {0}")]
    Depth(#[from] DepthError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaletteError {
    pub(crate) fn protocol(msg: impl Into<String>) -> Self {
        PaletteError::Protocol(msg.into())
    }

    pub(crate) fn value(msg: impl Into<String>) -> Self {
        PaletteError::Value(msg.into())
    }
}
