//! Error types for scene configuration and construction.

use thiserror::Error;

/// Errors raised while configuring or building the crystal tree scene
#[derive(Debug, Error)]
pub enum CrystalTreeError {
    /// A count parameter was zero or negative
    #[error("{field} must be a positive count, got {value}")]
    NonPositiveCount { field: &'static str, value: i64 },

    /// A length or rate parameter was zero, negative or not finite
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositiveDimension { field: &'static str, value: f32 },

    /// Layered formations need a bottom and a top layer
    #[error("{field} needs at least 2 layers, got {value}")]
    TooFewLayers { field: &'static str, value: usize },

    /// A palette had no entries
    #[error("{field} palette must contain at least one color")]
    EmptyPalette { field: &'static str },

    /// A palette entry was not a `#rrggbb` string
    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    /// The YAML configuration could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A particle system name did not match any system in the scene
    #[error("unknown particle system '{0}'")]
    UnknownSystem(String),
}

pub type Result<T> = std::result::Result<T, CrystalTreeError>;
