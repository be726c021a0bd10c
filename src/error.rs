//! Error types surfaced at scene construction
//!
//! Nothing here crosses the update/draw boundary: per-frame failures are
//! encoded as state (slot tags, counters) instead.

use thiserror::Error;

/// Asset loading errors reported by an [`crate::assets::AssetLoader`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}

/// Errors that abort scene entry
#[derive(Error, Debug)]
pub enum SceneError {
    /// A required texture, sprite or sound could not be acquired
    #[error("asset load failed: {0}")]
    Asset(#[from] AssetError),

    /// Tuning or manifest JSON could not be parsed
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning values out of range
    #[error("invalid tuning: {0}")]
    Config(String),
}
