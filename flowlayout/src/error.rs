//! Error types for flowlayout.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("invalid {side} margin: {value}")]
    InvalidMargin { side: &'static str, value: f32 },

    #[error("invalid {axis} size: {value}")]
    InvalidSize { axis: &'static str, value: f32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
