//! Layout error types.

use thiserror::Error;

use crate::types::Handle;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("handle construction failed: {0}")]
    HandleConstruction(String),

    #[error("no solved geometry for handle {0}")]
    GeometryNotAvailable(Handle),

    #[error("unsupported element kind: {0}")]
    UnsupportedElement(String),

    #[error("layout engine error: {0}")]
    Engine(#[from] taffy::TaffyError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
