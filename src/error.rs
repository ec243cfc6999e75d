//! Crate-level error type.

use crate::config::ConfigError;
use crate::dom::RegistryError;
use crate::state::StateError;
use crate::sync::SurfaceError;
use crate::widget::RenderError;

/// Everything a [`Framework`](crate::Framework) operation can fail with.
///
/// Registry and state errors are caller defects; render errors abort the
/// publish that hit them and leave the previous tree mounted.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("no root widget is mounted")]
    NoRoot,
    #[error("callback '{0}' not found")]
    UnknownCallback(String),
    #[error("malformed bridge message: {0}")]
    Bridge(#[from] serde_json::Error),
}
