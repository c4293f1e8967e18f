//! Application errors.

use crate::backend::BackendError;
use airdiag_core::ModelError;
use airdiag_render::RenderError;
use thiserror::Error;

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for application commands.
pub type AppResult<T> = Result<T, AppError>;
