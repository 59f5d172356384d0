//! Fatal errors
//!
//! Anything that stops the app from starting. Recoverable problems go to
//! the `NotificationService` instead and execution continues.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::TextureError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}
