//! WebServer-specific error types

use thiserror::Error;
use research::ResearchError;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Research setup failed: {0}")]
    Research(#[from] ResearchError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config { message: message.into() }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
