use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("HTTP error: {0}")]
    #[diagnostic(code(iljeong::http))]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    #[diagnostic(code(iljeong::url))]
    Url(#[from] url::ParseError),

    #[error("Failed to fetch events: {0}")]
    #[diagnostic(code(iljeong::fetch))]
    Fetch(String),

    #[error("Failed to save event: {0}")]
    #[diagnostic(code(iljeong::save))]
    Save(String),

    #[error("Failed to delete event: {0}")]
    #[diagnostic(code(iljeong::delete))]
    Delete(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(iljeong::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(iljeong::config))]
    Config(String),

    #[error("Events actor error: {0}")]
    #[diagnostic(code(iljeong::actor))]
    Actor(String),

    #[error(transparent)]
    #[diagnostic(code(iljeong::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(iljeong::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(iljeong::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create save errors
pub fn save_error(message: &str) -> Error {
    Error::Save(message.to_string())
}

/// Helper to create delete errors
pub fn delete_error(message: &str) -> Error {
    Error::Delete(message.to_string())
}

/// Helper to create actor errors
pub fn actor_error(message: &str) -> Error {
    Error::Actor(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
