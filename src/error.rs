use thiserror::Error;

/// Application-level errors for bookfind
#[derive(Debug, Error)]
pub enum BookfindError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to start API worker: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
