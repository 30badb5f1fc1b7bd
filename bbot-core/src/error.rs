use thiserror::Error;

/// Errors surfaced by the caller layer (config, logging setup, I/O).
///
/// The engine itself never returns an error: a classification miss resolves to
/// the fallback intent, a render miss falls back to the raw template, and
/// invalid context values are clamped.
#[derive(Error, Debug)]
pub enum BbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, BbotError>;
