use thiserror::Error;

#[derive(Error, Debug)]
pub enum BijouError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid karat: {0}")]
    InvalidKarat(String),

    #[error("Metal not found: {0}")]
    MetalNotFound(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BijouError>;
