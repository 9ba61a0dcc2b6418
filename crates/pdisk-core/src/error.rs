use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdiskError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PdiskError>;
