use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid commune code: {0:?}")]
    InvalidCodgeo(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
