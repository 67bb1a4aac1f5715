use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type KernelResult<T> = Result<T, KernelError>;
