use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },

    #[error("Bulk data generation failed: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
