use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Error: No user sub provided.")]
    MissingIdentifierError,

    #[error("{0}")]
    StoreWriteError(String),

    #[error("DynamoDB read error: {0}")]
    StoreReadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
