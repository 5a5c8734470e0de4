use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness or ownership rejected by the store.
    #[error("{0}")]
    Integrity(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Unique(_) | ModelError::ForeignKey(_) => Self::Integrity(e.to_string()),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { ModelError::from(e).into() }
}

/// Unwrap a required body field or report it as missing.
pub(crate) fn require<T>(field: Option<T>, message: &str) -> Result<T, ServiceError> {
    field.ok_or_else(|| ServiceError::Validation(message.to_string()))
}
