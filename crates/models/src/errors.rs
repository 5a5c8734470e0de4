use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unique constraint violated: {0}")]
    Unique(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// True for violations the store reports against the submitted data.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Unique(_) | Self::ForeignKey(_))
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Unique(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ForeignKey(msg),
            _ => Self::Db(e.to_string()),
        }
    }
}
