//! Domain errors

use thiserror::Error;

use crate::domain::Entity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Wrong id type")]
    WrongIdType,

    #[error("One or more wrong types id")]
    WrongIdTypes,

    #[error("{0} not found")]
    NotFound(Entity),

    #[error("ID of {0} not registered")]
    ParentNotRegistered(Entity),

    #[error("Title of {0} already registered")]
    TitleAlreadyRegistered(Entity),

    /// A unique constraint fired at commit time although the pre-checks passed.
    #[error("A duplicate record already exists")]
    DuplicateRecord,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}
