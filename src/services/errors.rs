use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("{0}")]
    Form(String),

    #[error("Invalid value: {0}")]
    TypeConstraint(String),

    /// Any failure while fetching a list page; the message is for display.
    #[error("Failed to load list: {0}")]
    ListLoad(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
