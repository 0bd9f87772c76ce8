use thiserror::Error;

use super::ApiVersion;
use crate::paging::PagingError;
use crate::store::StoreError;

/// Errors surfaced by the message API.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected before touching the store.
    #[error("{0}")]
    InvalidArgument(String),
    /// The operation does not exist in this API version.
    #[error("{operation} is not available in API {version}")]
    Unsupported {
        operation: &'static str,
        version: ApiVersion,
    },
    /// Internal store fault.
    #[error("storage fault: {0}")]
    Storage(#[from] StoreError),
}

impl ServiceError {
    pub fn missing_parameter(name: &str) -> Self {
        ServiceError::InvalidArgument(format!("required parameter '{}' is not present", name))
    }

    /// True for errors caused by the request rather than by the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Storage(_))
    }
}

impl From<PagingError> for ServiceError {
    fn from(err: PagingError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
