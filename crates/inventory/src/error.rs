use thiserror::Error;

use depot_auth::AuthzError;
use depot_core::ItemId;

use crate::ports::{AuditError, StoreError};

/// Outcome of a failed [`crate::ItemService`] operation.
///
/// Any store or audit fault is reported as `BadInput` with the fault's own
/// message; there is no finer classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("forbidden")]
    Forbidden,

    #[error("Item with id {0} not found")]
    NotFound(ItemId),

    #[error("{0}")]
    BadInput(String),
}

impl ItemError {
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Self::BadInput(msg.into())
    }
}

impl From<AuthzError> for ItemError {
    fn from(_: AuthzError) -> Self {
        Self::Forbidden
    }
}

impl From<StoreError> for ItemError {
    fn from(err: StoreError) -> Self {
        Self::BadInput(err.to_string())
    }
}

impl From<AuditError> for ItemError {
    fn from(err: AuditError) -> Self {
        Self::BadInput(err.to_string())
    }
}
