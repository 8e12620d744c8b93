use thiserror::Error;

use depot_core::{LocationId, UserId};

use crate::Permission;

/// Capability view of the current caller.
///
/// Everything that needs to ask "who is calling and what may they do"
/// depends on this trait rather than on tokens or sessions directly.
pub trait AuthorizationPort: Send + Sync {
    fn is_authenticated(&self) -> bool;

    fn has_permission(&self, permission: Permission) -> bool;

    /// Location the caller works at.
    fn workplace_id(&self) -> LocationId;

    fn user_id(&self) -> UserId;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Check a single permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(caller: &dyn AuthorizationPort, required: Permission) -> Result<(), AuthzError> {
    if caller.has_permission(required) {
        Ok(())
    } else {
        tracing::debug!(user_id = %caller.user_id(), permission = %required, "permission denied");
        Err(AuthzError::Forbidden(required))
    }
}
