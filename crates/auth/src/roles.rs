use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Permission;

/// Role identifier used for RBAC.
///
/// Roles are opaque strings in tokens; [`Role::granted_permissions`] is the
/// static policy that turns them into permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Permissions this role grants. Unknown roles grant nothing.
    pub fn granted_permissions(&self) -> &'static [Permission] {
        use Permission::*;

        match self.as_str() {
            "admin" => &Permission::ALL,
            "manager" => &[ViewItem, CreateItems, UpdateItems, DeleteItems, GetDiscount],
            "clerk" => &[ViewItem, CreateItems, UpdateItems],
            "customer" => &[ViewItem, GetDiscount],
            _ => &[],
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
