use core::str::FromStr;

use serde::{Deserialize, Serialize};

use depot_core::{DomainError, DomainResult};

/// Named capability checked against a caller's authorization context.
///
/// On the wire (tokens, JSON) permissions are dotted strings such as
/// `"items.view"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "items.view")]
    ViewItem,
    #[serde(rename = "items.create")]
    CreateItems,
    #[serde(rename = "items.update")]
    UpdateItems,
    #[serde(rename = "items.delete")]
    DeleteItems,
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "items.discount")]
    GetDiscount,
}

impl Permission {
    pub const ALL: [Permission; 6] = [
        Permission::ViewItem,
        Permission::CreateItems,
        Permission::UpdateItems,
        Permission::DeleteItems,
        Permission::Admin,
        Permission::GetDiscount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewItem => "items.view",
            Permission::CreateItems => "items.create",
            Permission::UpdateItems => "items.update",
            Permission::DeleteItems => "items.delete",
            Permission::Admin => "admin",
            Permission::GetDiscount => "items.discount",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown permission '{s}'")))
    }
}
