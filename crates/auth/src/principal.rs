use std::collections::BTreeSet;

use depot_core::{LocationId, UserId};

use crate::{AuthorizationPort, JwtClaims, Permission, Role};

/// A fully resolved, authenticated principal.
///
/// Effective permissions are the union of the permissions granted directly
/// in the claims and those granted by the principal's roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user_id: UserId,
    workplace_id: LocationId,
    roles: Vec<Role>,
    permissions: BTreeSet<Permission>,
}

impl Principal {
    pub fn new(
        user_id: UserId,
        workplace_id: LocationId,
        roles: Vec<Role>,
        explicit: impl IntoIterator<Item = Permission>,
    ) -> Self {
        let mut permissions: BTreeSet<Permission> = explicit.into_iter().collect();
        for role in &roles {
            permissions.extend(role.granted_permissions().iter().copied());
        }

        Self {
            user_id,
            workplace_id,
            roles,
            permissions,
        }
    }

    pub fn from_claims(claims: &JwtClaims) -> Self {
        Self::new(
            claims.sub,
            claims.workplace_id,
            claims.roles.clone(),
            claims.permissions.iter().copied(),
        )
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }
}

impl AuthorizationPort for Principal {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    fn workplace_id(&self) -> LocationId {
        self.workplace_id
    }

    fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorize::{authorize, AuthzError};
    use chrono::{Duration, Utc};

    #[test]
    fn roles_and_explicit_permissions_are_merged() {
        let principal = Principal::new(
            UserId::new(5),
            LocationId::new(2),
            vec![Role::new("clerk")],
            [Permission::GetDiscount],
        );

        assert!(principal.has_permission(Permission::ViewItem));
        assert!(principal.has_permission(Permission::UpdateItems));
        assert!(principal.has_permission(Permission::GetDiscount));
        assert!(!principal.has_permission(Permission::DeleteItems));
        assert!(!principal.has_permission(Permission::Admin));
        assert!(principal.is_authenticated());
    }

    #[test]
    fn from_claims_carries_identity() {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: UserId::new(9),
            workplace_id: LocationId::new(3),
            roles: vec![Role::new("admin")],
            permissions: vec![],
            issued_at: now,
            expires_at: now + Duration::minutes(5),
        };

        let principal = Principal::from_claims(&claims);
        assert_eq!(principal.user_id(), UserId::new(9));
        assert_eq!(principal.workplace_id(), LocationId::new(3));
        assert_eq!(principal.permissions().count(), Permission::ALL.len());
    }

    #[test]
    fn authorize_reports_the_missing_permission() {
        let principal = Principal::new(UserId::new(1), LocationId::new(1), vec![], []);
        assert_eq!(
            authorize(&principal, Permission::DeleteItems),
            Err(AuthzError::Forbidden(Permission::DeleteItems))
        );
    }
}
