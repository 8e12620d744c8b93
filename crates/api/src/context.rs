use depot_auth::{AuthorizationPort, Permission, Principal};
use depot_core::{LocationId, UserId};

/// Caller context for a request.
///
/// Requests without a bearer token run as `Anonymous`: not authenticated,
/// no permissions, zero ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallerContext {
    #[default]
    Anonymous,
    Authenticated(Principal),
}

impl CallerContext {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            CallerContext::Anonymous => None,
            CallerContext::Authenticated(p) => Some(p),
        }
    }
}

impl AuthorizationPort for CallerContext {
    fn is_authenticated(&self) -> bool {
        self.principal().is_some()
    }

    fn has_permission(&self, permission: Permission) -> bool {
        self.principal().is_some_and(|p| p.has_permission(permission))
    }

    fn workplace_id(&self) -> LocationId {
        self.principal().map(|p| p.workplace_id()).unwrap_or_default()
    }

    fn user_id(&self) -> UserId {
        self.principal().map(|p| p.user_id()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_auth::Role;

    #[test]
    fn anonymous_has_nothing() {
        let caller = CallerContext::Anonymous;
        assert!(!caller.is_authenticated());
        assert!(Permission::ALL.iter().all(|p| !caller.has_permission(*p)));
        assert_eq!(caller.user_id(), UserId::new(0));
    }

    #[test]
    fn authenticated_delegates_to_principal() {
        let principal = Principal::new(UserId::new(3), LocationId::new(8), vec![Role::new("customer")], []);
        let caller = CallerContext::Authenticated(principal);

        assert!(caller.is_authenticated());
        assert!(caller.has_permission(Permission::GetDiscount));
        assert!(!caller.has_permission(Permission::CreateItems));
        assert_eq!(caller.workplace_id(), LocationId::new(8));
    }
}
