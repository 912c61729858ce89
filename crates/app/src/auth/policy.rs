//! Role checks over an authenticated caller.
//!
//! These mirror the database row-level security policies so the API can
//! reject a request before it reaches Postgres. RLS stays authoritative.

use thiserror::Error;

use crate::auth::{AuthenticatedUser, Role};

/// The caller's role is not allowed to perform the action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("role {role} is not permitted to perform this action")]
pub struct AuthorizationError {
    pub role: Role,
}

impl AuthenticatedUser {
    /// Whether the caller holds any of the given roles.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Fail unless the caller holds one of the given roles.
    pub fn require_any_role(&self, roles: &[Role]) -> Result<(), AuthorizationError> {
        if self.has_any_role(roles) {
            Ok(())
        } else {
            Err(AuthorizationError { role: self.role })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::profiles::records::ProfileUuid;

    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            uuid: ProfileUuid::new(),
            email: None,
            role,
            hotel_uuid: None,
        }
    }

    #[test]
    fn matching_role_is_allowed() {
        let admin = user(Role::Admin);

        assert!(admin.has_any_role(&[Role::Admin, Role::Hotel]));
        assert_eq!(admin.require_any_role(&[Role::Admin]), Ok(()));
    }

    #[test]
    fn other_roles_are_forbidden() {
        let staff = user(Role::Staff);

        assert!(!staff.has_any_role(&[Role::Admin, Role::Customer]));
        assert_eq!(
            staff.require_any_role(&[Role::Admin, Role::Customer]),
            Err(AuthorizationError { role: Role::Staff })
        );
    }

    #[test]
    fn empty_role_list_forbids_everyone() {
        for role in Role::ALL {
            assert!(user(role).require_any_role(&[]).is_err());
        }
    }
}
