//! Route-prefix access policy.
//!
//! Evaluated after [`authenticate`](super::auth::authenticate) and before any
//! handler. Rules are checked in order and match whole path segments, so
//! `/admin` covers `/admin` and `/admin/users` but not `/administrator`.
//! Roles are not hierarchical.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use rolegate_core::AppError;
use rolegate_models::{ADMIN_ROLE, DEFAULT_ROLE, MODERATOR_ROLE};
use tracing::warn;

use super::auth::AuthenticatedUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Public,
    Authenticated,
    Role(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct AccessRule {
    pub prefix: &'static str,
    pub requirement: Requirement,
}

pub const ACCESS_RULES: &[AccessRule] = &[
    AccessRule {
        prefix: "/public",
        requirement: Requirement::Public,
    },
    AccessRule {
        prefix: "/auth",
        requirement: Requirement::Public,
    },
    AccessRule {
        prefix: "/swagger-ui",
        requirement: Requirement::Public,
    },
    AccessRule {
        prefix: "/api-docs",
        requirement: Requirement::Public,
    },
    AccessRule {
        prefix: "/admin",
        requirement: Requirement::Role(ADMIN_ROLE),
    },
    AccessRule {
        prefix: "/moderator",
        requirement: Requirement::Role(MODERATOR_ROLE),
    },
    AccessRule {
        prefix: "/user",
        requirement: Requirement::Role(DEFAULT_ROLE),
    },
];

fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// First matching rule wins; unmatched paths need any authenticated caller.
pub fn required_for(path: &str) -> Requirement {
    ACCESS_RULES
        .iter()
        .find(|rule| matches_prefix(path, rule.prefix))
        .map(|rule| rule.requirement)
        .unwrap_or(Requirement::Authenticated)
}

pub fn check(requirement: Requirement, principal: Option<&AuthenticatedUser>) -> Result<(), AppError> {
    match (requirement, principal) {
        (Requirement::Public, _) => Ok(()),
        (_, None) => Err(AppError::forbidden(
            "Access denied. Authentication required".to_string(),
        )),
        (Requirement::Authenticated, Some(_)) => Ok(()),
        (Requirement::Role(role), Some(user)) if user.has_role(role) => Ok(()),
        (Requirement::Role(role), Some(_)) => Err(AppError::forbidden(format!(
            "Access denied. Missing required role: {}",
            role
        ))),
    }
}

pub async fn authorize(req: Request, next: Next) -> Response {
    let path = req.uri().path();
    let requirement = required_for(path);
    let principal = req.extensions().get::<AuthenticatedUser>();

    if let Err(err) = check(requirement, principal) {
        warn!(
            path = %path,
            email = principal.map(|p| p.email.as_str()).unwrap_or("anonymous"),
            "access denied"
        );
        return err.into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rolegate_models::UserStatus;

    fn principal(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            email: "p@example.com".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn test_open_prefixes() {
        assert_eq!(required_for("/public"), Requirement::Public);
        assert_eq!(required_for("/public/health"), Requirement::Public);
        assert_eq!(required_for("/auth/login"), Requirement::Public);
        assert_eq!(required_for("/swagger-ui/index.html"), Requirement::Public);
        assert_eq!(required_for("/api-docs/openapi.json"), Requirement::Public);
    }

    #[test]
    fn test_role_prefixes() {
        assert_eq!(required_for("/admin"), Requirement::Role(ADMIN_ROLE));
        assert_eq!(
            required_for("/admin/users/pending"),
            Requirement::Role(ADMIN_ROLE)
        );
        assert_eq!(
            required_for("/moderator/me"),
            Requirement::Role(MODERATOR_ROLE)
        );
        assert_eq!(required_for("/user/me"), Requirement::Role(DEFAULT_ROLE));
    }

    #[test]
    fn test_prefix_matches_whole_segments() {
        assert_eq!(required_for("/administrator"), Requirement::Authenticated);
        assert_eq!(required_for("/users"), Requirement::Authenticated);
        assert_eq!(required_for("/authx"), Requirement::Authenticated);
        assert_eq!(required_for("/"), Requirement::Authenticated);
    }

    #[test]
    fn test_check_public_allows_anonymous() {
        assert!(check(Requirement::Public, None).is_ok());
    }

    #[test]
    fn test_check_protected_refuses_anonymous() {
        let err = check(Requirement::Authenticated, None).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);

        let err = check(Requirement::Role(ADMIN_ROLE), None).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_check_role() {
        let admin = principal(&[ADMIN_ROLE]);
        assert!(check(Requirement::Role(ADMIN_ROLE), Some(&admin)).is_ok());
        assert!(check(Requirement::Authenticated, Some(&admin)).is_ok());

        let err = check(Requirement::Role(DEFAULT_ROLE), Some(&admin)).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(
            err.message(),
            "Access denied. Missing required role: ROLE_USER"
        );
    }
}
