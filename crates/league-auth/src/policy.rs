//! Declarative role-based route access rules.

use league_core::error::AppError;
use league_entity::user::UserRole;

use crate::principal::Principal;

/// What a route demands of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Anyone, with or without a principal.
    Public,
    /// Any authenticated principal.
    Authenticated,
    /// A principal holding the role's authority.
    Role(UserRole),
}

/// One row of the access table.
#[derive(Debug, Clone)]
pub struct AccessRule {
    /// Uppercase HTTP methods; empty matches every method.
    methods: Vec<String>,
    /// Path prefix, matched segment by segment.
    prefix: String,
    requirement: Requirement,
}

impl AccessRule {
    /// A rule applying to every method under `prefix`.
    pub fn any(prefix: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            methods: Vec::new(),
            prefix: prefix.into(),
            requirement,
        }
    }

    /// A rule applying to the listed methods under `prefix`.
    pub fn methods(methods: &[&str], prefix: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            methods: methods.iter().map(|m| m.to_ascii_uppercase()).collect(),
            prefix: prefix.into(),
            requirement,
        }
    }

    /// The requirement this rule imposes.
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Whether this rule covers the request.
    pub fn matches(&self, method: &str, path: &str) -> bool {
        let method_ok = self.methods.is_empty()
            || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method));
        method_ok && path_has_prefix(path, &self.prefix)
    }
}

/// Result of evaluating a request against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed.
    Granted,
    /// The route needs a principal and none is attached.
    Unauthenticated,
    /// The principal lacks the required authority.
    Forbidden,
}

/// Ordered access table. The first matching rule wins; unmatched routes
/// require authentication.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
}

impl AccessPolicy {
    /// Builds a policy from an ordered rule list.
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// The league's route table.
    pub fn league_default() -> Self {
        use Requirement::{Public, Role};
        const WRITES: &[&str] = &["POST", "PUT", "DELETE"];

        Self::new(vec![
            AccessRule::any("/api/auth/sign-up", Public),
            AccessRule::any("/api/auth/sign-in", Public),
            AccessRule::any("/api/health", Public),
            AccessRule::any("/api/admin", Role(UserRole::Admin)),
            AccessRule::methods(&["PUT", "DELETE"], "/api/users", Role(UserRole::Admin)),
            AccessRule::methods(WRITES, "/api/players", Role(UserRole::Admin)),
            AccessRule::methods(WRITES, "/api/seasons", Role(UserRole::Admin)),
            AccessRule::methods(WRITES, "/api/matches", Role(UserRole::Admin)),
        ])
    }

    /// The requirement for a request.
    pub fn requirement_for(&self, method: &str, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(AccessRule::requirement)
            .unwrap_or(Requirement::Authenticated)
    }

    /// Evaluates a request against the table.
    pub fn evaluate(&self, method: &str, path: &str, principal: Option<&Principal>) -> AccessDecision {
        match (self.requirement_for(method, path), principal) {
            (Requirement::Public, _) => AccessDecision::Granted,
            (_, None) => AccessDecision::Unauthenticated,
            (Requirement::Authenticated, Some(_)) => AccessDecision::Granted,
            (Requirement::Role(role), Some(p)) if p.has_authority(&role.authority()) => {
                AccessDecision::Granted
            }
            (Requirement::Role(_), Some(_)) => AccessDecision::Forbidden,
        }
    }

    /// Like [`evaluate`](Self::evaluate), as an error for the HTTP layer.
    pub fn check(&self, method: &str, path: &str, principal: Option<&Principal>) -> Result<(), AppError> {
        match self.evaluate(method, path, principal) {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Unauthenticated => Err(AppError::authentication("Authentication required")),
            AccessDecision::Forbidden => Err(AppError::authorization("Access denied")),
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::league_default()
    }
}

/// `/api/auth` covers `/api/auth` and `/api/auth/x`, but not `/api/authors`.
fn path_has_prefix(path: &str, prefix: &str) -> bool {
    let path = path.trim_end_matches('/');
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::error::ErrorKind;

    fn principal(role: UserRole) -> Principal {
        Principal {
            user_id: 7,
            username: "someone".to_string(),
            role,
            authorities: vec![role.authority()],
        }
    }

    #[test]
    fn test_segment_prefix_matching() {
        assert!(path_has_prefix("/api/auth/sign-in", "/api/auth"));
        assert!(path_has_prefix("/api/auth/", "/api/auth"));
        assert!(path_has_prefix("/api/auth", "/api/auth"));
        assert!(!path_has_prefix("/api/authors", "/api/auth"));
        assert!(!path_has_prefix("/api", "/api/auth"));
    }

    #[test]
    fn test_public_routes_need_no_principal() {
        let policy = AccessPolicy::league_default();
        for (method, path) in [
            ("POST", "/api/auth/sign-up"),
            ("POST", "/api/auth/sign-in"),
            ("GET", "/api/health"),
        ] {
            assert_eq!(policy.evaluate(method, path, None), AccessDecision::Granted);
        }
    }

    #[test]
    fn test_me_requires_authentication() {
        let policy = AccessPolicy::league_default();
        assert_eq!(
            policy.evaluate("GET", "/api/auth/me", None),
            AccessDecision::Unauthenticated
        );
        assert_eq!(
            policy.evaluate("GET", "/api/auth/me", Some(&principal(UserRole::User))),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_admin_routes_forbid_users() {
        let policy = AccessPolicy::league_default();
        let user = principal(UserRole::User);
        let admin = principal(UserRole::Admin);

        for (method, path) in [
            ("PUT", "/api/admin/users/1/role"),
            ("DELETE", "/api/users/3"),
            ("PUT", "/api/users/3"),
            ("POST", "/api/players"),
            ("put", "/api/seasons/2"),
            ("DELETE", "/api/matches/9"),
        ] {
            assert_eq!(policy.evaluate(method, path, Some(&user)), AccessDecision::Forbidden);
            assert_eq!(policy.evaluate(method, path, Some(&admin)), AccessDecision::Granted);
        }
    }

    #[test]
    fn test_reads_and_team_writes_need_only_authentication() {
        let policy = AccessPolicy::league_default();
        let user = principal(UserRole::User);
        for (method, path) in [
            ("GET", "/api/users"),
            ("GET", "/api/players/1"),
            ("GET", "/api/matches"),
            ("POST", "/api/teams"),
            ("DELETE", "/api/teams/4"),
        ] {
            assert_eq!(policy.evaluate(method, path, Some(&user)), AccessDecision::Granted);
            assert_eq!(policy.evaluate(method, path, None), AccessDecision::Unauthenticated);
        }
    }

    #[test]
    fn test_unknown_route_requires_authentication() {
        let policy = AccessPolicy::league_default();
        assert_eq!(
            policy.requirement_for("GET", "/api/nowhere"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let policy = AccessPolicy::new(vec![
            AccessRule::any("/open", Requirement::Public),
            AccessRule::any("/open", Requirement::Role(UserRole::Admin)),
        ]);
        assert_eq!(policy.evaluate("GET", "/open/x", None), AccessDecision::Granted);
    }

    #[test]
    fn test_check_maps_to_app_errors() {
        let policy = AccessPolicy::league_default();
        let err = policy.check("GET", "/api/users", None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);

        let user = principal(UserRole::User);
        let err = policy.check("PUT", "/api/admin/users/1/role", Some(&user)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
