//! Role-based route guarding
//!
//! Navigation admission is a pure function of (loading finished, session
//! role, route requirement). The wrapper type consults the session manager
//! so callers evaluate a route in one call.

use std::sync::Arc;

use campus_types::Role;

use crate::SessionManager;

/// Guard decision for a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Startup loading has not finished; render a placeholder only
    Loading,
    /// Admit and render the requested view
    Authorized,
    /// No session; redirect to login
    Unauthenticated,
    /// Session role not in the route's allowed set; redirect to the
    /// unauthorized page
    Forbidden,
}

impl GuardState {
    /// Redirect target for non-admitting states, if any
    pub fn redirect(&self) -> Option<RedirectTarget> {
        match self {
            Self::Loading | Self::Authorized => None,
            Self::Unauthenticated => Some(RedirectTarget::Login),
            Self::Forbidden => Some(RedirectTarget::Unauthorized),
        }
    }
}

/// Where a rejected navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Login page
    Login,
    /// Unauthorized page
    Unauthorized,
}

/// Role requirement declared by a route
///
/// An empty requirement admits any authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    allowed: Vec<Role>,
}

impl RouteRequirement {
    /// Any authenticated user may enter
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    /// Only the given roles may enter
    pub fn roles(allowed: impl Into<Vec<Role>>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    /// Whether the requirement names no roles
    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Whether the given role satisfies the requirement
    pub fn allows(&self, role: Role) -> bool {
        self.is_open() || self.allowed.contains(&role)
    }
}

impl From<&[Role]> for RouteRequirement {
    fn from(allowed: &[Role]) -> Self {
        Self::roles(allowed.to_vec())
    }
}

/// Evaluate a navigation attempt
///
/// Admits iff loading has finished, a session exists, and the requirement
/// is empty or contains the session's role.
pub fn evaluate(loaded: bool, role: Option<Role>, requirement: &RouteRequirement) -> GuardState {
    if !loaded {
        return GuardState::Loading;
    }
    match role {
        None => GuardState::Unauthenticated,
        Some(role) if requirement.allows(role) => GuardState::Authorized,
        Some(_) => GuardState::Forbidden,
    }
}

/// Route guard bound to a session manager
#[derive(Clone)]
pub struct RouteGuard {
    manager: Arc<SessionManager>,
}

impl RouteGuard {
    /// Create a guard over the given session manager
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self { manager }
    }

    /// Evaluate the current session against a route's requirement
    pub fn check(&self, requirement: &RouteRequirement) -> GuardState {
        let state = evaluate(self.manager.is_loaded(), self.manager.role(), requirement);
        if state == GuardState::Forbidden {
            tracing::debug!(
                role = ?self.manager.role(),
                requirement = ?requirement,
                "Navigation forbidden"
            );
        }
        state
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_masks_everything() {
        let open = RouteRequirement::any_authenticated();
        let students = RouteRequirement::roles(vec![Role::Student]);

        assert_eq!(evaluate(false, None, &open), GuardState::Loading);
        assert_eq!(
            evaluate(false, Some(Role::Student), &students),
            GuardState::Loading
        );
        assert_eq!(
            evaluate(false, Some(Role::Instructor), &students),
            GuardState::Loading
        );
    }

    #[test]
    fn test_no_session_redirects_to_login() {
        let open = RouteRequirement::any_authenticated();
        let state = evaluate(true, None, &open);
        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(state.redirect(), Some(RedirectTarget::Login));
    }

    #[test]
    fn test_open_route_admits_any_role() {
        let open = RouteRequirement::any_authenticated();
        assert_eq!(
            evaluate(true, Some(Role::Student), &open),
            GuardState::Authorized
        );
        assert_eq!(
            evaluate(true, Some(Role::Instructor), &open),
            GuardState::Authorized
        );
    }

    #[test]
    fn test_role_mismatch_is_forbidden() {
        // Instructor visiting a student-only route
        let students_only = RouteRequirement::roles(vec![Role::Student]);
        let state = evaluate(true, Some(Role::Instructor), &students_only);
        assert_eq!(state, GuardState::Forbidden);
        assert_eq!(state.redirect(), Some(RedirectTarget::Unauthorized));
    }

    #[test]
    fn test_role_match_is_authorized() {
        let instructors_only = RouteRequirement::roles(vec![Role::Instructor]);
        let state = evaluate(true, Some(Role::Instructor), &instructors_only);
        assert_eq!(state, GuardState::Authorized);
        assert_eq!(state.redirect(), None);
    }

    #[test]
    fn test_multi_role_requirement() {
        let either = RouteRequirement::roles(vec![Role::Student, Role::Instructor]);
        assert_eq!(
            evaluate(true, Some(Role::Student), &either),
            GuardState::Authorized
        );
        assert_eq!(
            evaluate(true, Some(Role::Instructor), &either),
            GuardState::Authorized
        );
    }
}
