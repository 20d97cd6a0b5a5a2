//! Authentication guard
//!
//! Pages inside the main layout need a live session; without one the
//! visitor is sent to the sign-in page.

use shared::navigation::{guard, Route, RouteDecision};
use shared::{Role, User};

use crate::error::{AppError, AppResult};
use crate::services::SessionStore;

/// The signed-in user, available to handlers behind the guard
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn role(&self) -> Role {
        self.0.role
    }
}

/// Decide whether a route renders or redirects for the current session
pub fn check_route(route: Route, session: &SessionStore) -> RouteDecision {
    let decision = guard(route, session.is_signed_in());
    if let RouteDecision::Redirect { to } = &decision {
        tracing::debug!(redirect = %to, "No session, redirecting");
    }
    decision
}

/// Extract the current user or fail with `Unauthorized`
pub fn require_session(session: &SessionStore) -> AppResult<CurrentUser> {
    session
        .user()
        .map(CurrentUser)
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
}
