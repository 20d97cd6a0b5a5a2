//! Route dispatch for the dashboard pages

use shared::navigation::{resolve, Page, Route, RouteDecision};
use shared::Pagination;

use crate::error::AppResult;
use crate::handlers;
use crate::middleware::{check_route, require_session};
use crate::AppState;

/// Query parameters shared by the list pages
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub search: Option<String>,
    pub pagination: Pagination,
}

/// A rendered page, noting the requested path when the guard redirected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub route: Route,
    pub redirected_from: Option<String>,
    pub body: String,
}

/// Resolve `path`, apply the session guard and render the resulting page
pub fn open(state: &AppState, path: &str, query: &PageQuery) -> AppResult<Rendered> {
    let requested = resolve(path);
    let (route, redirected_from) = match check_route(requested.clone(), &state.session) {
        RouteDecision::Render { route } => (route, None),
        RouteDecision::Redirect { to } => (resolve(&to), Some(requested.path)),
    };

    tracing::debug!(path = %route.path, page = ?route.page, "Rendering page");

    let body = match route.page {
        Page::Auth => handlers::auth::auth_page(),
        Page::NotFound => handlers::not_found(&route.path),
        Page::Dashboard => {
            let user = require_session(&state.session)?;
            handlers::dashboard::dashboard(state, &user, query.pagination.page)
        }
        Page::Inventory => {
            require_session(&state.session)?;
            handlers::inventory::inventory(state, query)?
        }
        Page::Orders => {
            require_session(&state.session)?;
            handlers::orders::orders(state, query)
        }
    };

    Ok(Rendered {
        route,
        redirected_from,
        body,
    })
}
