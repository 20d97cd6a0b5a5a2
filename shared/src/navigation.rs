//! Sidebar navigation and route table

use serde::{Deserialize, Serialize};

use crate::models::Role;

pub const AUTH_PATH: &str = "/auth";

/// A sidebar link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub url: String,
}

fn item(title: &str, url: &str) -> NavItem {
    NavItem {
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// Main sidebar links; the role adds its own section after the common three
pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let mut items = vec![
        item("Dashboard", "/dashboard"),
        item("Orders", "/orders"),
        item("Inventory", "/inventory"),
    ];

    let extra: &[(&str, &str)] = match role {
        Some(Role::Admin) => &[
            ("Suppliers", "/suppliers"),
            ("Analytics", "/analytics"),
            ("Settings", "/settings"),
        ],
        Some(Role::Supplier) => &[("My Products", "/products"), ("Performance", "/performance")],
        Some(Role::Distributor) => &[("Shipments", "/shipments"), ("Tracking", "/tracking")],
        Some(Role::Retailer) => &[("Purchase Orders", "/purchase-orders")],
        None => &[],
    };
    items.extend(extra.iter().map(|(title, url)| item(title, url)));
    items
}

/// The "Support" group shown to everyone
pub fn support_items() -> Vec<NavItem> {
    vec![item("Messages", "/messages"), item("Profile", "/profile")]
}

/// Pages a route can render
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Auth,
    Dashboard,
    Inventory,
    Orders,
    NotFound,
}

/// Routes that exist in the sidebar but render the dashboard for now
pub const PLACEHOLDER_PATHS: &[&str] = &[
    "/suppliers",
    "/analytics",
    "/settings",
    "/products",
    "/performance",
    "/shipments",
    "/tracking",
    "/purchase-orders",
    "/messages",
    "/profile",
];

/// A resolved path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub page: Page,
}

impl Route {
    /// Pages inside the main layout require a session
    pub fn requires_session(&self) -> bool {
        !matches!(self.page, Page::Auth | Page::NotFound)
    }
}

/// Strip query string, fragment and trailing slash
fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn resolve(path: &str) -> Route {
    let path = normalize(path);
    let page = match path.as_str() {
        AUTH_PATH => Page::Auth,
        "/" | "/dashboard" => Page::Dashboard,
        "/inventory" => Page::Inventory,
        "/orders" => Page::Orders,
        p if PLACEHOLDER_PATHS.contains(&p) => Page::Dashboard,
        _ => Page::NotFound,
    };
    Route { path, page }
}

/// Outcome of the layout's session check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDecision {
    Render { route: Route },
    Redirect { to: String },
}

pub fn guard(route: Route, signed_in: bool) -> RouteDecision {
    if route.requires_session() && !signed_in {
        RouteDecision::Redirect {
            to: AUTH_PATH.to_string(),
        }
    } else {
        RouteDecision::Render { route }
    }
}

pub fn avatar_initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_nav_items_by_role() {
        assert_eq!(titles(&nav_items(None)), vec!["Dashboard", "Orders", "Inventory"]);
        assert_eq!(
            titles(&nav_items(Some(Role::Admin)))[3..],
            ["Suppliers", "Analytics", "Settings"]
        );
        assert_eq!(nav_items(Some(Role::Supplier))[3].url, "/products");
        assert_eq!(nav_items(Some(Role::Distributor)).len(), 5);
        assert_eq!(
            nav_items(Some(Role::Retailer)).last().map(|i| i.url.as_str()),
            Some("/purchase-orders")
        );
    }

    #[test]
    fn test_every_nav_link_resolves() {
        for role in Role::ALL {
            for link in nav_items(Some(role)).iter().chain(support_items().iter()) {
                assert_ne!(resolve(&link.url).page, Page::NotFound, "{}", link.url);
            }
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/").page, Page::Dashboard);
        assert_eq!(resolve("/inventory/").page, Page::Inventory);
        assert_eq!(resolve("/orders?q=ord").page, Page::Orders);
        assert_eq!(resolve("/analytics").page, Page::Dashboard);
        assert_eq!(resolve("/auth").page, Page::Auth);
        assert_eq!(resolve("/nope").page, Page::NotFound);
        assert_eq!(resolve("").path, "/");
    }

    #[test]
    fn test_guard_redirects_when_signed_out() {
        for path in ["/", "/dashboard", "/inventory", "/orders", "/settings"] {
            assert_eq!(
                guard(resolve(path), false),
                RouteDecision::Redirect {
                    to: AUTH_PATH.to_string()
                }
            );
            assert!(matches!(guard(resolve(path), true), RouteDecision::Render { .. }));
        }
        assert!(matches!(guard(resolve("/auth"), false), RouteDecision::Render { .. }));
        assert!(matches!(guard(resolve("/missing"), false), RouteDecision::Render { .. }));
    }

    #[test]
    fn test_avatar_initials() {
        assert_eq!(avatar_initials("Admin User"), "AD");
        assert_eq!(avatar_initials("x"), "X");
    }
}
