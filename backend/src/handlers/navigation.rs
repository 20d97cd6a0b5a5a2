//! Sidebar: role-specific menu, support links and the user footer

use shared::navigation::{nav_items, support_items, NavItem, AUTH_PATH};
use shared::User;

fn render_items(items: &[NavItem], active: Option<&str>) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let marker = if active == Some(item.url.as_str()) { '>' } else { ' ' };
            format!("{marker} {:<16} {}", item.title, item.url)
        })
        .collect()
}

/// Render the sidebar for an optional signed-in user
pub fn sidebar(user: Option<&User>, active: Option<&str>) -> String {
    let mut lines = vec!["SupplyChain".to_string(), String::new(), "Menu".to_string()];
    lines.extend(render_items(&nav_items(user.map(|u| u.role)), active));

    lines.push(String::new());
    lines.push("Support".to_string());
    lines.extend(render_items(&support_items(), active));

    lines.push(String::new());
    match user {
        Some(user) => {
            lines.push(format!("({}) {}", user.initials(), user.name));
            lines.push(format!("     {}", user.email));
        }
        None => lines.push(format!("Sign In: {AUTH_PATH}")),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn user(role: Role) -> User {
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role,
            image_url: None,
        }
    }

    #[test]
    fn test_sidebar_marks_active_item() {
        let admin = user(Role::Admin);
        let sidebar = sidebar(Some(&admin), Some("/inventory"));
        assert!(sidebar.contains("> Inventory"));
        assert!(sidebar.contains("  Dashboard"));
        assert!(sidebar.contains("(AD) Admin User"));
    }

    #[test]
    fn test_sidebar_without_user_offers_sign_in() {
        let sidebar = sidebar(None, None);
        assert!(sidebar.contains("Sign In: /auth"));
        assert!(sidebar.contains("Support"));
    }
}
