//! Sign-in page and session commands

use shared::Role;

use crate::error::{AppError, AppResult};
use crate::services::session::SIGN_IN_FAILED_MESSAGE;
use crate::AppState;

/// Role picker shown at `/auth`
pub fn auth_page() -> String {
    let mut lines = vec![
        "Supply Chain Management".to_string(),
        "Select your role to continue".to_string(),
        String::new(),
    ];
    for role in Role::ALL {
        lines.push(format!("  {:<12} {}", role.as_str(), role.description()));
    }
    lines.push(String::new());
    lines.push("Sign in with: scd signin <role>".to_string());
    lines.join("\n")
}

/// Sign in as `role` and report who is now signed in
pub async fn sign_in(state: &AppState, role: &str) -> AppResult<String> {
    match state.session.sign_in(role).await {
        Some(user) => Ok(format!(
            "Signed in as {} <{}> ({})",
            user.name,
            user.email,
            user.role.title()
        )),
        None => {
            let message = state
                .session
                .snapshot()
                .error
                .unwrap_or_else(|| SIGN_IN_FAILED_MESSAGE.to_string());
            Err(AppError::Unauthorized(message))
        }
    }
}

/// Sign out; the local session is cleared even when the backend fails
pub async fn sign_out(state: &AppState) -> String {
    if state.session.sign_out().await {
        "You have been signed out successfully.".to_string()
    } else {
        "Signed out locally; the sign-out request failed.".to_string()
    }
}

/// Describe the current session
pub fn whoami(state: &AppState) -> String {
    match state.session.user() {
        Some(user) => format!(
            "{} <{}>\nRole: {}\nId: {}",
            user.name,
            user.email,
            user.role.title(),
            user.id
        ),
        None => "Not signed in".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_page_lists_every_role() {
        let page = auth_page();
        for role in Role::ALL {
            assert!(page.contains(role.as_str()));
            assert!(page.contains(role.description()));
        }
    }
}
