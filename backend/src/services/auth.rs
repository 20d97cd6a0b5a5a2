//! Authentication service for role-based mock sign-in
//!
//! There are no credentials: signing in picks one of four fixed profiles by
//! role after a simulated network round trip.

use std::time::Duration;

use async_trait::async_trait;
use shared::{Role, User};

use crate::config::SessionConfig;
use crate::error::AppResult;

/// Remote side of a sign-in/sign-out exchange
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Resolve the profile for a raw role name
    async fn sign_in(&self, role: &str) -> AppResult<User>;

    async fn sign_out(&self) -> AppResult<()>;
}

/// The fixed profile for a role
pub fn profile_for(role: Role) -> User {
    let (id, name, avatar) = match role {
        Role::Admin => ("1", "Admin User", "1234567"),
        Role::Supplier => ("2", "Supplier User", "2345678"),
        Role::Distributor => ("3", "Distributor User", "3456789"),
        Role::Retailer => ("4", "Retailer User", "4567890"),
    };

    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", role.as_str()),
        role,
        image_url: Some(format!("https://avatars.githubusercontent.com/u/{}", avatar)),
    }
}

/// Auth backend answering from the fixed profile table
#[derive(Debug, Clone)]
pub struct MockAuthService {
    sign_in_delay: Duration,
    sign_out_delay: Duration,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl MockAuthService {
    pub fn new(sign_in_delay: Duration, sign_out_delay: Duration) -> Self {
        Self {
            sign_in_delay,
            sign_out_delay,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.sign_in_delay(), config.sign_out_delay())
    }

    /// No simulated latency
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

#[async_trait]
impl AuthBackend for MockAuthService {
    async fn sign_in(&self, role: &str) -> AppResult<User> {
        tokio::time::sleep(self.sign_in_delay).await;

        let role: Role = role.parse()?;
        tracing::debug!(%role, "Resolved mock profile");
        Ok(profile_for(role))
    }

    async fn sign_out(&self) -> AppResult<()> {
        tokio::time::sleep(self.sign_out_delay).await;
        Ok(())
    }
}
