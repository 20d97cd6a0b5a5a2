//! User and role models

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Roles a dashboard user can sign in as
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supplier,
    Distributor,
    Retailer,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Supplier,
        Role::Distributor,
        Role::Retailer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Supplier => "supplier",
            Role::Distributor => "distributor",
            Role::Retailer => "retailer",
        }
    }

    /// Heading on the role picker and dashboard overview
    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Supplier => "Supplier",
            Role::Distributor => "Distributor",
            Role::Retailer => "Retailer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full access to all features",
            Role::Supplier => "Manage your products",
            Role::Distributor => "Track and manage shipments",
            Role::Retailer => "Manage store inventory",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the four roles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "supplier" => Ok(Role::Supplier),
            "distributor" => Ok(Role::Distributor),
            "retailer" => Ok(Role::Retailer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// The signed-in user record, persisted verbatim as the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub image_url: Option<String>,
}

impl User {
    /// Two-letter avatar fallback shown when the image is missing
    pub fn initials(&self) -> String {
        crate::navigation::avatar_initials(&self.name)
    }
}
