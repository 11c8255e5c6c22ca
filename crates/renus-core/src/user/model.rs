//! User account domain models.

use serde::{Deserialize, Serialize};

/// Role attached to a dashboard account.
///
/// `Guest` is the ambient role while nobody is logged in; it is never
/// stored on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "client")]
    Client,
    #[strum(serialize = "guest")]
    Guest,
}

/// A dashboard user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}
