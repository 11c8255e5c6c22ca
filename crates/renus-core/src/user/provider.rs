//! Mock authentication provider.
//!
//! The dashboard's auth layer is a simulation: two hardcoded credential
//! pairs held in memory, a fixed artificial latency, and no tokens,
//! hashing or persisted sessions of any kind. The trait exists so the
//! presentation shell depends on an interface rather than on the fixture
//! accounts directly.

use super::model::{UserAccount, UserRole};
use crate::config::TimingProfile;
use crate::error::{RenusError, Result};
use tokio::sync::RwLock;

/// Authentication operations exposed to the presentation shell.
///
/// The conversation engine does not depend on auth state; only the
/// role-gated dashboard surfaces consult this.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Attempts a login with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RenusError::InvalidCredentials`] when no account matches.
    async fn login(&self, email: &str, password: &str) -> Result<UserAccount>;

    /// Ends the current session, if any.
    async fn logout(&self);

    /// The currently logged-in account.
    async fn current_user(&self) -> Option<UserAccount>;

    /// The ambient role: the account's role, or `Guest` when logged out.
    async fn role(&self) -> UserRole;
}

/// In-memory provider holding the two fixture accounts.
pub struct MockAuthProvider {
    accounts: Vec<(UserAccount, String)>,
    current: RwLock<Option<UserAccount>>,
    timing: TimingProfile,
}

impl MockAuthProvider {
    /// Creates a provider with the fixture admin and client accounts.
    pub fn new(timing: TimingProfile) -> Self {
        let admin = UserAccount {
            id: "admin-123".to_string(),
            name: "Admin Renum".to_string(),
            email: "admin@renum.tech".to_string(),
            role: UserRole::Admin,
        };
        let client = UserAccount {
            id: "client-456".to_string(),
            name: "Client Alpha".to_string(),
            email: "client@alpha.com".to_string(),
            role: UserRole::Client,
        };

        Self {
            accounts: vec![
                (admin, "password".to_string()),
                (client, "password".to_string()),
            ],
            current: RwLock::new(None),
            timing,
        }
    }
}

#[async_trait::async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, email: &str, password: &str) -> Result<UserAccount> {
        // Simulated API round-trip
        tokio::time::sleep(self.timing.login()).await;

        let account = self
            .accounts
            .iter()
            .find(|(account, secret)| account.email == email && secret == password)
            .map(|(account, _)| account.clone())
            .ok_or(RenusError::InvalidCredentials)?;

        tracing::info!(email = %account.email, role = %account.role, "login succeeded");
        *self.current.write().await = Some(account.clone());
        Ok(account)
    }

    async fn logout(&self) {
        let mut current = self.current.write().await;
        if let Some(account) = current.take() {
            tracing::info!(email = %account.email, "session ended");
        }
    }

    async fn current_user(&self) -> Option<UserAccount> {
        self.current.read().await.clone()
    }

    async fn role(&self) -> UserRole {
        self.current
            .read()
            .await
            .as_ref()
            .map(|account| account.role)
            .unwrap_or(UserRole::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockAuthProvider {
        MockAuthProvider::new(TimingProfile::instant())
    }

    #[tokio::test]
    async fn test_admin_login() {
        let auth = provider();
        let account = auth.login("admin@renum.tech", "password").await.unwrap();
        assert_eq!(account.role, UserRole::Admin);
        assert_eq!(auth.role().await, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_client_login() {
        let auth = provider();
        let account = auth.login("client@alpha.com", "password").await.unwrap();
        assert_eq!(account.role, UserRole::Client);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid() {
        let auth = provider();
        let err = auth.login("admin@renum.tech", "wrong").await.unwrap_err();
        assert!(err.is_invalid_credentials());
        assert_eq!(auth.current_user().await, None);
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid() {
        let auth = provider();
        let err = auth.login("nobody@renum.tech", "password").await.unwrap_err();
        assert!(err.is_invalid_credentials());
    }

    #[tokio::test]
    async fn test_logout_returns_to_guest() {
        let auth = provider();
        auth.login("admin@renum.tech", "password").await.unwrap();
        auth.logout().await;
        assert_eq!(auth.current_user().await, None);
        assert_eq!(auth.role().await, UserRole::Guest);
    }
}
