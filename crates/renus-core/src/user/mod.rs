//! User accounts and the mock authentication provider.

mod model;
mod provider;

pub use model::{UserAccount, UserRole};
pub use provider::{AuthProvider, MockAuthProvider};
