use super::model::Session;
use crate::error::{RenusError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// Forward declaration - renus-interaction provides the runner.
// Generic dispatch avoids a circular dependency between the crates.
pub trait DiscoveryHandle: Send + Sync {
    fn session_id(&self) -> &str;
    fn summary(&self) -> impl std::future::Future<Output = Session> + Send;
}

/// Manages mounted discovery sessions and their lifecycle.
///
/// `SessionManager` is responsible for:
/// - Creating new sessions
/// - Switching between sessions
/// - Tracking the active session
/// - Listing and deleting live sessions
///
/// Everything is in memory: the transcript of a session lives exactly as
/// long as its mounted surface, so the manager's map is the only store.
pub struct SessionManager<T: DiscoveryHandle> {
    /// Live sessions keyed by session id
    sessions: Arc<RwLock<HashMap<String, Arc<T>>>>,
    /// Id of the currently active session
    active: Arc<RwLock<Option<String>>>,
}

impl<T: DiscoveryHandle + 'static> SessionManager<T> {
    /// Creates a new, empty `SessionManager`.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            active: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a new session and sets it as active.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Unique identifier for the new session
    /// * `factory` - Function to create the runner instance
    pub async fn create_session<F>(&self, session_id: String, factory: F) -> Arc<T>
    where
        F: FnOnce(String) -> T,
    {
        let handle = Arc::new(factory(session_id.clone()));

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.clone(), handle.clone());
        drop(sessions);

        *self.active.write().await = Some(session_id);

        handle
    }

    /// Returns the currently active session, if any.
    pub async fn active_session(&self) -> Option<Arc<T>> {
        let active = self.active.read().await;
        if let Some(id) = active.as_ref() {
            let sessions = self.sessions.read().await;
            sessions.get(id).cloned()
        } else {
            None
        }
    }

    /// Returns the id of the currently active session.
    pub async fn active_session_id(&self) -> Option<String> {
        self.active.read().await.clone()
    }

    /// Switches to an already-mounted session.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no live session has the given id.
    pub async fn switch_session(&self, session_id: &str) -> Result<Arc<T>> {
        let sessions = self.sessions.read().await;
        let handle = sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| RenusError::not_found("session", session_id))?;
        drop(sessions);

        *self.active.write().await = Some(session_id.to_string());
        Ok(handle)
    }

    /// Lists summaries of all live sessions.
    pub async fn list_sessions(&self) -> Vec<Session> {
        let handles: Vec<Arc<T>> = {
            let sessions = self.sessions.read().await;
            sessions.values().cloned().collect()
        };

        let mut summaries = Vec::with_capacity(handles.len());
        for handle in handles {
            summaries.push(handle.summary().await);
        }
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        summaries
    }

    /// Removes a session from the registry.
    ///
    /// Dropping the last handle tears the runner down, which revokes any
    /// in-flight response cycle.
    pub async fn delete_session(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
        drop(sessions);

        let mut active = self.active.write().await;
        if active.as_deref() == Some(session_id) {
            *active = None;
        }
    }
}

impl<T: DiscoveryHandle + 'static> Default for SessionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
