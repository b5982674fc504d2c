//! In-memory editing sessions shared across handlers.
//!
//! Each request takes the lock, runs one synchronous core operation and
//! publishes the session's replacement sequence before releasing it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use scribe_core::{EditSession, StandardRules};

use crate::error::AppError;

pub type SessionId = u64;
pub type Session = EditSession<StandardRules>;

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    next_id: Arc<AtomicU64>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            max_sessions,
        }
    }

    /// Insert a fresh session, run `init` on it and return its id.
    pub fn create<T>(&self, init: impl FnOnce(&mut Session) -> T) -> Result<(SessionId, T), AppError> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        if sessions.len() >= self.max_sessions {
            return Err(AppError::Conflict(format!(
                "Session limit of {} reached",
                self.max_sessions
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut session = EditSession::new(StandardRules::new());
        let out = init(&mut session);
        sessions.insert(id, session);

        tracing::info!(session_id = id, live = sessions.len(), "Session created");
        Ok((id, out))
    }

    pub fn read<T>(&self, id: SessionId, f: impl FnOnce(&Session) -> T) -> Result<T, AppError> {
        let sessions = self.sessions.read().map_err(|_| poisoned())?;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub fn update<T>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> T) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub fn remove(&self, id: SessionId) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().map_err(|_| poisoned())?;
        sessions.remove(&id).ok_or_else(|| not_found(id))?;
        tracing::info!(session_id = id, "Session closed");
        Ok(())
    }

    /// Number of live sessions.
    pub fn count(&self) -> Result<usize, AppError> {
        let sessions = self.sessions.read().map_err(|_| poisoned())?;
        Ok(sessions.len())
    }
}

fn not_found(id: SessionId) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn poisoned() -> AppError {
    AppError::Internal("Session store lock poisoned".to_string())
}
