//! Session context shared by every command handler.
//!
//! `CoreState` owns the six record collections, the login flag and an
//! in-memory audit buffer. Created empty and logged out; `logout` clears
//! the flag, `reset` discards all records. Nothing is persisted.
//!
//! The store sits behind an `RwLock`: reads may overlap, mutations are
//! serialised by a single writer.

use std::collections::VecDeque;
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth;
use crate::config;
use crate::store::{RecordStore, StoreError};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

/// Logged-in user, one per successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    /// Correlates log lines of one login.
    pub session_id: Uuid,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

pub struct CoreState {
    /// `None` while logged out.
    session: RwLock<Option<UserSession>>,
    store: RwLock<RecordStore>,
    users: &'static [(&'static str, &'static str)],
    audit: AuditLogger,
}

impl CoreState {
    /// Empty store, logged out, default user table.
    pub fn new() -> Self {
        Self::with_users(config::DEFAULT_USERS)
    }

    pub fn with_users(users: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            session: RwLock::new(None),
            store: RwLock::new(RecordStore::new()),
            users,
            audit: AuditLogger::new(config::AUDIT_BUFFER_CAPACITY),
        }
    }

    // ── Login gate ──────────────────────────────────────────

    /// Check credentials and open a session on success.
    ///
    /// A second login replaces the current session.
    pub fn login(&self, username: &str, password: &str) -> Result<UserSession, CoreError> {
        if !auth::authenticate(self.users, username, password) {
            tracing::warn!(user = username, "Login rejected");
            return Err(CoreError::InvalidCredentials);
        }

        let session = UserSession {
            session_id: Uuid::new_v4(),
            username: username.to_string(),
            started_at: Utc::now(),
        };
        let mut guard = self.session.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(session.clone());
        drop(guard);

        tracing::info!(user = username, session_id = %session.session_id, "Logged in");
        self.log_access("login", "session");
        Ok(session)
    }

    /// Reset the login flag. Records are kept for the process lifetime.
    pub fn logout(&self) {
        if let Ok(mut guard) = self.session.write() {
            if let Some(session) = guard.take() {
                tracing::info!(
                    user = %session.username,
                    session_id = %session.session_id,
                    "Logged out"
                );
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Owned copy of the active session, if any.
    pub fn current_session(&self) -> Option<UserSession> {
        self.session.read().ok().and_then(|guard| guard.clone())
    }

    pub fn current_user(&self) -> Option<String> {
        self.current_session().map(|s| s.username)
    }

    // ── Store access ────────────────────────────────────────

    /// Acquire a read lock on the store. Requires a logged-in session.
    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, RecordStore>, CoreError> {
        self.require_login()?;
        self.store.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire the single writer lock on the store. Requires a logged-in session.
    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, RecordStore>, CoreError> {
        self.require_login()?;
        self.store.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Discard every record and log out.
    pub fn reset(&self) {
        if let Ok(mut store) = self.store.write() {
            store.clear();
        }
        self.logout();
        self.audit.clear();
        tracing::info!("Session context reset, all records discarded");
    }

    fn require_login(&self) -> Result<(), CoreError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }

    // ── Audit ───────────────────────────────────────────────

    /// Record a store access for the current user.
    pub fn log_access(&self, action: &str, entity: &str) {
        self.audit.log(self.current_user(), action, entity);
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit.entries()
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not logged in")]
    NotAuthenticated,
    #[error("Wrong login")]
    InvalidCredentials,
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ═══════════════════════════════════════════════════════════
// Audit logger
// ═══════════════════════════════════════════════════════════

/// A single audit log entry.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub user: Option<String>,
    pub action: String,
    pub entity: String,
}

/// Bounded in-memory audit buffer. At capacity the oldest entry is dropped.
pub struct AuditLogger {
    buffer: Mutex<VecDeque<AuditEntry>>,
    capacity: usize,
}

impl AuditLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry. Returns `true` if an older entry had to be dropped.
    pub fn log(&self, user: Option<String>, action: &str, entity: &str) -> bool {
        let Ok(mut buf) = self.buffer.lock() else {
            return false;
        };
        let evicted = if buf.len() >= self.capacity {
            buf.pop_front().is_some()
        } else {
            false
        };
        buf.push_back(AuditEntry {
            timestamp: Utc::now(),
            user,
            action: action.to_string(),
            entity: entity.to_string(),
        });
        evicted
    }

    /// Oldest first.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.buffer
            .lock()
            .map(|buf| buf.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.lock().map(|buf| buf.len()).unwrap_or(0)
    }

    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
