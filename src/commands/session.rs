//! Login gate and session overview commands.

use serde::{Deserialize, Serialize};

use crate::core_state::{AuditEntry, CoreError, CoreState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// What the sidebar shows about the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub logged_in: bool,
    pub username: Option<String>,
    pub session_id: Option<String>,
}

/// Record count for one menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCount {
    pub section: String,
    pub count: usize,
}

/// Returns the welcome message on success, "Wrong login" otherwise.
pub fn login(form: LoginForm, state: &CoreState) -> Result<String, String> {
    state
        .login(&form.username, &form.password)
        .map(|session| format!("Welcome {}", session.username))
        .map_err(|e| e.to_string())
}

pub fn logout(state: &CoreState) -> SessionStatus {
    state.logout();
    session_status(state)
}

pub fn session_status(state: &CoreState) -> SessionStatus {
    match state.current_session() {
        Some(session) => SessionStatus {
            logged_in: true,
            username: Some(session.username),
            session_id: Some(session.session_id.to_string()),
        },
        None => SessionStatus {
            logged_in: false,
            username: None,
            session_id: None,
        },
    }
}

/// Record counts per section, in menu order.
pub fn section_counts(state: &CoreState) -> Result<Vec<SectionCount>, String> {
    let store = state.read_store().map_err(|e| e.to_string())?;
    Ok(store
        .counts()
        .into_iter()
        .map(|(kind, count)| SectionCount {
            section: kind.title().to_string(),
            count,
        })
        .collect())
}

/// Audit entries, newest first. Requires a logged-in session.
pub fn recent_activity(limit: usize, state: &CoreState) -> Result<Vec<AuditEntry>, String> {
    if !state.is_logged_in() {
        return Err(CoreError::NotAuthenticated.to_string());
    }
    Ok(state.audit_entries().into_iter().rev().take(limit).collect())
}
