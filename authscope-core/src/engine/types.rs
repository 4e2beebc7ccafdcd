use serde::Serialize;
use std::fmt;

/// Authentication outcome reported by sshd for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Accepted,
    Failed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Accepted => write!(f, "Accepted"),
            Action::Failed => write!(f, "Failed"),
        }
    }
}

/// One structured record extracted from a single auth-log line.
///
/// Field values are the exact substrings captured from the line; nothing is
/// normalized or range-checked. The timestamp keeps the syslog
/// `Mon D HH:MM:SS` form (no year) and is never parsed into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthEvent {
    pub timestamp: String,
    pub host: String,
    pub service: String,
    pub action: Action,
    pub user: String,
    pub ip: String,
    pub port: String,
    /// Whether the line carried the `invalid user` marker. The summary
    /// statistics ignore this; it is kept for raw-data display.
    pub invalid_user: bool,
}
