//! Mutable per-session state owned by the controller.

use serde::Serialize;
use std::fmt;

/// Where the controller currently is in its request/response cycle.
///
/// There is no terminal phase; the conversation is unbounded until the host
/// application drops the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `start()` has not been called yet.
    NotStarted,
    /// A round-trip (network plus narration) is in flight.
    AwaitingResponse,
    /// The previous round settled and the user may submit again.
    AwaitingUserInput,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not_started"),
            Phase::AwaitingResponse => write!(f, "awaiting_response"),
            Phase::AwaitingUserInput => write!(f, "awaiting_user_input"),
        }
    }
}

/// The single mutable state record for one conversation.
///
/// `round` only ever moves forward, and only the controller's own handlers
/// write to any of these fields. The session identifier is assigned by the
/// orchestration service and echoed back verbatim; it is never invented
/// client-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    pub round: u32,
    pub session_id: Option<String>,
    pub user_name: String,
    pub is_loading: bool,
    pub is_muted: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The name sent on the wire: the captured user name, or a placeholder
    /// until the user has introduced themselves.
    pub fn wire_user_name(&self) -> &str {
        if self.user_name.is_empty() {
            "User"
        } else {
            &self.user_name
        }
    }

    /// The session identifier sent on the wire; empty until the service has
    /// assigned one.
    pub fn wire_session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("")
    }
}
