//! TURN session DTOs.
//!
//! A session is scoped to one TURN backend; the backend's base URL travels as
//! a call argument, not inside the session record. The coordinator service is
//! the source of truth for outstanding sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A TURN relay allocation bound to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    /// Identifier of the user the allocation belongs to.
    pub user_id: String,
    /// TURN username for the allocation.
    pub username: String,
    /// TURN credential for the allocation.
    pub credential: String,
}

impl fmt::Display for Session {
    // Credentials are deliberately omitted: this ends up in error messages
    // and span annotations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session(userId={})", self.user_id)
    }
}

/// Aggregate session counts reported by a TURN backend.
///
/// Read-only snapshot; fields absent on the wire default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionStatistics {
    /// Number of currently active sessions.
    pub active_sessions: u64,
    /// Maximum number of sessions the backend accepts. Zero means unreported.
    pub max_sessions: u64,
}

impl SessionStatistics {
    /// Remaining capacity, saturating at zero when `max_sessions` is
    /// unreported or exceeded.
    #[must_use]
    pub fn remaining_capacity(self) -> u64 {
        self.max_sessions.saturating_sub(self.active_sessions)
    }
}
