//! Caller-role authorization for workflow handlers.
//!
//! Who is calling is resolved upstream (transport/session layer); handlers
//! receive the resolved role and gate on it here. Default-deny: each handler
//! names the single role allowed to invoke it.

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Authenticated role of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Tester,
    Doctor,
    Patient,
}

impl Role {
    /// Parse from the session-layer string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tester" => Some(Self::Tester),
            "doctor" => Some(Self::Doctor),
            "patient" => Some(Self::Patient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tester => "tester",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
#[error("access denied: the {} role is required, caller is {}", .required.as_str(), .caller.as_str())]
pub struct AccessDenied {
    pub caller: Role,
    pub required: Role,
}

// ═══════════════════════════════════════════════════════════
// Role check
// ═══════════════════════════════════════════════════════════

/// Gate a handler on the caller holding exactly the required role.
pub fn require_role(caller: Role, required: Role) -> Result<(), AccessDenied> {
    if caller == required {
        Ok(())
    } else {
        tracing::warn!(
            caller = caller.as_str(),
            required = required.as_str(),
            "handler call denied"
        );
        Err(AccessDenied { caller, required })
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
