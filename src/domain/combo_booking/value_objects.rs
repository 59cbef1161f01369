use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Combo Booking Value Objects
// ============================================================================

/// Identity of a broadcast station a combo booking can span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(Uuid);

impl StationId {
    /// Fresh station identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identity assigned elsewhere, e.g. read back from storage
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for StationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
