//! Wire DTOs for the activities API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies exactly so serde decoding
//! stays schema-driven. The listing endpoint returns an object keyed by
//! activity name; a `BTreeMap` keeps render order stable across reloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full roster as returned by `GET /activities`, keyed by activity name.
pub type ActivityMap = BTreeMap<String, Activity>;

/// A single activity with schedule, capacity, and participant roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description shown on the card.
    pub description: String,
    /// Free-form schedule string (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Maximum roster size.
    pub max_participants: u32,
    /// Signed-up participant emails, in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, saturating at zero for over-full server data.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Success body for signup/unregister (`{ "message": ... }`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body for non-2xx responses (`{ "detail": ... }`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}
