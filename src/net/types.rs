//! Shared wire DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
}

/// A predefined application configuration a session can be bound to.
///
/// When present, the create toolbar suppresses its general-purpose controls
/// in favor of the app's own surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Unique app identifier.
    pub id: String,
    /// Human-facing app name.
    #[serde(default)]
    pub name: String,
}
