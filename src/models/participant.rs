//! Participant model and related types.
//!
//! This module defines the Participant struct and ParticipantRole enum
//! for representing members of a trip.

use serde::{Deserialize, Serialize};

/// Represents the role a participant holds within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    /// Trip administrator (can manage the trip itself).
    Admin,
    /// Regular trip member.
    Member,
}

/// Represents a person taking part in a trip.
///
/// A participant belongs to exactly one trip. Removing a participant must
/// also remove any expense splits that reference them; the
/// [`crate::store::TripStore`] enforces that cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier for the participant.
    pub id: String,
    /// The user account this participant represents.
    pub user_id: String,
    /// The trip this participant belongs to.
    pub trip_id: String,
    /// Display name.
    pub name: String,
    /// Optional contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional role within the trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ParticipantRole>,
}

impl Participant {
    /// Returns true if the participant is a trip administrator.
    ///
    /// # Examples
    ///
    /// ```
    /// use split_engine::models::{Participant, ParticipantRole};
    ///
    /// let admin = Participant {
    ///     id: "part_001".to_string(),
    ///     user_id: "user_001".to_string(),
    ///     trip_id: "trip_001".to_string(),
    ///     name: "Alice".to_string(),
    ///     email: None,
    ///     role: Some(ParticipantRole::Admin),
    /// };
    /// assert!(admin.is_admin());
    /// ```
    pub fn is_admin(&self) -> bool {
        self.role == Some(ParticipantRole::Admin)
    }
}
