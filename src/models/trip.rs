//! Trip model.
//!
//! This module defines the Trip struct representing a bounded event that
//! owns a budget, participants, and expenses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a trip: the context that owns participants and expenses.
///
/// Deleting a trip must cascade to its participants, expenses, and splits;
/// the [`crate::store::TripStore`] enforces that.
///
/// # Example
///
/// ```
/// use split_engine::models::Trip;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let trip = Trip {
///     id: "trip_001".to_string(),
///     name: "Kyoto 2026".to_string(),
///     description: Some("Spring trip".to_string()),
///     budget: Decimal::new(50000, 2), // 500.00
///     created_by: "user_001".to_string(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert_eq!(trip.budget, Decimal::new(50000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Budget ceiling for the trip (non-negative currency amount).
    pub budget: Decimal,
    /// The user who created the trip.
    pub created_by: String,
    /// When the trip was created.
    pub created_at: DateTime<Utc>,
    /// When the trip was last modified.
    pub updated_at: DateTime<Utc>,
}
