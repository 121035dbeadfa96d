//! Request types for the expense splitting API.
//!
//! These DTOs carry what the client supplies; ids and timestamps are minted
//! here when the request is converted into a domain model. Partial updates
//! (`PATCH` bodies) reuse [`crate::store::TripUpdate`] and
//! [`crate::store::ExpenseUpdate`] directly.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Expense, ExpenseCategory, Participant, ParticipantRole, Trip};

/// Request body for `POST /trips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripRequest {
    /// Display name of the trip.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Budget ceiling (non-negative currency amount).
    pub budget: Decimal,
    /// The user creating the trip.
    pub created_by: String,
}

impl CreateTripRequest {
    /// Mints a trip with a fresh id and timestamps.
    pub fn into_trip(self) -> Trip {
        let now = Utc::now();
        Trip {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            description: self.description,
            budget: self.budget,
            created_by: self.created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request body for `POST /trips/{id}/participants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipantRequest {
    /// The user account the participant represents.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Optional contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Optional role within the trip.
    #[serde(default)]
    pub role: Option<ParticipantRole>,
}

impl AddParticipantRequest {
    /// Mints a participant of the given trip with a fresh id.
    pub fn into_participant(self, trip_id: &str) -> Participant {
        Participant {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            trip_id: trip_id.to_string(),
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Request body for `POST /trips/{id}/expenses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// The full amount paid.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// The expense category.
    pub category: ExpenseCategory,
    /// The participant who paid.
    pub paid_by: String,
    /// The date the expense occurred.
    pub date: NaiveDate,
}

impl CreateExpenseRequest {
    /// Mints an expense of the given trip with a fresh id and timestamps.
    pub fn into_expense(self, trip_id: &str) -> Expense {
        let now = Utc::now();
        Expense {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            amount: self.amount,
            description: self.description,
            category: self.category,
            paid_by: self.paid_by,
            date: self.date,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_create_trip_request() {
        let json = r#"{
            "name": "Kyoto 2026",
            "description": "Spring trip",
            "budget": "500.00",
            "created_by": "user_001"
        }"#;

        let request: CreateTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Kyoto 2026");
        assert_eq!(request.budget, Decimal::from_str("500.00").unwrap());
    }

    #[test]
    fn test_into_trip_mints_id_and_timestamps() {
        let request = CreateTripRequest {
            name: "Kyoto 2026".to_string(),
            description: None,
            budget: Decimal::from_str("500.00").unwrap(),
            created_by: "user_001".to_string(),
        };

        let trip = request.into_trip();
        assert!(!trip.id.is_empty());
        assert_eq!(trip.created_at, trip.updated_at);
        assert_eq!(trip.name, "Kyoto 2026");
    }

    #[test]
    fn test_into_trip_mints_unique_ids() {
        let make = || CreateTripRequest {
            name: "Trip".to_string(),
            description: None,
            budget: Decimal::ZERO,
            created_by: "user_001".to_string(),
        };

        assert_ne!(make().into_trip().id, make().into_trip().id);
    }

    #[test]
    fn test_deserialize_add_participant_request() {
        let json = r#"{
            "user_id": "user_002",
            "name": "Bob",
            "role": "member"
        }"#;

        let request: AddParticipantRequest = serde_json::from_str(json).unwrap();
        let participant = request.into_participant("trip_001");

        assert_eq!(participant.trip_id, "trip_001");
        assert_eq!(participant.name, "Bob");
        assert_eq!(participant.role, Some(ParticipantRole::Member));
        assert_eq!(participant.email, None);
    }

    #[test]
    fn test_deserialize_create_expense_request() {
        let json = r#"{
            "amount": "90.00",
            "description": "Group dinner",
            "category": "food",
            "paid_by": "part_001",
            "date": "2026-03-14"
        }"#;

        let request: CreateExpenseRequest = serde_json::from_str(json).unwrap();
        let expense = request.into_expense("trip_001");

        assert_eq!(expense.trip_id, "trip_001");
        assert_eq!(expense.amount, Decimal::from_str("90.00").unwrap());
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.paid_by, "part_001");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{ "description": "no amount", "category": "food" }"#;
        let result = serde_json::from_str::<CreateExpenseRequest>(json);
        assert!(result.is_err());
    }
}
