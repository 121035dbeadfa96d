//! Expense model and related types.
//!
//! This module defines the Expense struct and the closed ExpenseCategory
//! enumeration.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the category of an expense.
///
/// # Example
///
/// ```
/// use split_engine::models::ExpenseCategory;
///
/// let category = ExpenseCategory::Food;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"food\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Meals, groceries, drinks.
    Food,
    /// Flights, trains, taxis, fuel.
    Transportation,
    /// Hotels, rentals, camping fees.
    Accommodation,
    /// Activities, tickets, nightlife.
    Entertainment,
    /// Souvenirs and other purchases.
    Shopping,
    /// Anything that does not fit the other categories.
    Other,
}

/// Represents a single shared expense within a trip.
///
/// The expense is the unit the split calculator consumes. Its payer must be
/// a participant of the same trip, and its amount must be greater than zero
/// to be meaningful; the [`crate::store::TripStore`] validates both on
/// insert. Deleting an expense removes its splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense.
    pub id: String,
    /// The trip this expense belongs to.
    pub trip_id: String,
    /// The full amount paid, in currency units.
    pub amount: Decimal,
    /// Free-text description of the expense.
    pub description: String,
    /// The expense category.
    pub category: ExpenseCategory,
    /// The participant who paid (fronted the money for the group).
    pub paid_by: String,
    /// The date the expense occurred.
    pub date: NaiveDate,
    /// When the expense record was created.
    pub created_at: DateTime<Utc>,
    /// When the expense record was last modified.
    pub updated_at: DateTime<Utc>,
}
