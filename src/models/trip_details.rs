//! Trip read model.
//!
//! This module contains the [`TripWithDetails`] aggregate and the
//! [`BudgetSummary`] derived from a trip's budget ceiling and expenses.
//! Both are rebuilt from the raw collections on every read and have no
//! independent lifecycle.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Balance, Expense, ExpenseSplit, Participant, Trip};

/// Spending position against a trip's budget ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The budget ceiling.
    pub budget: Decimal,
    /// Sum of all expense amounts.
    pub total_spent: Decimal,
    /// Budget minus total spent; negative when over budget.
    pub remaining: Decimal,
    /// True when total spent exceeds the budget.
    pub over_budget: bool,
}

/// A trip together with its participants, expenses, splits, computed
/// balances, and budget summary.
///
/// This is the read model consumed by presentation code, assembled by
/// [`crate::store::TripStore::trip_details`].
///
/// # Example
///
/// ```
/// use split_engine::models::{BudgetSummary, Trip, TripWithDetails};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let trip = Trip {
///     id: "trip_001".to_string(),
///     name: "Kyoto 2026".to_string(),
///     description: None,
///     budget: Decimal::new(50000, 2),
///     created_by: "user_001".to_string(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// let details = TripWithDetails {
///     trip,
///     participants: vec![],
///     expenses: vec![],
///     splits: vec![],
///     balances: vec![],
///     budget_summary: BudgetSummary {
///         budget: Decimal::new(50000, 2),
///         total_spent: Decimal::ZERO,
///         remaining: Decimal::new(50000, 2),
///         over_budget: false,
///     },
/// };
/// assert!(details.balances.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripWithDetails {
    /// The trip itself, flattened into the top level.
    #[serde(flatten)]
    pub trip: Trip,
    /// Participants belonging to the trip.
    pub participants: Vec<Participant>,
    /// Expenses belonging to the trip.
    pub expenses: Vec<Expense>,
    /// Splits for the trip's expenses.
    pub splits: Vec<ExpenseSplit>,
    /// Net balance per participant, recomputed on every read.
    pub balances: Vec<Balance>,
    /// Spending position against the trip budget.
    pub budget_summary: BudgetSummary,
}
