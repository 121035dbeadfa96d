//! In-memory store for trips, participants, expenses, and splits.
//!
//! The store owns the four raw collections and is the only place they are
//! mutated. Every mutator enforces the cascade rules (deleting a trip
//! removes its participants, expenses, and splits; deleting an expense or
//! participant removes the affected splits) and bumps a revision counter so
//! callers know to re-derive their read models. The calculation functions
//! themselves stay pure; the store feeds them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_balances, calculate_budget_summary, calculate_equal_split};
use crate::error::{EngineError, EngineResult};
use crate::models::{Expense, ExpenseCategory, ExpenseSplit, Participant, Trip, TripWithDetails};

/// A partial update to a trip. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New budget ceiling.
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// A partial update to an expense. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    /// New amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New category.
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
    /// New payer (must belong to the same trip).
    #[serde(default)]
    pub paid_by: Option<String>,
    /// New expense date.
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
}

/// Owns the raw collections and enforces their consistency.
///
/// # Example
///
/// ```
/// use split_engine::store::TripStore;
///
/// let store = TripStore::new();
/// assert!(store.trips().is_empty());
/// assert_eq!(store.revision(), 0);
/// ```
#[derive(Debug, Default)]
pub struct TripStore {
    trips: Vec<Trip>,
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    splits: Vec<ExpenseSplit>,
    revision: u64,
}

impl TripStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic counter bumped on every successful mutation.
    ///
    /// Callers cache read models at their own risk; comparing revisions
    /// tells them when to re-derive.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All trips in insertion order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Looks up a trip by id.
    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Looks up an expense by id.
    pub fn expense(&self, expense_id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == expense_id)
    }

    /// Adds a new trip.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTrip`] when the name is empty, the
    /// budget is negative, or the id is already taken.
    pub fn add_trip(&mut self, trip: Trip) -> EngineResult<()> {
        if trip.name.trim().is_empty() {
            return Err(EngineError::InvalidTrip {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if trip.budget < Decimal::ZERO {
            return Err(EngineError::InvalidTrip {
                field: "budget".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.trip(&trip.id).is_some() {
            return Err(EngineError::InvalidTrip {
                field: "id".to_string(),
                message: format!("trip '{}' already exists", trip.id),
            });
        }

        self.trips.push(trip);
        self.revision += 1;
        Ok(())
    }

    /// Applies a partial update to a trip and bumps its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TripNotFound`] when the trip does not exist,
    /// or [`EngineError::InvalidTrip`] when the update carries an empty
    /// name or a negative budget.
    pub fn update_trip(&mut self, trip_id: &str, update: TripUpdate) -> EngineResult<()> {
        if update.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(EngineError::InvalidTrip {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if update.budget.is_some_and(|b| b < Decimal::ZERO) {
            return Err(EngineError::InvalidTrip {
                field: "budget".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let trip = self
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| EngineError::TripNotFound {
                id: trip_id.to_string(),
            })?;

        if let Some(name) = update.name {
            trip.name = name;
        }
        if let Some(description) = update.description {
            trip.description = Some(description);
        }
        if let Some(budget) = update.budget {
            trip.budget = budget;
        }
        trip.updated_at = chrono::Utc::now();
        self.revision += 1;
        Ok(())
    }

    /// Removes a trip and cascades to its participants, expenses, and
    /// splits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TripNotFound`] when the trip does not exist.
    pub fn remove_trip(&mut self, trip_id: &str) -> EngineResult<()> {
        if self.trip(trip_id).is_none() {
            return Err(EngineError::TripNotFound {
                id: trip_id.to_string(),
            });
        }

        let expense_ids: Vec<String> = self
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .map(|e| e.id.clone())
            .collect();

        self.trips.retain(|t| t.id != trip_id);
        self.participants.retain(|p| p.trip_id != trip_id);
        self.expenses.retain(|e| e.trip_id != trip_id);
        self.splits
            .retain(|s| !expense_ids.iter().any(|id| *id == s.expense_id));
        self.revision += 1;
        Ok(())
    }

    /// Adds a participant to an existing trip.
    ///
    /// Splits of expenses recorded before the participant joined are left
    /// untouched; only future expenses include the new member.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TripNotFound`] when the referenced trip does
    /// not exist, or [`EngineError::InvalidParticipant`] when the name is
    /// empty or the id is already taken.
    pub fn add_participant(&mut self, participant: Participant) -> EngineResult<()> {
        if self.trip(&participant.trip_id).is_none() {
            return Err(EngineError::TripNotFound {
                id: participant.trip_id.clone(),
            });
        }
        if participant.name.trim().is_empty() {
            return Err(EngineError::InvalidParticipant {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.participants.iter().any(|p| p.id == participant.id) {
            return Err(EngineError::InvalidParticipant {
                field: "id".to_string(),
                message: format!("participant '{}' already exists", participant.id),
            });
        }

        self.participants.push(participant);
        self.revision += 1;
        Ok(())
    }

    /// Removes a participant from a trip, cascading to their splits within
    /// that trip's expenses.
    ///
    /// Remaining splits of the affected expenses are not recalculated; the
    /// balance aggregator tolerates the shortfall.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ParticipantNotFound`] when no such
    /// participant belongs to the trip.
    pub fn remove_participant(
        &mut self,
        trip_id: &str,
        participant_id: &str,
    ) -> EngineResult<()> {
        let belongs = self
            .participants
            .iter()
            .any(|p| p.id == participant_id && p.trip_id == trip_id);
        if !belongs {
            return Err(EngineError::ParticipantNotFound {
                id: participant_id.to_string(),
            });
        }

        let expense_ids: Vec<String> = self
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .map(|e| e.id.clone())
            .collect();

        self.participants.retain(|p| p.id != participant_id);
        self.splits.retain(|s| {
            s.participant_id != participant_id
                || !expense_ids.iter().any(|id| *id == s.expense_id)
        });
        self.revision += 1;
        Ok(())
    }

    /// Participants of a trip, in insertion order.
    pub fn trip_participants(&self, trip_id: &str) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.trip_id == trip_id)
            .collect()
    }

    /// Adds an expense and computes equal splits over the trip's current
    /// participants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TripNotFound`] when the referenced trip does
    /// not exist, or [`EngineError::InvalidExpense`] when the amount is not
    /// positive, the payer is not a participant of the trip, or the id is
    /// already taken.
    pub fn add_expense(&mut self, expense: Expense) -> EngineResult<()> {
        if self.trip(&expense.trip_id).is_none() {
            return Err(EngineError::TripNotFound {
                id: expense.trip_id.clone(),
            });
        }
        if expense.amount <= Decimal::ZERO {
            return Err(EngineError::InvalidExpense {
                expense_id: expense.id.clone(),
                message: "amount must be greater than zero".to_string(),
            });
        }
        if self.expenses.iter().any(|e| e.id == expense.id) {
            return Err(EngineError::InvalidExpense {
                expense_id: expense.id.clone(),
                message: "expense id already exists".to_string(),
            });
        }
        let payer_belongs = self
            .participants
            .iter()
            .any(|p| p.id == expense.paid_by && p.trip_id == expense.trip_id);
        if !payer_belongs {
            return Err(EngineError::InvalidExpense {
                expense_id: expense.id.clone(),
                message: format!(
                    "payer '{}' is not a participant of trip '{}'",
                    expense.paid_by, expense.trip_id
                ),
            });
        }

        let trip_participants: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.trip_id == expense.trip_id)
            .cloned()
            .collect();
        let new_splits = calculate_equal_split(&expense, &trip_participants);

        self.expenses.push(expense);
        self.splits.extend(new_splits);
        self.revision += 1;
        Ok(())
    }

    /// Applies a partial update to an expense.
    ///
    /// When the amount or payer changes, the expense's splits are dropped
    /// and recomputed over the trip's current participants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ExpenseNotFound`] when no such expense
    /// belongs to the trip, or [`EngineError::InvalidExpense`] when the
    /// update carries a non-positive amount or a payer outside the trip.
    pub fn update_expense(
        &mut self,
        trip_id: &str,
        expense_id: &str,
        update: ExpenseUpdate,
    ) -> EngineResult<()> {
        if update.amount.is_some_and(|a| a <= Decimal::ZERO) {
            return Err(EngineError::InvalidExpense {
                expense_id: expense_id.to_string(),
                message: "amount must be greater than zero".to_string(),
            });
        }
        if let Some(paid_by) = &update.paid_by {
            let payer_belongs = self
                .participants
                .iter()
                .any(|p| p.id == *paid_by && p.trip_id == trip_id);
            if !payer_belongs {
                return Err(EngineError::InvalidExpense {
                    expense_id: expense_id.to_string(),
                    message: format!(
                        "payer '{}' is not a participant of trip '{}'",
                        paid_by, trip_id
                    ),
                });
            }
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == expense_id && e.trip_id == trip_id)
            .ok_or_else(|| EngineError::ExpenseNotFound {
                id: expense_id.to_string(),
            })?;

        let resplit = update.amount.is_some() || update.paid_by.is_some();

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(category) = update.category {
            expense.category = category;
        }
        if let Some(paid_by) = update.paid_by {
            expense.paid_by = paid_by;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        expense.updated_at = chrono::Utc::now();

        if resplit {
            let expense = expense.clone();
            let trip_participants: Vec<Participant> = self
                .participants
                .iter()
                .filter(|p| p.trip_id == trip_id)
                .cloned()
                .collect();
            self.splits.retain(|s| s.expense_id != expense_id);
            self.splits
                .extend(calculate_equal_split(&expense, &trip_participants));
        }

        self.revision += 1;
        Ok(())
    }

    /// Removes an expense and cascades to its splits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ExpenseNotFound`] when the expense does not
    /// exist.
    pub fn remove_expense(&mut self, expense_id: &str) -> EngineResult<()> {
        if !self.expenses.iter().any(|e| e.id == expense_id) {
            return Err(EngineError::ExpenseNotFound {
                id: expense_id.to_string(),
            });
        }

        self.expenses.retain(|e| e.id != expense_id);
        self.splits.retain(|s| s.expense_id != expense_id);
        self.revision += 1;
        Ok(())
    }

    /// Assembles the read model for a trip: participants, expenses, splits,
    /// computed balances, and budget summary.
    ///
    /// Always rebuilt from the raw collections; nothing is cached. Returns
    /// `None` when the trip does not exist.
    pub fn trip_details(&self, trip_id: &str) -> Option<TripWithDetails> {
        let trip = self.trip(trip_id)?.clone();

        let participants: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.trip_id == trip_id)
            .cloned()
            .collect();
        let expenses: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect();
        let splits: Vec<ExpenseSplit> = self
            .splits
            .iter()
            .filter(|s| expenses.iter().any(|e| e.id == s.expense_id))
            .cloned()
            .collect();

        let balances = calculate_balances(&expenses, &splits, &participants);
        let budget_summary = calculate_budget_summary(trip.budget, &expenses);

        Some(TripWithDetails {
            trip,
            participants,
            expenses,
            splits,
            balances,
            budget_summary,
        })
    }
}
