//! Core data models for the expense splitting engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balance;
mod expense;
mod participant;
mod split;
mod trip;
mod trip_details;

pub use balance::{Balance, SETTLEMENT_TOLERANCE};
pub use expense::{Expense, ExpenseCategory};
pub use participant::{Participant, ParticipantRole};
pub use split::ExpenseSplit;
pub use trip::Trip;
pub use trip_details::{BudgetSummary, TripWithDetails};
