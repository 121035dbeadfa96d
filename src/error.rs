//! Error types for the expense splitting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The pure calculation functions never fail; these errors are produced by
//! the [`crate::store::TripStore`] mutators and surfaced through the API.

use thiserror::Error;

/// The main error type for the expense splitting engine.
///
/// Store mutations and API requests return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use split_engine::error::EngineError;
///
/// let error = EngineError::TripNotFound {
///     id: "trip_missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Trip not found: trip_missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No trip exists with the given id.
    #[error("Trip not found: {id}")]
    TripNotFound {
        /// The trip id that was not found.
        id: String,
    },

    /// No participant exists with the given id.
    #[error("Participant not found: {id}")]
    ParticipantNotFound {
        /// The participant id that was not found.
        id: String,
    },

    /// No expense exists with the given id.
    #[error("Expense not found: {id}")]
    ExpenseNotFound {
        /// The expense id that was not found.
        id: String,
    },

    /// A trip contained invalid data.
    #[error("Invalid trip field '{field}': {message}")]
    InvalidTrip {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A participant record contained invalid data.
    #[error("Invalid participant field '{field}': {message}")]
    InvalidParticipant {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An expense contained invalid or inconsistent data.
    #[error("Invalid expense '{expense_id}': {message}")]
    InvalidExpense {
        /// The id of the invalid expense.
        expense_id: String,
        /// A description of what made the expense invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
