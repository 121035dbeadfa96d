//! Response types for the expense splitting API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a trip not found error response.
    pub fn trip_not_found(id: &str) -> Self {
        Self::with_details(
            "TRIP_NOT_FOUND",
            format!("Trip not found: {}", id),
            format!("No trip exists with id '{}'", id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::TripNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::trip_not_found(&id),
            },
            EngineError::ParticipantNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PARTICIPANT_NOT_FOUND",
                    format!("Participant not found: {}", id),
                    format!("No participant exists with id '{}'", id),
                ),
            },
            EngineError::ExpenseNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EXPENSE_NOT_FOUND",
                    format!("Expense not found: {}", id),
                    format!("No expense exists with id '{}'", id),
                ),
            },
            EngineError::InvalidTrip { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TRIP",
                    format!("Invalid trip field '{}': {}", field, message),
                    "The trip data contains invalid information",
                ),
            },
            EngineError::InvalidParticipant { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PARTICIPANT",
                    format!("Invalid participant field '{}': {}", field, message),
                    "The participant data contains invalid information",
                ),
            },
            EngineError::InvalidExpense {
                expense_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EXPENSE",
                    format!("Invalid expense '{}': {}", expense_id, message),
                    "The expense data contains invalid information",
                ),
            },
        }
    }
}
