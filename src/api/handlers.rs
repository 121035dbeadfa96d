//! HTTP request handlers for the expense splitting API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{who_is_owed_by, who_owes_to};
use crate::error::EngineError;
use crate::store::{ExpenseUpdate, TripUpdate};

use super::request::{AddParticipantRequest, CreateExpenseRequest, CreateTripRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/trips", post(create_trip).get(list_trips))
        .route(
            "/trips/:trip_id",
            get(get_trip).patch(update_trip).delete(delete_trip),
        )
        .route("/trips/:trip_id/participants", post(add_participant))
        .route(
            "/trips/:trip_id/participants/:participant_id",
            axum::routing::delete(remove_participant),
        )
        .route("/trips/:trip_id/expenses", post(add_expense))
        .route(
            "/trips/:trip_id/expenses/:expense_id",
            axum::routing::patch(update_expense).delete(remove_expense),
        )
        .route("/trips/:trip_id/balances", get(get_balances))
        .route(
            "/trips/:trip_id/participants/:participant_id/debtors",
            get(get_debtors),
        )
        .route(
            "/trips/:trip_id/participants/:participant_id/creditors",
            get(get_creditors),
        )
        .with_state(state)
}

/// Unwraps a JSON payload or builds the 400 response for a rejection.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Handler for POST /trips.
async fn create_trip(
    State(state): State<AppState>,
    payload: Result<Json<CreateTripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let trip = request.into_trip();
    let mut store = state.store().write().await;
    match store.add_trip(trip.clone()) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, trip_id = %trip.id, "Trip created");
            (StatusCode::CREATED, Json(trip)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Trip creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /trips.
async fn list_trips(State(state): State<AppState>) -> Response {
    let store = state.store().read().await;
    Json(store.trips().to_vec()).into_response()
}

/// Handler for GET /trips/{trip_id}.
///
/// Returns the full read model: trip, participants, expenses, splits,
/// balances, and budget summary, recomputed on every call.
async fn get_trip(State(state): State<AppState>, Path(trip_id): Path<String>) -> Response {
    let store = state.store().read().await;
    match store.trip_details(&trip_id) {
        Some(details) => Json(details).into_response(),
        None => ApiErrorResponse::from(EngineError::TripNotFound { id: trip_id }).into_response(),
    }
}

/// Handler for PATCH /trips/{trip_id}.
async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<TripUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let update = match parse_json(payload, correlation_id) {
        Ok(update) => update,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.update_trip(&trip_id, update) {
        Ok(()) => match store.trip(&trip_id) {
            Some(trip) => Json(trip.clone()).into_response(),
            None => {
                ApiErrorResponse::from(EngineError::TripNotFound { id: trip_id }).into_response()
            }
        },
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Trip update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /trips/{trip_id}.
async fn delete_trip(State(state): State<AppState>, Path(trip_id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    match store.remove_trip(&trip_id) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, trip_id = %trip_id, "Trip deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /trips/{trip_id}/participants.
async fn add_participant(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<AddParticipantRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let participant = request.into_participant(&trip_id);
    let mut store = state.store().write().await;
    match store.add_participant(participant.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                trip_id = %trip_id,
                participant_id = %participant.id,
                "Participant added"
            );
            (StatusCode::CREATED, Json(participant)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Adding participant failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /trips/{trip_id}/participants/{participant_id}.
async fn remove_participant(
    State(state): State<AppState>,
    Path((trip_id, participant_id)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    match store.remove_participant(&trip_id, &participant_id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                trip_id = %trip_id,
                participant_id = %participant_id,
                "Participant removed"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /trips/{trip_id}/expenses.
///
/// Computes equal splits over the trip's current participants as part of
/// the insert.
async fn add_expense(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let expense = request.into_expense(&trip_id);
    let mut store = state.store().write().await;
    match store.add_expense(expense.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                trip_id = %trip_id,
                expense_id = %expense.id,
                amount = %expense.amount,
                "Expense added"
            );
            (StatusCode::CREATED, Json(expense)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Adding expense failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PATCH /trips/{trip_id}/expenses/{expense_id}.
async fn update_expense(
    State(state): State<AppState>,
    Path((trip_id, expense_id)): Path<(String, String)>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let update = match parse_json(payload, correlation_id) {
        Ok(update) => update,
        Err(response) => return response,
    };

    let mut store = state.store().write().await;
    match store.update_expense(&trip_id, &expense_id, update) {
        Ok(()) => match store.expense(&expense_id) {
            Some(expense) => Json(expense.clone()).into_response(),
            None => ApiErrorResponse::from(EngineError::ExpenseNotFound { id: expense_id })
                .into_response(),
        },
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Expense update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /trips/{trip_id}/expenses/{expense_id}.
async fn remove_expense(
    State(state): State<AppState>,
    Path((trip_id, expense_id)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut store = state.store().write().await;
    // The expense cascade does not depend on the trip id; it is in the path
    // for routing symmetry only.
    let _ = trip_id;
    match store.remove_expense(&expense_id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                expense_id = %expense_id,
                "Expense removed"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /trips/{trip_id}/balances.
async fn get_balances(State(state): State<AppState>, Path(trip_id): Path<String>) -> Response {
    let store = state.store().read().await;
    match store.trip_details(&trip_id) {
        Some(details) => Json(details.balances).into_response(),
        None => ApiErrorResponse::from(EngineError::TripNotFound { id: trip_id }).into_response(),
    }
}

/// Handler for GET /trips/{trip_id}/participants/{participant_id}/debtors.
///
/// Lists the participants who owe money to the group pool, excluding the
/// queried participant. An unknown participant id yields an empty list,
/// not an error.
async fn get_debtors(
    State(state): State<AppState>,
    Path((trip_id, participant_id)): Path<(String, String)>,
) -> Response {
    let store = state.store().read().await;
    match store.trip_details(&trip_id) {
        Some(details) => Json(who_owes_to(&participant_id, &details.balances)).into_response(),
        None => ApiErrorResponse::from(EngineError::TripNotFound { id: trip_id }).into_response(),
    }
}

/// Handler for GET /trips/{trip_id}/participants/{participant_id}/creditors.
///
/// Lists the participants the queried participant should pay; empty unless
/// the queried participant owes the pool.
async fn get_creditors(
    State(state): State<AppState>,
    Path((trip_id, participant_id)): Path<(String, String)>,
) -> Response {
    let store = state.store().read().await;
    match store.trip_details(&trip_id) {
        Some(details) => Json(who_is_owed_by(&participant_id, &details.balances)).into_response(),
        None => ApiErrorResponse::from(EngineError::TripNotFound { id: trip_id }).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new())
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let request = builder
            .body(match &body {
                Some(value) => Body::from(value.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_create_trip_returns_201_with_minted_id() {
        let router = create_test_router();
        let body = json!({
            "name": "Kyoto 2026",
            "budget": "500.00",
            "created_by": "user_001"
        });

        let (status, json) = send(router, "POST", "/trips", Some(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["name"], "Kyoto 2026");
        assert!(!json["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_trip_returns_404() {
        let router = create_test_router();

        let (status, json) = send(router, "GET", "/trips/trip_missing", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "TRIP_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/trips")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_test_router();
        let body = json!({ "name": "No budget" });

        let (status, json) = send(router, "POST", "/trips", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_delete_unknown_expense_returns_404() {
        let router = create_test_router();
        let body = json!({
            "name": "Trip",
            "budget": "100.00",
            "created_by": "user_001"
        });
        let (_, trip) = send(router.clone(), "POST", "/trips", Some(body)).await;
        let trip_id = trip["id"].as_str().unwrap();

        let (status, json) = send(
            router,
            "DELETE",
            &format!("/trips/{}/expenses/exp_missing", trip_id),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "EXPENSE_NOT_FOUND");
    }
}
