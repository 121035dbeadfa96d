//! HTTP API module for the expense splitting engine.
//!
//! This module provides the REST endpoints through which presentation code
//! manages trips, participants, and expenses, and reads the computed
//! balances.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddParticipantRequest, CreateExpenseRequest, CreateTripRequest};
pub use response::ApiError;
pub use state::AppState;
