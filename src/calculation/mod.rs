//! Calculation logic for the expense splitting engine.
//!
//! This module contains the pure functions at the core of the crate:
//! equal-split computation, balance aggregation, directional balance
//! queries, and the budget summary. Every function here is a deterministic
//! function of its inputs with no I/O and no shared state.

mod balances;
mod budget;
mod equal_split;
mod queries;

pub use balances::calculate_balances;
pub use budget::calculate_budget_summary;
pub use equal_split::calculate_equal_split;
pub use queries::{who_is_owed_by, who_owes_to};
