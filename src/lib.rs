//! Balance-computation engine for shared trip expenses.
//!
//! This crate records shared expenses for a trip, divides each expense equally
//! among the trip's participants, and computes a net balance per participant
//! against the group's common pool. Positive balances owe the pool, negative
//! balances are owed by it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod store;
