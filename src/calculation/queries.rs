//! Directional balance queries.
//!
//! Balances are net positions against a single shared pool, not pairwise
//! debts, so these projections approximate "who owes" and "who is owed"
//! views from the net amounts.

use crate::models::Balance;

/// Lists the participants who owe money to the group pool, excluding the
/// queried participant.
///
/// Returns balances with a positive amount. A participant id with no
/// matching balance simply yields the other debtors; there is no error
/// case.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::who_owes_to;
/// use split_engine::models::Balance;
/// use rust_decimal::Decimal;
///
/// let balances = vec![
///     Balance {
///         participant_id: "part_001".to_string(),
///         participant_name: "Alice".to_string(),
///         amount: Decimal::new(-2500, 2),
///     },
///     Balance {
///         participant_id: "part_002".to_string(),
///         participant_name: "Bob".to_string(),
///         amount: Decimal::new(2500, 2),
///     },
/// ];
///
/// let debtors = who_owes_to("part_001", &balances);
/// assert_eq!(debtors.len(), 1);
/// assert_eq!(debtors[0].participant_id, "part_002");
/// ```
pub fn who_owes_to(participant_id: &str, balances: &[Balance]) -> Vec<Balance> {
    balances
        .iter()
        .filter(|b| b.participant_id != participant_id && b.amount > rust_decimal::Decimal::ZERO)
        .cloned()
        .collect()
}

/// Lists the participants the queried participant should pay.
///
/// Only non-empty when the queried participant's own balance is positive
/// (they owe the group). The result contains the participants with a
/// negative balance (the group owes them), with amounts reported as
/// positive magnitudes.
pub fn who_is_owed_by(participant_id: &str, balances: &[Balance]) -> Vec<Balance> {
    let Some(own) = balances.iter().find(|b| b.participant_id == participant_id) else {
        return Vec::new();
    };
    if own.amount <= rust_decimal::Decimal::ZERO {
        return Vec::new();
    }

    balances
        .iter()
        .filter(|b| b.participant_id != participant_id && b.amount < rust_decimal::Decimal::ZERO)
        .map(|b| Balance {
            participant_id: b.participant_id.clone(),
            participant_name: b.participant_name.clone(),
            amount: b.amount.abs(),
        })
        .collect()
}
