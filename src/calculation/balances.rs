//! Balance aggregation.
//!
//! This module folds a trip's expenses and splits into one net balance per
//! participant.

use std::collections::HashMap;
use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Balance, Expense, ExpenseSplit, Participant};

/// Computes the net balance of every participant against the shared pool.
///
/// Every participant in `participants` receives a balance, initialized to
/// zero, so the output always has exactly one entry per input participant
/// in input order. For each expense the payer's balance is decremented by
/// the full amount (they fronted the money for the group); for each split
/// the owing participant's balance is incremented by the owed share. Final
/// amounts are rounded half-up to 2 decimal places.
///
/// Stale references are filtered silently: a split pointing at an expense
/// or participant outside the supplied sets contributes nothing, as does an
/// expense whose payer is not in the supplied participant set. The
/// aggregator tolerates leftovers from a caller that forgot to cascade a
/// deletion.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::{calculate_balances, calculate_equal_split};
/// use split_engine::models::{Expense, ExpenseCategory, Participant};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let participants: Vec<Participant> = ["part_001", "part_002", "part_003"]
///     .iter()
///     .map(|id| Participant {
///         id: id.to_string(),
///         user_id: format!("user_{id}"),
///         trip_id: "trip_001".to_string(),
///         name: id.to_string(),
///         email: None,
///         role: None,
///     })
///     .collect();
/// let expense = Expense {
///     id: "exp_001".to_string(),
///     trip_id: "trip_001".to_string(),
///     amount: Decimal::new(9000, 2), // 90.00 paid by part_001
///     description: "Dinner".to_string(),
///     category: ExpenseCategory::Food,
///     paid_by: "part_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// let splits = calculate_equal_split(&expense, &participants);
///
/// let balances = calculate_balances(&[expense], &splits, &participants);
/// assert_eq!(balances[0].amount, Decimal::new(-6000, 2)); // payer is owed 60.00
/// assert_eq!(balances[1].amount, Decimal::new(3000, 2));
/// assert_eq!(balances[2].amount, Decimal::new(3000, 2));
/// ```
pub fn calculate_balances(
    expenses: &[Expense],
    splits: &[ExpenseSplit],
    participants: &[Participant],
) -> Vec<Balance> {
    let mut amounts: HashMap<&str, Decimal> = participants
        .iter()
        .map(|p| (p.id.as_str(), Decimal::ZERO))
        .collect();
    let expense_ids: HashSet<&str> = expenses.iter().map(|e| e.id.as_str()).collect();

    for expense in expenses {
        // The payer fronted the full amount on behalf of the group. A payer
        // outside the participant set is a stale reference and is skipped.
        if let Some(amount) = amounts.get_mut(expense.paid_by.as_str()) {
            *amount -= expense.amount;
        }
    }

    for split in splits {
        if !expense_ids.contains(split.expense_id.as_str()) {
            continue;
        }
        if let Some(amount) = amounts.get_mut(split.participant_id.as_str()) {
            *amount += split.amount_owed;
        }
    }

    participants
        .iter()
        .map(|participant| Balance {
            participant_id: participant.id.clone(),
            participant_name: participant.name.clone(),
            amount: amounts[participant.id.as_str()]
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect()
}
