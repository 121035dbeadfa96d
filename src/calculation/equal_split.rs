//! Equal split computation.
//!
//! This module divides one expense evenly among a set of participants,
//! producing one split per participant.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Expense, ExpenseSplit, Participant};

/// Divides an expense equally among the given participants.
///
/// The share is `expense.amount / participants.len()`, rounded half-up to
/// 2 decimal places (currency minor units). Each participant receives
/// exactly one split of that rounded share, with id
/// `"{expense_id}-{participant_id}"`.
///
/// Each share is rounded independently and the remainder is not
/// redistributed, so the sum of the splits can differ from the expense
/// amount by up to `participants.len() * 0.005` currency units (e.g. 10.00
/// split three ways yields 3.33 + 3.33 + 3.33 = 9.99).
///
/// # Arguments
///
/// * `expense` - The expense to divide.
/// * `participants` - The trip's participants at the moment of calculation.
///
/// # Returns
///
/// One split per participant, or an empty vector when `participants` is
/// empty. Callers are responsible for not creating expenses for trips with
/// no participants; the calculator itself tolerates the case.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::calculate_equal_split;
/// use split_engine::models::{Expense, ExpenseCategory, Participant};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let expense = Expense {
///     id: "exp_001".to_string(),
///     trip_id: "trip_001".to_string(),
///     amount: Decimal::new(9000, 2), // 90.00
///     description: "Dinner".to_string(),
///     category: ExpenseCategory::Food,
///     paid_by: "part_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
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
///
/// let splits = calculate_equal_split(&expense, &participants);
/// assert_eq!(splits.len(), 3);
/// assert!(splits.iter().all(|s| s.amount_owed == Decimal::new(3000, 2)));
/// ```
pub fn calculate_equal_split(expense: &Expense, participants: &[Participant]) -> Vec<ExpenseSplit> {
    if participants.is_empty() {
        return Vec::new();
    }

    let share = (expense.amount / Decimal::from(participants.len()))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    participants
        .iter()
        .map(|participant| ExpenseSplit {
            id: format!("{}-{}", expense.id, participant.id),
            expense_id: expense.id.clone(),
            participant_id: participant.id.clone(),
            amount_owed: share,
        })
        .collect()
}
