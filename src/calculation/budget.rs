//! Budget summary computation.

use rust_decimal::Decimal;

use crate::models::{BudgetSummary, Expense};

/// Computes a trip's spending position against its budget ceiling.
///
/// `total_spent` is the exact sum of expense amounts, `remaining` is the
/// exact subtraction `budget - total_spent` (negative when the trip is over
/// budget), and `over_budget` is true when spending exceeds the ceiling.
///
/// # Examples
///
/// ```
/// use split_engine::calculation::calculate_budget_summary;
/// use rust_decimal::Decimal;
///
/// let summary = calculate_budget_summary(Decimal::new(50000, 2), &[]);
/// assert_eq!(summary.remaining, Decimal::new(50000, 2));
/// assert!(!summary.over_budget);
/// ```
pub fn calculate_budget_summary(budget: Decimal, expenses: &[Expense]) -> BudgetSummary {
    let total_spent: Decimal = expenses.iter().map(|e| e.amount).sum();

    BudgetSummary {
        budget,
        total_spent,
        remaining: budget - total_spent,
        over_budget: total_spent > budget,
    }
}
