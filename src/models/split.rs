//! Expense split model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portion of one expense attributed to one participant.
///
/// A participant has at most one split per expense. The splits for one
/// expense, summed, match the expense amount to within rounding tolerance
/// (each share is rounded independently, see
/// [`crate::calculation::calculate_equal_split`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    /// Unique identifier for the split (`"{expense_id}-{participant_id}"`).
    pub id: String,
    /// The expense this split belongs to.
    pub expense_id: String,
    /// The participant who owes this share.
    pub participant_id: String,
    /// The amount owed by the participant for this expense.
    pub amount_owed: Decimal,
}
