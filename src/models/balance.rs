//! Balance model.
//!
//! A balance is a derived value with no stored identity: it is recomputed
//! from the raw collections on every read and never persisted or mutated
//! directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balances with a magnitude below this amount are treated as settled.
pub const SETTLEMENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// A participant's net position against the trip's shared pool.
///
/// Positive = the participant owes the group; negative = the group owes the
/// participant.
///
/// # Example
///
/// ```
/// use split_engine::models::Balance;
/// use rust_decimal::Decimal;
///
/// let balance = Balance {
///     participant_id: "part_001".to_string(),
///     participant_name: "Alice".to_string(),
///     amount: Decimal::new(-6000, 2), // -60.00, the group owes Alice
/// };
/// assert!(balance.is_owed());
/// assert!(!balance.is_settled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The participant this balance belongs to.
    pub participant_id: String,
    /// Display name of the participant, denormalized for presentation.
    pub participant_name: String,
    /// The net amount: positive = owes, negative = is owed.
    pub amount: Decimal,
}

impl Balance {
    /// Returns true if the balance magnitude is below the settlement
    /// tolerance (0.01 currency units).
    pub fn is_settled(&self) -> bool {
        self.amount.abs() < SETTLEMENT_TOLERANCE
    }

    /// Returns true if the participant owes money to the group pool.
    pub fn owes(&self) -> bool {
        self.amount >= SETTLEMENT_TOLERANCE
    }

    /// Returns true if the group pool owes money to the participant.
    pub fn is_owed(&self) -> bool {
        self.amount <= -SETTLEMENT_TOLERANCE
    }
}
