//! Transaction model
//!
//! Represents one recorded expense. A transaction is immutable after
//! construction: its amount, category, and timestamp never change, and
//! removal from the store is the only way it goes away.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use crate::error::SpendlogResult;

/// Fixed timestamp format, e.g. "01/15/25 13:45:09"
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Expense amount
    amount: Amount,

    /// Expense category
    category: Category,

    /// When the transaction was recorded
    #[serde(with = "serde_timestamp")]
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction, stamped with the current time
    ///
    /// The constructor does not validate its inputs; validation happens
    /// before construction, in the controller's validated add path.
    pub fn new(amount: Amount, category: Category) -> Self {
        Self {
            amount,
            category,
            timestamp: Utc::now(),
        }
    }

    /// Get the amount
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Get the category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Get the timestamp formatted as [`TIMESTAMP_FORMAT`]
    pub fn timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Get the raw instant the transaction was recorded at
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Parse a formatted timestamp string back into an instant
    ///
    /// A string that does not match [`TIMESTAMP_FORMAT`] is an error; a
    /// failed parse never produces a valid-looking time.
    pub fn parse_timestamp(s: &str) -> SpendlogResult<DateTime<Utc>> {
        let naive = chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
        Ok(naive.and_utc())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.timestamp(), self.amount, self.category)
    }
}

/// Serialize the timestamp through the same fixed format the accessor uses,
/// so JSON output and `timestamp()` agree.
mod serde_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = timestamp.format(TIMESTAMP_FORMAT).to_string();
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
