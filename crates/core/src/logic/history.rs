use crate::prelude::*;

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

impl PaymentBatch {
    /// Sum of all amounts, excluding the fee.
    pub fn total(&self) -> U256 {
        self.amounts()
            .iter()
            .fold(U256::zero(), |sum, amount| sum.saturating_add(*amount))
    }

    pub fn recipient_count(&self) -> usize {
        self.recipients().len()
    }

    /// `None` for timestamps chrono cannot represent.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        let seconds = i64::try_from(self.timestamp()).ok()?;
        DateTime::from_timestamp(seconds, 0)
    }

    pub fn settled_at_display(&self) -> String {
        self.settled_at()
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| format!("unix {}", self.timestamp()))
    }

    /// `(address, name, amount)` rows, zipped to the shortest sequence.
    pub fn rows(&self) -> impl Iterator<Item = (&EthAccountId, &str, U256)> {
        self.recipients()
            .iter()
            .zip(self.names())
            .zip(self.amounts())
            .map(|((address, name), amount)| (address, name.as_str(), *amount))
    }
}

/// Pairs each batch with its display number, counting down from the total
/// so the first listed batch is `#len` and the last is `#1`.
pub fn number_batches(batches: &[PaymentBatch]) -> impl Iterator<Item = (usize, &PaymentBatch)> {
    let len = batches.len();
    batches
        .iter()
        .enumerate()
        .map(move |(index, batch)| (len - index, batch))
}
