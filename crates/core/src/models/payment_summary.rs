use crate::prelude::*;

/// Totals over the valid recipients of a list. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, CopyGetters, Builder)]
pub struct PaymentSummary {
    #[getset(get_copy = "pub")]
    total_amount: U256,

    #[getset(get_copy = "pub")]
    fee: U256,

    #[getset(get_copy = "pub")]
    total_required: U256,

    /// Number of valid recipients, not of all entries.
    #[getset(get_copy = "pub")]
    recipient_count: usize,
}
