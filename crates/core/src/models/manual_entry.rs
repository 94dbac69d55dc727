use crate::prelude::*;

/// A single recipient typed in by hand, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Builder)]
pub struct ManualEntry {
    #[getset(get = "pub")]
    #[builder(into)]
    address: String,

    #[getset(get = "pub")]
    #[builder(into, default)]
    name: String,

    #[getset(get = "pub")]
    #[builder(into)]
    amount: String,
}

impl ManualEntry {
    /// Incomplete forms (blank address or amount) are ignored rather than
    /// rejected.
    pub fn is_complete(&self) -> bool {
        !self.address.trim().is_empty() && !self.amount.trim().is_empty()
    }
}
