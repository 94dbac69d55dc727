use crate::prelude::*;

/// The recipient list of one "create payment" session, together with the
/// errors reported by the last tabular upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct PaymentDraft {
    #[getset(get = "pub")]
    pub(crate) recipients: Vec<Recipient>,

    #[getset(get = "pub")]
    pub(crate) errors: Vec<String>,
}
