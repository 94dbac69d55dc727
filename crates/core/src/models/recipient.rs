use crate::prelude::*;

/// Why a [`Recipient`] was flagged invalid. The `Display` text is what gets
/// shown next to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RecipientError {
    #[error("Invalid address")]
    InvalidAddress,

    #[error("Duplicate address")]
    DuplicateAddress,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount parsing failed")]
    AmountParsingFailed,

    #[error("Invalid Ethereum address format")]
    InvalidAddressFormat,

    #[error("Amount must be between 0.000001 and 1000 ETH")]
    AmountOutOfRange,
}

/// One payment target.
///
/// `amount_wei` is only meaningful while `is_valid` is `true`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Recipient {
    /// Address as entered, case preserved.
    #[getset(get = "pub")]
    address: String,

    #[getset(get = "pub")]
    name: String,

    /// Amount in ether exactly as entered.
    #[getset(get = "pub")]
    amount: String,

    #[getset(get_copy = "pub")]
    amount_wei: U256,

    #[getset(get_copy = "pub")]
    is_valid: bool,

    #[getset(get_copy = "pub")]
    error: Option<RecipientError>,
}

impl Recipient {
    /// A recipient that has not failed any check yet, with a zero amount.
    pub(crate) fn unchecked(
        address: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            amount: amount.into(),
            amount_wei: U256::zero(),
            is_valid: true,
            error: None,
        }
    }

    /// Marks the recipient invalid; the stored reason is replaced by `reason`.
    pub(crate) fn invalidate(&mut self, reason: RecipientError) {
        self.is_valid = false;
        self.error = Some(reason);
    }

    pub(crate) fn set_amount_wei(&mut self, amount_wei: U256) {
        self.amount_wei = amount_wei;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_keeps_last_reason() {
        let mut recipient = Recipient::unchecked("0xabc", "Alice", "1");
        assert!(recipient.is_valid());
        recipient.invalidate(RecipientError::DuplicateAddress);
        recipient.invalidate(RecipientError::InvalidAmount);
        assert!(!recipient.is_valid());
        assert_eq!(recipient.error(), Some(RecipientError::InvalidAmount));
    }

    #[test]
    fn error_messages() {
        assert_eq!(RecipientError::InvalidAddress.to_string(), "Invalid address");
        assert_eq!(
            RecipientError::AmountOutOfRange.to_string(),
            "Amount must be between 0.000001 and 1000 ETH"
        );
    }
}
