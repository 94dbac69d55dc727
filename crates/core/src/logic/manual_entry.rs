use crate::prelude::*;

/// Validates one hand-typed entry that would land at position
/// `existing_count + 1`.
///
/// Returns `None` for an incomplete form. Otherwise always returns a
/// recipient, flagged invalid when a check fails. Unlike tabular ingestion
/// there is no duplicate check and amounts above 1000 ether are refused.
pub fn validate_manual_entry(entry: &ManualEntry, existing_count: usize) -> Option<Recipient> {
    if !entry.is_complete() {
        debug!("Ignoring incomplete manual entry");
        return None;
    }

    let is_valid_address = is_address(entry.address());
    let is_valid_amount = parse_leading_decimal(entry.amount())
        .is_some_and(|v| v.is_finite() && v > 0.0 && v <= MANUAL_ENTRY_MAX_ETHER);

    let mut amount_wei = U256::zero();
    let mut error = None;

    if is_valid_amount {
        match parse_ether(entry.amount()) {
            Ok(wei) => amount_wei = wei,
            Err(e) => {
                debug!("Manual entry amount rejected: {e}");
                error = Some(RecipientError::AmountParsingFailed);
            }
        }
    }

    if !is_valid_address {
        error = Some(RecipientError::InvalidAddressFormat);
    } else if !is_valid_amount {
        error = Some(RecipientError::AmountOutOfRange);
    }

    let name = match entry.name().trim() {
        "" => format!("Recipient {}", existing_count + 1),
        name => name.to_owned(),
    };

    let mut recipient = Recipient::unchecked(entry.address().trim(), name, entry.amount().clone());
    recipient.set_amount_wei(amount_wei);
    if let Some(reason) = error {
        recipient.invalidate(reason);
    }
    Some(recipient)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1Ab21";

    fn entry(address: &str, name: &str, amount: &str) -> ManualEntry {
        ManualEntry::builder()
            .address(address)
            .name(name)
            .amount(amount)
            .build()
    }

    #[test]
    fn blank_fields_are_ignored() {
        assert_eq!(validate_manual_entry(&entry("", "Bob", "5"), 0), None);
        assert_eq!(validate_manual_entry(&entry(ALICE, "Bob", "  "), 0), None);
        assert_eq!(validate_manual_entry(&entry("   ", "", ""), 0), None);
    }

    #[test]
    fn valid_entry() {
        let recipient = validate_manual_entry(&entry(ALICE, " Alice ", "0.5"), 0).unwrap();
        assert!(recipient.is_valid());
        assert_eq!(recipient.error(), None);
        assert_eq!(recipient.name(), "Alice");
        assert_eq!(recipient.amount_wei(), parse_ether("0.5").unwrap());
    }

    #[test]
    fn non_hex_address_is_kept_invalid() {
        let recipient =
            validate_manual_entry(&entry("0xZZZ0000000000000000000000000000000000000", "", "5"), 0)
                .unwrap();
        assert!(!recipient.is_valid());
        assert_eq!(recipient.error(), Some(RecipientError::InvalidAddressFormat));
    }

    #[test]
    fn address_error_takes_precedence_over_amount() {
        let recipient = validate_manual_entry(&entry("nope", "", "5000"), 0).unwrap();
        assert_eq!(recipient.error(), Some(RecipientError::InvalidAddressFormat));
    }

    #[test]
    fn amount_ceiling_applies() {
        let at_limit = validate_manual_entry(&entry(ALICE, "", "1000"), 0).unwrap();
        assert!(at_limit.is_valid());

        let over = validate_manual_entry(&entry(ALICE, "", "1000.01"), 0).unwrap();
        assert!(!over.is_valid());
        assert_eq!(over.error(), Some(RecipientError::AmountOutOfRange));
        assert_eq!(over.amount_wei(), U256::zero());

        let zero = validate_manual_entry(&entry(ALICE, "", "0"), 0).unwrap();
        assert_eq!(zero.error(), Some(RecipientError::AmountOutOfRange));
    }

    #[test]
    fn unconvertible_amount_fails_parsing() {
        let recipient = validate_manual_entry(&entry(ALICE, "", "1e2"), 0).unwrap();
        assert!(!recipient.is_valid());
        assert_eq!(recipient.error(), Some(RecipientError::AmountParsingFailed));
    }

    #[test]
    fn blank_name_defaults_to_position() {
        let recipient = validate_manual_entry(&entry(ALICE, "  ", "1"), 4).unwrap();
        assert_eq!(recipient.name(), "Recipient 5");
    }

    #[test]
    fn padded_amount_is_accepted() {
        let recipient = validate_manual_entry(&entry(ALICE, "Alice", " 1"), 0).unwrap();
        assert!(recipient.is_valid());
        assert_eq!(recipient.error(), None);
        assert_eq!(recipient.amount_wei(), parse_ether("1").unwrap());
        assert_eq!(recipient.amount(), " 1");
    }

    #[test]
    fn amount_text_is_kept_verbatim() {
        let recipient = validate_manual_entry(&entry(ALICE, "", "0.50"), 0).unwrap();
        assert_eq!(recipient.amount(), "0.50");
    }
}
