use crate::prelude::*;

impl PaymentDraft {
    /// Replaces the whole list (and the error list) with an upload result.
    pub fn apply_parsed(&mut self, parsed: ParsedCsv) {
        let (recipients, errors) = parsed.into_parts();
        info!(
            "Loaded {} recipients with {} errors",
            recipients.len(),
            errors.len()
        );
        self.recipients = recipients;
        self.errors = errors;
    }

    /// Appends a hand-typed entry. Incomplete entries are ignored.
    pub fn add_manual(&mut self, entry: &ManualEntry) -> Option<&Recipient> {
        let recipient = validate_manual_entry(entry, self.recipients.len())?;
        if let Some(reason) = recipient.error() {
            warn!("Added invalid recipient {}: {reason}", recipient.address());
        }
        self.recipients.push(recipient);
        self.recipients.last()
    }

    /// Removes the entry at `index`; the others are not re-validated.
    pub fn remove(&mut self, index: usize) -> Option<Recipient> {
        (index < self.recipients.len()).then(|| self.recipients.remove(index))
    }

    pub fn clear(&mut self) {
        self.recipients.clear();
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn valid_recipients(&self) -> impl Iterator<Item = &Recipient> {
        self.recipients.iter().filter(|r| r.is_valid())
    }

    pub fn summary(&self) -> PaymentSummary {
        calculate_totals(&self.recipients)
    }

    /// Contract call for the valid recipients, `None` when there are none.
    pub fn batch_call(&self) -> Result<Option<BatchPayCall>, InvalidAddress> {
        let call = BatchPayCall::try_from_recipients(self.valid_recipients())?;
        Ok((!call.is_empty()).then_some(call))
    }
}
