use crate::prelude::*;

use std::fmt::{self, Display, Formatter};

/// Upload errors listed before the rest are folded into a count.
const MAX_LISTED_ERRORS: usize = 5;

/// `0x1234...abcd`.
pub fn short_address(address: &str) -> String {
    match (address.get(..6), address.get(address.len().saturating_sub(4)..)) {
        (Some(head), Some(tail)) if address.len() > 10 => format!("{head}...{tail}"),
        _ => address.to_owned(),
    }
}

/// Capped list of upload errors, nothing at all when there are none.
struct ErrorList<'a>(&'a [String]);

impl Display for ErrorList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let errors = self.0;
        if errors.is_empty() {
            return Ok(());
        }
        writeln!(f, "Validation Errors")?;
        for error in errors.iter().take(MAX_LISTED_ERRORS) {
            writeln!(f, "  - {error}")?;
        }
        if errors.len() > MAX_LISTED_ERRORS {
            writeln!(f, "  ...and {} more errors", errors.len() - MAX_LISTED_ERRORS)?;
        }
        Ok(())
    }
}

struct RecipientTable<'a>(&'a [Recipient]);

impl Display for RecipientTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let recipients = self.0;
        let valid = recipients.iter().filter(|r| r.is_valid()).count();
        write!(f, "{} recipients, {valid} valid", recipients.len())?;
        if valid < recipients.len() {
            write!(f, ", {} invalid", recipients.len() - valid)?;
        }
        writeln!(f)?;
        if recipients.is_empty() {
            return Ok(());
        }

        let name_width = recipients
            .iter()
            .map(|r| r.name().chars().count())
            .chain(std::iter::once("Name".len()))
            .max()
            .unwrap_or_default();
        writeln!(
            f,
            "{:>4}  {:<name_width$}  {:<13}  {:>14}  Status",
            "#", "Name", "Address", "Amount (ETH)"
        )?;
        for (index, recipient) in recipients.iter().enumerate() {
            let status = match recipient.error() {
                None => "OK".to_owned(),
                Some(reason) => reason.to_string(),
            };
            writeln!(
                f,
                "{:>4}  {:<name_width$}  {:<13}  {:>14}  {status}",
                index + 1,
                recipient.name(),
                short_address(recipient.address()),
                format_amount(recipient.amount_wei()),
            )?;
        }
        Ok(())
    }
}

struct SummaryView<'a>(&'a PaymentSummary);

impl Display for SummaryView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Recipients            {}", summary.recipient_count())?;
        writeln!(f, "Subtotal              {} ETH", format_amount(summary.total_amount()))?;
        writeln!(f, "Protocol Fee (0.5%)   {} ETH", format_amount(summary.fee()))?;
        writeln!(f, "Total Required        {} ETH", format_amount(summary.total_required()))
    }
}

/// Listed in the order given, numbered down to `#1`.
struct HistoryView<'a>(&'a [PaymentBatch]);

impl Display for HistoryView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let batches = self.0;
        if batches.is_empty() {
            return writeln!(f, "No payments yet");
        }
        writeln!(f, "Your Payments ({})", batches.len())?;
        for (number, batch) in number_batches(batches) {
            writeln!(
                f,
                "\nBatch Payment #{number}  {}  {} ETH  {} recipients",
                batch.settled_at_display(),
                format_ether(batch.total()),
                batch.recipient_count()
            )?;
            for (index, (address, name, amount)) in batch.rows().enumerate() {
                writeln!(
                    f,
                    "  {:>3}. {address}  {name}  {} ETH",
                    index + 1,
                    format_ether(amount)
                )?;
            }
        }
        Ok(())
    }
}

pub fn render_errors(errors: &[String]) -> String {
    ErrorList(errors).to_string()
}

pub fn render_recipients(recipients: &[Recipient]) -> String {
    RecipientTable(recipients).to_string()
}

pub fn render_summary(summary: &PaymentSummary) -> String {
    SummaryView(summary).to_string()
}

pub fn render_draft(draft: &PaymentDraft) -> String {
    [
        render_errors(draft.errors()),
        render_recipients(draft.recipients()),
        render_summary(&draft.summary()),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_history(batches: &[PaymentBatch]) -> String {
    HistoryView(batches).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1Ab21";

    #[test]
    fn address_is_shortened() {
        assert_eq!(short_address(ALICE), "0x742d...Ab21");
        assert_eq!(short_address("0x123"), "0x123");
    }

    #[test]
    fn errors_are_capped() {
        let errors: Vec<String> = (1..=7).map(|i| format!("Row {i}: Invalid Ethereum address")).collect();
        let rendered = render_errors(&errors);
        assert!(rendered.starts_with("Validation Errors\n"));
        assert!(rendered.contains("Row 5:"));
        assert!(!rendered.contains("Row 6:"));
        assert!(rendered.ends_with("...and 2 more errors\n"));
        assert_eq!(render_errors(&[]), "");
    }

    #[test]
    fn summary_uses_four_decimals() {
        let draft = {
            let mut draft = PaymentDraft::default();
            draft.apply_parsed(parse_csv_bytes(SAMPLE_CSV.as_bytes()));
            draft
        };
        let rendered = render_summary(&draft.summary());
        assert!(rendered.contains("Recipients            3\n"));
        assert!(rendered.contains("Subtotal              0.8500 ETH\n"));
        assert!(rendered.contains("Protocol Fee (0.5%)   0.0043 ETH\n"));
        assert!(rendered.contains("Total Required        0.8543 ETH\n"));
    }

    #[test]
    fn table_shows_reason_for_invalid_rows() {
        let mut draft = PaymentDraft::default();
        draft.apply_parsed(parse_csv_bytes(format!("{ALICE},Alice,1\n0x123,Bad,1\n").as_bytes()));
        let rendered = render_recipients(draft.recipients());
        assert!(rendered.starts_with("2 recipients, 1 valid, 1 invalid\n"));
        assert!(rendered.contains("0x742d...Ab21"));
        assert!(rendered.contains("Invalid address"));
        assert!(rendered.contains("OK"));
    }

    #[test]
    fn empty_history() {
        assert_eq!(render_history(&[]), "No payments yet\n");
    }

    #[test]
    fn history_is_numbered_down_in_given_order() {
        let batch = |timestamp: u64| {
            PaymentBatch::builder()
                .recipients(vec![ALICE.parse().unwrap()])
                .amounts(vec![parse_ether("0.5").unwrap()])
                .names(vec!["Alice".to_owned()])
                .timestamp(timestamp)
                .build()
        };
        let rendered = render_history(&[batch(0), batch(1_700_000_000)]);
        assert!(rendered.starts_with("Your Payments (2)\n"));
        let first = rendered.find("Batch Payment #2  1970-01-01").unwrap();
        let last = rendered.find("Batch Payment #1  2023-11-14").unwrap();
        assert!(first < last);
        let alice: EthAccountId = ALICE.parse().unwrap();
        assert!(rendered.contains(&format!("1. {alice}  Alice  0.5 ETH")));
    }

    #[test]
    fn draft_sections_are_separated_by_blank_lines() {
        let mut draft = PaymentDraft::default();
        draft.apply_parsed(parse_csv_bytes(format!("{ALICE},Alice,1\n0x123,Bad,1\n").as_bytes()));
        let rendered = render_draft(&draft);
        assert!(rendered.starts_with("Validation Errors\n  - Row 2: Invalid Ethereum address\n\n2 recipients"));
        assert!(rendered.contains("\n\nRecipients            1\n"));
    }
}
