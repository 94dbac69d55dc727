use crate::prelude::*;

/// Loads the file (if any), appends the manual entries, then drops the
/// requested rows. Removals are applied highest row first so that earlier
/// row numbers keep pointing at the rows shown to the user.
pub async fn build_draft(source: &DraftSource) -> Result<PaymentDraft, CliError> {
    let mut draft = PaymentDraft::default();
    if let Some(file) = &source.file {
        draft.apply_parsed(parse_csv_file(file).await);
    }
    for entry in &source.entries {
        if draft.add_manual(entry).is_none() {
            warn!("Skipping incomplete entry {entry:?}");
        }
    }

    let mut removals = source.removals.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for row in removals {
        let len = draft.recipients().len();
        let removed = row
            .checked_sub(1)
            .and_then(|index| draft.remove(index))
            .ok_or(CliError::NoSuchRow { row, len })?;
        info!("Removed row {row} ({})", removed.address());
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1Ab21";
    const BOB: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    fn source(entries: &[(&str, &str)], removals: &[usize]) -> DraftSource {
        DraftSource {
            file: None,
            entries: entries
                .iter()
                .map(|(address, amount)| {
                    ManualEntry::builder().address(*address).amount(*amount).build()
                })
                .collect(),
            removals: removals.to_vec(),
        }
    }

    #[tokio::test]
    async fn entries_are_appended_in_order() {
        let draft = build_draft(&source(&[(ALICE, "1"), (BOB, "2")], &[]))
            .await
            .unwrap();
        let names: Vec<_> = draft.recipients().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Recipient 1", "Recipient 2"]);
    }

    #[tokio::test]
    async fn removals_use_displayed_row_numbers() {
        let draft = build_draft(&source(&[(ALICE, "1"), (BOB, "2"), (ALICE, "3")], &[1, 3]))
            .await
            .unwrap();
        assert_eq!(draft.recipients().len(), 1);
        assert_eq!(draft.recipients()[0].address(), BOB);
    }

    #[tokio::test]
    async fn removing_missing_row_fails() {
        let result = build_draft(&source(&[(ALICE, "1")], &[2])).await;
        assert!(matches!(result, Err(CliError::NoSuchRow { row: 2, len: 1 })));
    }

    #[tokio::test]
    async fn wrong_file_type_becomes_an_upload_error() {
        let source = DraftSource {
            file: Some("recipients.txt".into()),
            ..source(&[(ALICE, "1")], &[])
        };
        let draft = build_draft(&source).await.unwrap();
        assert_eq!(draft.errors(), &vec![NOT_A_CSV_FILE.to_owned()]);
        assert_eq!(draft.recipients().len(), 1);
    }
}
