use crate::prelude::*;

use std::path::Path;

/// Lower-cased addresses seen so far in one ingestion pass.
///
/// An address is recorded on its first sighting whether or not that row was
/// valid, so every later repeat is flagged as a duplicate.
#[derive(Debug, Clone, Default)]
pub struct SeenAddresses(IndexSet<String>);

impl SeenAddresses {
    /// Returns `true` the first time an address (ignoring case) is offered.
    pub fn first_sighting(&mut self, address: &str) -> bool {
        self.0.insert(address.to_lowercase())
    }

    pub fn distinct_count(&self) -> usize {
        self.0.len()
    }
}

/// Reads a recipients file and validates it.
///
/// Never fails: a wrong extension, an unreadable file, or a malformed
/// document all come back as a [`ParsedCsv`] holding a single error.
pub async fn parse_csv_file(path: impl AsRef<Path>) -> ParsedCsv {
    let path = path.as_ref();
    if !has_csv_extension(path) {
        warn!("Refusing {}: not a {CSV_EXTENSION} file", path.display());
        return ParsedCsv::failure(NOT_A_CSV_FILE);
    }

    info!("Parsing recipients from {}", path.display());
    match tokio::fs::read(path).await {
        Ok(bytes) => parse_csv_bytes(&bytes),
        Err(e) => {
            warn!("Failed to read {}: {e}", path.display());
            ParsedCsv::failure(e.to_string())
        }
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(CSV_EXTENSION))
}

/// Splits raw bytes into rows (no header, blank lines skipped, any number of
/// fields per row) and validates them.
pub fn parse_csv_bytes(bytes: &[u8]) -> ParsedCsv {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    // Fields are decoded lossily so one badly encoded cell cannot sink the file.
    let rows = reader
        .byte_records()
        .map(|record| {
            record.map(|r| {
                r.iter()
                    .map(|field| String::from_utf8_lossy(field).into_owned())
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Result<Vec<_>, csv::Error>>();

    match rows {
        Ok(rows) => validate_rows(&rows),
        Err(e) => {
            warn!("CSV parser failed: {e}");
            ParsedCsv::failure(e.to_string())
        }
    }
}

/// Validates already split rows of `address,name,amount`.
///
/// Pure: the same rows always give the same result.
pub fn validate_rows(rows: &[Vec<String>]) -> ParsedCsv {
    let mut errors = Vec::new();
    if rows.len() > MAX_RECIPIENTS {
        warn!(
            "{} rows uploaded, only the first {MAX_RECIPIENTS} are processed",
            rows.len()
        );
        errors.push(format!(
            "Too many recipients. Maximum allowed is {MAX_RECIPIENTS}"
        ));
    }

    let mut seen = SeenAddresses::default();
    let recipients = rows
        .iter()
        .take(MAX_RECIPIENTS)
        .enumerate()
        .filter_map(|(index, row)| validate_row(index + 1, row, &mut seen, &mut errors))
        .collect::<Vec<_>>();

    debug!(
        "Validated {} recipients ({} distinct addresses), {} errors",
        recipients.len(),
        seen.distinct_count(),
        errors.len()
    );
    ParsedCsv::new(recipients, errors)
}

/// Checks run in a fixed order (address, duplicate, amount); each failure
/// appends its own message while the stored reason is the last one hit.
fn validate_row(
    row_number: usize,
    row: &[String],
    seen: &mut SeenAddresses,
    errors: &mut Vec<String>,
) -> Option<Recipient> {
    let [address, name, amount, ..] = row else {
        errors.push(format!(
            "Row {row_number}: Invalid format. Expected: address,name,amount"
        ));
        return None;
    };
    let (address, name, amount) = (address.trim(), name.trim(), amount.trim());
    let name = if name.is_empty() {
        UNKNOWN_RECIPIENT_NAME
    } else {
        name
    };
    let mut recipient = Recipient::unchecked(address, name, amount);

    if !is_address(address) {
        recipient.invalidate(RecipientError::InvalidAddress);
        errors.push(format!("Row {row_number}: Invalid Ethereum address"));
    }

    if !seen.first_sighting(address) {
        recipient.invalidate(RecipientError::DuplicateAddress);
        errors.push(format!("Row {row_number}: Duplicate address"));
    }

    let is_positive = parse_leading_decimal(amount).is_some_and(|v| v.is_finite() && v > 0.0);
    if !is_positive {
        recipient.invalidate(RecipientError::InvalidAmount);
        errors.push(format!("Row {row_number}: Amount must be a positive number"));
    } else {
        match parse_ether(amount) {
            Ok(amount_wei) => recipient.set_amount_wei(amount_wei),
            Err(e) => {
                debug!("Row {row_number}: {e}");
                recipient.invalidate(RecipientError::AmountParsingFailed);
                errors.push(format!("Row {row_number}: Could not parse amount"));
            }
        }
    }

    Some(recipient)
}
