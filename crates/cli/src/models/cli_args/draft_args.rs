use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

const ENTRY_SEPARATOR: char = ',';

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Recipients file: one `address,name,amount` row per line, no header.
    pub file: PathBuf,

    /// Print the contract call arguments as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DraftArgs {
    /// Recipients file loaded before any `--entry`.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Recipient as `address,name,amount`, the name may be left empty.
    /// Can be repeated.
    #[arg(long = "entry")]
    pub entries: Vec<String>,

    /// Row number (as shown in the table, starting at 1) to drop after all
    /// entries are added. Can be repeated.
    #[arg(long = "remove")]
    pub removals: Vec<usize>,

    /// Print the contract call arguments as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Where the recipients of one run come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftSource {
    pub file: Option<PathBuf>,
    pub entries: Vec<ManualEntry>,
    /// One-based row numbers.
    pub removals: Vec<usize>,
}

/// Splits `address,name,amount` into a [`ManualEntry`]. Fields are kept
/// as typed, validation happens when the entry is added.
pub fn parse_entry(raw: &str) -> Result<ManualEntry, InvalidCliArgs> {
    let fields: Vec<&str> = raw.split(ENTRY_SEPARATOR).collect();
    let [address, name, amount] = fields.as_slice() else {
        return Err(InvalidCliArgs::EntryMalformed {
            bad_value: raw.to_owned(),
        });
    };
    Ok(ManualEntry::builder()
        .address(*address)
        .name(*name)
        .amount(*amount)
        .build())
}

impl From<PreviewArgs> for DraftSource {
    fn from(args: PreviewArgs) -> Self {
        Self {
            file: Some(args.file),
            ..Default::default()
        }
    }
}

impl TryFrom<DraftArgs> for DraftSource {
    type Error = InvalidCliArgs;

    fn try_from(args: DraftArgs) -> Result<Self, Self::Error> {
        if args.file.is_none() && args.entries.is_empty() {
            return Err(InvalidCliArgs::NoRecipientsGiven);
        }
        if args.removals.contains(&0) {
            return Err(InvalidCliArgs::RowNumberMustBePositive);
        }
        let entries = args
            .entries
            .iter()
            .map(|raw| parse_entry(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            file: args.file,
            entries,
            removals: args.removals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1Ab21";

    fn draft_args(entries: &[&str], removals: &[usize]) -> DraftArgs {
        DraftArgs {
            file: None,
            entries: entries.iter().map(|e| e.to_string()).collect(),
            removals: removals.to_vec(),
            json: false,
        }
    }

    #[test]
    fn entry_with_empty_name() {
        let entry = parse_entry(&format!("{ALICE},,0.5")).unwrap();
        assert_eq!(entry.address(), ALICE);
        assert_eq!(entry.name(), "");
        assert_eq!(entry.amount(), "0.5");
    }

    #[test]
    fn entry_needs_three_fields() {
        assert!(matches!(
            parse_entry(&format!("{ALICE},0.5")),
            Err(InvalidCliArgs::EntryMalformed { .. })
        ));
        assert!(matches!(
            parse_entry(&format!("{ALICE},a,b,0.5")),
            Err(InvalidCliArgs::EntryMalformed { .. })
        ));
    }

    #[test]
    fn nothing_to_load_is_rejected() {
        assert!(matches!(
            DraftSource::try_from(draft_args(&[], &[])),
            Err(InvalidCliArgs::NoRecipientsGiven)
        ));
    }

    #[test]
    fn row_zero_is_rejected() {
        let entry = format!("{ALICE},a,1");
        assert!(matches!(
            DraftSource::try_from(draft_args(&[&entry], &[0])),
            Err(InvalidCliArgs::RowNumberMustBePositive)
        ));
    }

    #[test]
    fn entries_keep_order() {
        let first = format!("{ALICE},a,1");
        let second = format!("{ALICE},b,2");
        let source = DraftSource::try_from(draft_args(&[&first, &second], &[2])).unwrap();
        let names: Vec<_> = source.entries.iter().map(|e| e.name().as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(source.removals, vec![2]);
    }
}
