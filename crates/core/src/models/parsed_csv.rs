use crate::prelude::*;

/// Outcome of one tabular ingestion pass.
///
/// Recipients and errors are both in row order. `is_valid` holds iff there
/// are no errors and at least one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, CopyGetters)]
pub struct ParsedCsv {
    #[getset(get = "pub")]
    recipients: Vec<Recipient>,

    #[getset(get = "pub")]
    errors: Vec<String>,

    #[getset(get_copy = "pub")]
    is_valid: bool,
}

impl ParsedCsv {
    pub fn new(recipients: Vec<Recipient>, errors: Vec<String>) -> Self {
        let is_valid = errors.is_empty() && !recipients.is_empty();
        Self {
            recipients,
            errors,
            is_valid,
        }
    }

    /// A whole-file failure: no recipients and a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(Vec::new(), vec![message.into()])
    }

    pub fn into_parts(self) -> (Vec<Recipient>, Vec<String>) {
        (self.recipients, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_invalid() {
        assert!(!ParsedCsv::new(Vec::new(), Vec::new()).is_valid());
    }

    #[test]
    fn failure_has_single_error() {
        let parsed = ParsedCsv::failure(NOT_A_CSV_FILE);
        assert!(!parsed.is_valid());
        assert!(parsed.recipients().is_empty());
        assert_eq!(parsed.errors(), &vec![NOT_A_CSV_FILE.to_owned()]);
    }
}
