use crate::prelude::*;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
pub struct PayArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    #[command(flatten)]
    pub network: NetworkArgs,

    /// Account the node signs for. Without it the payment is refused.
    #[arg(long)]
    pub from: Option<String>,

    /// Only print the transaction that would be sent.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Return right after broadcasting instead of waiting for the receipt.
    #[arg(long, default_value_t = false)]
    pub no_wait: bool,

    /// Seconds between receipt polls.
    #[arg(long, default_value_t = DEFAULT_RECEIPT_POLL_INTERVAL.as_secs())]
    pub poll_interval_secs: u64,

    /// Receipt polls before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_RECEIPT_POLLS)]
    pub max_polls: usize,
}

/// Everything `pay` needs, validated.
#[derive(Debug)]
pub struct PayRequest {
    pub source: DraftSource,
    pub parameters: BatchPayParameters,
    pub json: bool,
    pub dry_run: bool,
    pub wait: bool,
}

impl TryFrom<PayArgs> for PayRequest {
    type Error = InvalidCliArgs;

    fn try_from(args: PayArgs) -> Result<Self, Self::Error> {
        if args.max_polls == 0 {
            return Err(InvalidCliArgs::MaxPollsCannotBeZero);
        }
        let json = args.draft.json;
        let source = DraftSource::try_from(args.draft)?;
        let parameters = BatchPayParameters::try_from(NetworkRequest {
            network: args.network,
            sender: args.from,
            receipt_poll_interval: Some(Duration::from_secs(args.poll_interval_secs)),
            max_receipt_polls: Some(args.max_polls),
        })?;
        Ok(Self {
            source,
            parameters,
            json,
            dry_run: args.dry_run,
            wait: !args.no_wait,
        })
    }
}
