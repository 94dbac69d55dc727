use crate::prelude::*;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Account whose past batches to list.
    #[arg(long)]
    pub account: String,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Debug)]
pub struct HistoryRequest {
    pub account: EthAccountId,
    pub parameters: BatchPayParameters,
}

impl TryFrom<HistoryArgs> for HistoryRequest {
    type Error = InvalidCliArgs;

    fn try_from(args: HistoryArgs) -> Result<Self, Self::Error> {
        let account = args
            .account
            .parse::<EthAccountId>()
            .map_err(InvalidCliArgs::AccountAddressInvalid)?;
        let parameters = BatchPayParameters::try_from(NetworkRequest {
            network: args.network,
            sender: None,
            receipt_poll_interval: None,
            max_receipt_polls: None,
        })?;
        Ok(Self {
            account,
            parameters,
        })
    }
}
