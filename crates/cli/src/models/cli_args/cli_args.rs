use crate::prelude::*;
use clap::{Parser, Subcommand};

pub const BINARY_NAME: &str = "batchpay";

#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, about = "Build, check and submit batched payments to the BatchPay contract.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a recipients file and show the resulting batch.
    Preview(PreviewArgs),

    /// Build a batch from hand-typed entries, optionally on top of a file.
    Manual(DraftArgs),

    /// Submit the valid recipients of a batch as one transaction.
    Pay(PayArgs),

    /// List the batches previously sent by an account.
    History(HistoryArgs),

    /// Write the sample recipients file.
    Sample(SampleArgs),
}
