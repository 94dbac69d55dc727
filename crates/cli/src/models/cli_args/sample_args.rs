use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// File to write, printed to stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
