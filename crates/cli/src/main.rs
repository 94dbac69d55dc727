mod logic;
mod models;

mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    pub use batchpay_core::prelude::*;
}

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    use clap::Parser as _;
    use prelude::*;

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }
    let cli_args = CliArgs::parse();
    run(cli_args).await
}
