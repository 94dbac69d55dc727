use crate::prelude::*;

use std::process::ExitCode;

fn print_call_json(draft: &PaymentDraft) -> Result<(), CliError> {
    let call = draft.batch_call().map_err(Error::from)?;
    let json = serde_json::to_string_pretty(&call).map_err(|e| CliError::Serialize {
        underlying: e.to_string(),
    })?;
    println!("{json}");
    Ok(())
}

fn print_draft(draft: &PaymentDraft, json: bool) -> Result<(), CliError> {
    if json {
        print_call_json(draft)
    } else {
        print!("{}", render_draft(draft));
        Ok(())
    }
}

async fn run_preview(args: PreviewArgs) -> Result<(), CliError> {
    let json = args.json;
    let draft = build_draft(&DraftSource::from(args)).await?;
    print_draft(&draft, json)
}

async fn run_manual(args: DraftArgs) -> Result<(), CliError> {
    let json = args.json;
    let source = DraftSource::try_from(args)?;
    let draft = build_draft(&source).await?;
    print_draft(&draft, json)
}

async fn run_pay(args: PayArgs) -> Result<(), CliError> {
    let request = PayRequest::try_from(args)?;
    let draft = build_draft(&request.source).await?;
    print_draft(&draft, request.json)?;

    if request.dry_run {
        match draft.batch_call().map_err(Error::from)? {
            Some(call) => println!(
                "\nWould send {} wei to {} with calldata 0x{}",
                call.value(),
                request.parameters.contract_address(),
                hex::encode(call.calldata())
            ),
            None => warn!("Nothing to send, no valid recipients"),
        }
        return Ok(());
    }

    let parameters = &request.parameters;
    let contract = JsonRpcBatchPay::from_parameters(parameters)?;
    let tx_hash = submit_batch(&contract, parameters, &draft).await?;
    println!("Transaction hash: {tx_hash}");

    if request.wait {
        let block_number = wait_for_confirmation(
            &contract,
            &tx_hash,
            *parameters.receipt_poll_interval(),
            *parameters.max_receipt_polls(),
        )
        .await?;
        println!("Confirmed in block {block_number}");
    }
    Ok(())
}

async fn run_history(args: HistoryArgs) -> Result<(), CliError> {
    let request = HistoryRequest::try_from(args)?;
    let contract = JsonRpcBatchPay::from_parameters(&request.parameters)?;
    let batches = fetch_history(&contract, request.account).await?;
    print!("{}", render_history(&batches));
    Ok(())
}

async fn run_sample(args: SampleArgs) -> Result<(), CliError> {
    let Some(path) = args.output else {
        print!("{SAMPLE_CSV}");
        return Ok(());
    };
    tokio::fs::write(&path, SAMPLE_CSV)
        .await
        .map_err(|e| CliError::WriteFailed {
            path: path.display().to_string(),
            underlying: e.to_string(),
        })?;
    info!("Wrote sample recipients to {}", path.display());
    Ok(())
}

async fn run_subcommand(command: Command) -> Result<(), CliError> {
    match command {
        Command::Preview(args) => run_preview(args).await,
        Command::Manual(args) => run_manual(args).await,
        Command::Pay(args) => run_pay(args).await,
        Command::History(args) => run_history(args).await,
        Command::Sample(args) => run_sample(args).await,
    }
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    match run_subcommand(cli_args.command).await {
        Ok(_) => {
            debug!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}
