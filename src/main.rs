use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use cups_lp::{config, LpClient, PrintParams, QueueFilter};
use log::{debug, LevelFilter};
use serde::Serialize;

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_builder = colog::default_builder();
    if cli.verbose {
        log_builder.filter_level(LevelFilter::Debug);
    }
    log_builder.init();

    let settings = config::loading::load_config()?;
    debug!("Using tools {:?}", settings.tools);
    let client = LpClient::new(settings.tools);

    match cli.command {
        Commands::Queue { completed, printers } => {
            let filter = if completed { QueueFilter::Completed } else { QueueFilter::NotCompleted };
            print_json(&client.queue(filter, &printers).await?)
        }
        Commands::Printers => print_json(&client.printer_names().await?),
        Commands::Options { printer: Some(printer) } => print_json(&client.printer_options(&printer).await?),
        Commands::Options { printer: None } => print_json(&client.all_printer_options().await?),
        Commands::Print { file, printer, copies, priority, pages, options } => {
            let params = PrintParams { printer, copies, priority, pages, printer_options: options };
            let result = match file {
                Some(file) => client.print_file(&file, &params).await?,
                None => {
                    let mut data = Vec::new();
                    std::io::stdin().read_to_end(&mut data).context("Could not read document from stdin")?;
                    client.print_buffer(&data, &params).await?
                }
            };
            print_json(&result)
        }
        Commands::Cancel { all: Some(printer), .. } => Ok(client.cancel_all_jobs(printer.as_deref()).await?),
        Commands::Cancel { request_id: Some(request_id), all: None } => Ok(client.cancel_job(&request_id).await?),
        Commands::Cancel { request_id: None, all: None } => bail!("Nothing to cancel, pass a request id or --all"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
