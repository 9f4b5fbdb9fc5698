use std::{ffi::{OsStr, OsString}, fmt::Debug, path::Path, sync::Arc};

use log::debug;
use snafu::{ResultExt, Snafu};
use tokio::task::{JoinError, JoinSet};

use crate::config::models::Tools;
use crate::process::runner::{self, ExecutionError};

use super::args::{build_cancel_args, build_options_args, build_print_args, build_queue_args};
use super::models::{PrintParams, PrintResult, PrinterOptionSet, PrinterOptions, QueueEntry, QueueFilter};
use super::parsing::{parse_names, parse_options, parse_queue, parse_submission};

/// Talks to CUPS through `lpstat`, `lpoptions`, `lp` and `cancel`.
///
/// Every call spawns the tool afresh; nothing is cached between calls.
/// Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct LpClient {
    tools: Arc<Tools>,
}

impl LpClient {
    pub fn new(tools: Tools) -> Self {
        Self { tools: Arc::new(tools) }
    }

    // ///// //
    // Queue //
    // ///// //

    pub async fn queue(&self, filter: QueueFilter, printers: &[String]) -> Result<Vec<QueueEntry>, LpClientError> {
        let output = runner::run(&self.tools.lpstat, &build_queue_args(filter, printers), None).await?;
        Ok(parse_queue(&output.stdout))
    }

    pub async fn completed_queue(&self, printers: &[String]) -> Result<Vec<QueueEntry>, LpClientError> {
        self.queue(QueueFilter::Completed, printers).await
    }

    pub async fn not_completed_queue(&self, printers: &[String]) -> Result<Vec<QueueEntry>, LpClientError> {
        self.queue(QueueFilter::NotCompleted, printers).await
    }

    // //////// //
    // Printers //
    // //////// //

    pub async fn printer_names(&self) -> Result<Vec<String>, LpClientError> {
        let output = runner::run(&self.tools.lpstat, &["-p"], None).await?;
        Ok(parse_names(&output.stdout))
    }

    pub async fn printer_options(&self, printer: &str) -> Result<Vec<PrinterOptionSet>, LpClientError> {
        let output = runner::run(&self.tools.lpoptions, &build_options_args(printer), None).await?;
        Ok(parse_options(&output.stdout))
    }

    /// Options of every printer `lpstat -p` knows about, in that order.
    ///
    /// The per-printer lookups run concurrently. The first failing lookup fails
    /// the whole call and aborts the ones still running.
    pub async fn all_printer_options(&self) -> Result<Vec<PrinterOptions>, LpClientError> {
        let names = self.printer_names().await?;
        debug!("Fetching options for {} printers", names.len());

        let mut tasks = JoinSet::new();
        for (index, printer_name) in names.into_iter().enumerate() {
            let client = self.clone();
            tasks.spawn(async move {
                let options = client.printer_options(&printer_name).await;
                (index, printer_name, options)
            });
        }

        let mut results: Vec<Option<PrinterOptions>> = vec![None; tasks.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, printer_name, options) = joined.context(OptionTaskSnafu)?;
            results[index] = Some(PrinterOptions { printer_name, options: options? });
        }

        Ok(results.into_iter().flatten().collect())
    }

    // ///////// //
    // Print job //
    // ///////// //

    /// Submit `data` as a job, piped to `lp` on stdin.
    pub async fn print_buffer(&self, data: &[u8], params: &PrintParams) -> Result<PrintResult, LpClientError> {
        self.submit(&build_print_args(params), Some(data)).await
    }

    /// Submit the file at `file` as a job.
    pub async fn print_file(&self, file: impl AsRef<Path>, params: &PrintParams) -> Result<PrintResult, LpClientError> {
        let mut args: Vec<OsString> = build_print_args(params).into_iter().map(OsString::from).collect();
        args.push("--".into());
        args.push(file.as_ref().as_os_str().to_owned());
        self.submit(&args, None).await
    }

    async fn submit<S>(&self, args: &[S], input: Option<&[u8]>) -> Result<PrintResult, LpClientError>
    where
        S: AsRef<OsStr> + Debug,
    {
        let output = runner::run(&self.tools.lp, args, input).await?;
        let request_id = parse_submission(&output.stdout);
        if request_id.is_none() {
            debug!("No request id in lp output: {:?}", output.stdout);
        }
        Ok(PrintResult { raw_output: output.stdout, request_id })
    }

    // ////// //
    // Cancel //
    // ////// //

    /// Cancel all jobs on `printer`. Without a printer, `cancel` runs without
    /// arguments and CUPS decides what that means.
    pub async fn cancel_all_jobs(&self, printer: Option<&str>) -> Result<(), LpClientError> {
        runner::run(&self.tools.cancel, &build_cancel_args(printer), None).await?;
        Ok(())
    }

    pub async fn cancel_job(&self, request_id: &str) -> Result<(), LpClientError> {
        runner::run(&self.tools.cancel, &[request_id], None).await?;
        Ok(())
    }
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum LpClientError {
    #[snafu(context(false), display("CUPS command failed"))]
    Execution { source: ExecutionError },

    #[snafu(display("Printer option lookup did not complete"))]
    OptionTask { source: JoinError },
}

impl LpClientError {
    /// Error text printed by the failing tool, if it got as far as running.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            LpClientError::Execution { source } => source.stderr(),
            LpClientError::OptionTask { .. } => None,
        }
    }
}
