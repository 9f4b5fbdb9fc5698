//! Thin async wrapper around the CUPS command line tools.
//!
//! [`LpClient`] lists queues, printers and printer options, and submits and
//! cancels jobs, by running `lpstat`, `lpoptions`, `lp` and `cancel` and
//! parsing what they print.

pub mod config;
pub mod lp_client;
pub mod process;

pub use lp_client::client::{LpClient, LpClientError};
pub use lp_client::models::{PrintParams, PrintResult, PrinterOptionSet, PrinterOptions, QueueEntry, QueueFilter};
