use std::num::NonZeroU32;

use serde_derive::{Deserialize, Serialize};

// ///// //
// Queue //
// ///// //

/// One pending or completed job as listed by `lpstat -W`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// `<printer_name>-<job_id>`, the id `lp` handed out.
    pub request_id: String,
    pub printer_name: String,
    pub job_id: String,
    pub user: String,
    pub size: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueFilter {
    Completed,
    NotCompleted,
}

impl QueueFilter {
    pub fn as_arg(&self) -> &'static str {
        match self {
            QueueFilter::Completed => "completed",
            QueueFilter::NotCompleted => "not-completed",
        }
    }
}

// //////// //
// Printers //
// //////// //

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterOptionSet {
    pub name: String,
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterOptions {
    pub printer_name: String,
    pub options: Vec<PrinterOptionSet>,
}

// ///////// //
// Print job //
// ///////// //

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintParams {
    pub printer: Option<String>,
    pub copies: Option<NonZeroU32>,
    pub priority: Option<i32>,
    /// Page ranges in `lp -P` syntax, e.g. `1-3,7`.
    pub pages: Option<String>,
    /// Driver options, each sent as `-o key=value` in this order. `lp` applies
    /// them in sequence, so a later option overrides an earlier one.
    #[serde(default)]
    pub printer_options: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResult {
    pub raw_output: String,
    /// `None` when the confirmation did not look like `request id is <id> (...)`.
    pub request_id: Option<String>,
}
