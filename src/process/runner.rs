use std::{ffi::OsStr, fmt::Debug, io, process::{ExitStatus, Stdio}};

use log::{debug, warn};
use snafu::{ResultExt, Snafu};
use tokio::{io::AsyncWriteExt, process::Command};

/// Everything a finished child process wrote, decoded lossily as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args` to completion and capture its output.
///
/// # Arguments
///
/// * `program`: Executable name (looked up in `PATH`) or path
/// * `args`: Arguments, passed verbatim
/// * `input`: Optional payload written to stdin; stdin is closed right after
///
/// returns: Result<CommandOutput, ExecutionError>
///
/// A nonzero exit status always yields [`ExecutionError::Failed`] carrying the
/// captured stderr, even when the child already printed something to stdout.
pub async fn run<S>(program: &str, args: &[S], input: Option<&[u8]>) -> Result<CommandOutput, ExecutionError>
where
    S: AsRef<OsStr> + Debug,
{
    debug!("Running {} {:?}", program, args);

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .context(SpawnSnafu { program })?;

    // Feed stdin while the output pipes are drained, otherwise a child that
    // writes a lot before reading everything would block us both.
    let stdin = child.stdin.take();
    let write_input = async move {
        if let (Some(mut stdin), Some(data)) = (stdin, input) {
            stdin.write_all(data).await?;
            drop(stdin);
        }
        Ok::<(), io::Error>(())
    };
    let (written, output) = tokio::join!(write_input, child.wait_with_output());
    let output = output.context(CollectSnafu { program })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        warn!("{} exited with {}: {}", program, output.status, stderr.trim_end());
        return FailedSnafu { program, status: output.status, stderr }.fail();
    }

    // The child may legitimately stop reading early and still succeed.
    match written {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e).context(WriteInputSnafu { program }),
        _ => Ok(CommandOutput { stdout, stderr }),
    }
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum ExecutionError {
    #[snafu(display("Could not launch '{program}'"))]
    Spawn { program: String, source: io::Error },

    #[snafu(display("Could not write input to '{program}'"))]
    WriteInput { program: String, source: io::Error },

    #[snafu(display("Could not collect output of '{program}'"))]
    Collect { program: String, source: io::Error },

    #[snafu(display("'{program}' failed ({status}): {}", stderr.trim_end()))]
    Failed { program: String, status: ExitStatus, stderr: String },
}

impl ExecutionError {
    /// Error text the tool printed before exiting with a nonzero status.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ExecutionError::Failed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
