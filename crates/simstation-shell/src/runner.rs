//! Child process execution with concurrent output draining

use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::descriptor::CommandDescriptor;
use simstation_core::prelude::*;

/// Raw result of a completed child process.
#[derive(Debug)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub status: ExitStatus,
}

impl ProcessOutput {
    /// Stdout as text, lossily decoded.
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Launch the descriptor and return its standard output.
///
/// Both output pipes are drained by independent tasks started before
/// waiting on exit. The order is load-bearing: a child that fills one
/// pipe's kernel buffer blocks writing until someone reads it, so
/// reading the streams sequentially (or after `wait`) deadlocks for any
/// output larger than the pipe buffer.
///
/// Any non-empty stderr fails the command with the stderr text, even on
/// a zero exit status. The native tool writes many of its failure
/// diagnostics to stderr while exiting zero.
pub async fn run_descriptor(descriptor: &CommandDescriptor) -> Result<ProcessOutput> {
    debug!(
        "Running: {} {}",
        descriptor.program(),
        descriptor.arguments().join(" ")
    );

    let mut child = Command::new(descriptor.program())
        .args(descriptor.arguments())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::process_launch(format!("{}: {}", descriptor.program(), e)))?;

    let stdout = child.stdout.take().expect("stdout was configured");
    let stderr = child.stderr.take().expect("stderr was configured");

    // Both drains must be in flight before the exit wait below.
    let stdout_task = drain(stdout);
    let stderr_task = drain(stderr);

    let status = child.wait().await?;

    let stdout = join_drain(stdout_task).await?;
    let stderr = join_drain(stderr_task).await?;

    if !stderr.is_empty() {
        let message = String::from_utf8_lossy(&stderr).into_owned();
        warn!(
            "stderr from {}: {}",
            descriptor.program(),
            message.trim_end()
        );
        return Err(Error::ProcessStderr { message });
    }

    trace!(
        "{} exited {:?}, {} stdout bytes",
        descriptor.program(),
        status.code(),
        stdout.len()
    );

    Ok(ProcessOutput { stdout, status })
}

/// Read a pipe to EOF on its own task so the other pipe cannot stall it.
fn drain<R>(mut reader: R) -> JoinHandle<std::io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer).await?;
        Ok(buffer)
    })
}

async fn join_drain(task: JoinHandle<std::io::Result<Vec<u8>>>) -> Result<Vec<u8>> {
    match task.await {
        Ok(result) => Ok(result?),
        Err(e) => Err(Error::process_launch(format!(
            "output drain task failed: {e}"
        ))),
    }
}
