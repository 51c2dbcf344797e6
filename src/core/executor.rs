//! Shell command execution with deadlock-free output capture.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use crate::error::{Error, Result};
use crate::locator::BinaryLocator;
use crate::logging::BuildLogger;
use crate::utils::command::CapturedOutput;
use crate::utils::template;

/// Executes rendered command templates via the shell, retaining the captured
/// output of the most recent invocation only.
pub struct CommandExecutor {
    logger: Arc<dyn BuildLogger>,
    locator: BinaryLocator,
    last: CapturedOutput,
}

impl CommandExecutor {
    pub fn new(logger: Arc<dyn BuildLogger>, root_dir: impl Into<PathBuf>) -> Self {
        Self::with_locator(logger, BinaryLocator::new(root_dir))
    }

    pub fn with_locator(logger: Arc<dyn BuildLogger>, locator: BinaryLocator) -> Self {
        Self {
            logger,
            locator,
            last: CapturedOutput::default(),
        }
    }

    /// Render a command template and execute it via the shell.
    ///
    /// Returns whether the process exited successfully; a non-zero exit is a
    /// result, not an error. Only failure to invoke the shell itself errors.
    /// The previous invocation's captured output is discarded up front.
    pub fn execute(&mut self, template_parts: &[&str]) -> Result<bool> {
        self.last = CapturedOutput::default();
        let command = template::render_command(template_parts)?;

        let mut child = shell_command(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::ProcessSpawn(format!("{}: {}", command, e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::ProcessSpawn("child stdout pipe missing".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::ProcessSpawn("child stderr pipe missing".to_string()))?;

        // Drain both pipes on their own threads. Reading one pipe to
        // completion while the other fills its OS buffer blocks the child,
        // which in turn blocks the read: the classic pipe deadlock.
        let stdout_reader = thread::spawn(move || drain(stdout));
        let stderr_reader = thread::spawn(move || drain(stderr));

        let stdout_bytes = stdout_reader
            .join()
            .map_err(|_| Error::ProcessSpawn("stdout reader panicked".to_string()))??;
        let stderr_bytes = stderr_reader
            .join()
            .map_err(|_| Error::ProcessSpawn("stderr reader panicked".to_string()))??;

        // Both streams hit end-of-stream before the wait, so trailing output
        // written just before exit is never lost.
        let status = child
            .wait()
            .map_err(|e| Error::ProcessSpawn(format!("{}: {}", command, e)))?;

        self.last = CapturedOutput::new(
            String::from_utf8_lossy(&stdout_bytes).to_string(),
            String::from_utf8_lossy(&stderr_bytes).to_string(),
        );

        let success = status.success();
        self.logger.log_command(&command, success, &self.last);
        Ok(success)
    }

    /// Captured stdout of the most recent `execute` call.
    pub fn last_output(&self) -> &str {
        &self.last.stdout
    }

    /// Captured stderr of the most recent `execute` call.
    pub fn last_error(&self) -> &str {
        &self.last.stderr
    }

    /// Resolve an executable through this executor's locator.
    pub fn find_binary(&self, binary: &str, quiet: bool) -> Result<Option<PathBuf>> {
        self.locator.find(binary, quiet)
    }
}

fn drain(mut stream: impl Read) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(buf)
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
