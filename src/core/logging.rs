//! Logging collaborator for command execution.

use crate::utils::command::CapturedOutput;

/// Receives one record per executed command.
///
/// Injected into `CommandExecutor`; format and transport are up to the
/// implementation.
pub trait BuildLogger: Send + Sync {
    fn log_command(&self, command: &str, success: bool, output: &CapturedOutput);
}

/// Discards all records. Useful for tests and embedding.
pub struct NullLogger;

impl BuildLogger for NullLogger {
    fn log_command(&self, _command: &str, _success: bool, _output: &CapturedOutput) {}
}

/// Emits prefixed status lines to stderr when stderr is a terminal.
pub struct StatusLogger;

impl BuildLogger for StatusLogger {
    fn log_command(&self, command: &str, success: bool, output: &CapturedOutput) {
        if success {
            crate::log_status!("exec", "{}", command);
        } else {
            crate::log_status!("exec", "{} failed: {}", command, output.error_text());
        }
    }
}
