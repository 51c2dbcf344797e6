//! Captured process output primitive.

use serde::Serialize;

/// Captured output from command execution.
/// Reusable primitive for any component that executes external processes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CapturedOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: String, stderr: String) -> Self {
        Self { stdout, stderr }
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }

    /// Extract error text, preferring stderr and falling back to stdout.
    pub fn error_text(&self) -> &str {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            stderr
        } else {
            self.stdout.trim()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_prefers_stderr() {
        let output = CapturedOutput::new("stdout content".to_string(), "stderr content".to_string());
        assert_eq!(output.error_text(), "stderr content");
    }

    #[test]
    fn error_text_falls_back_to_stdout() {
        let output = CapturedOutput::new("stdout content".to_string(), String::new());
        assert_eq!(output.error_text(), "stdout content");
    }

    #[test]
    fn default_is_empty() {
        assert!(CapturedOutput::default().is_empty());
    }
}
