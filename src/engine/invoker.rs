// ABOUTME: Process-invoker collaborator: runs the engine binary and captures output.
// ABOUTME: Trait-based so tests and embedders can substitute the transport.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Combined output and status of one engine invocation.
#[derive(Debug, Clone)]
pub struct InvokeOutcome {
    /// Captured stdout followed by stderr. The classification layer only
    /// ever matches fragments, so the interleaving is irrelevant.
    pub output: String,
    /// `None` on a zero exit; otherwise the failure reason (exit status
    /// or launch error).
    pub failure: Option<String>,
}

impl InvokeOutcome {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            failure: None,
        }
    }

    pub fn failed(output: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            failure: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Executes one engine command to completion.
///
/// Implementations must capture stdout and stderr into a single text and
/// report non-zero exit or launch failure through
/// [`InvokeOutcome::failure`]. No timeout is imposed at this layer; a
/// hanging engine hangs the operation.
#[async_trait]
pub trait EngineInvoker: Send + Sync {
    async fn invoke(&self, binary: &str, args: &[String]) -> InvokeOutcome;
}

/// Invoker that spawns the engine binary as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliInvoker;

#[async_trait]
impl EngineInvoker for CliInvoker {
    async fn invoke(&self, binary: &str, args: &[String]) -> InvokeOutcome {
        tracing::debug!(%binary, ?args, "invoking engine");

        let output = Command::new(binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));

                if output.status.success() {
                    InvokeOutcome::succeeded(combined)
                } else {
                    tracing::debug!(status = %output.status, "engine invocation failed");
                    InvokeOutcome::failed(combined, output.status.to_string())
                }
            }
            Err(e) => {
                tracing::warn!(%binary, "failed to launch engine: {e}");
                InvokeOutcome::failed(String::new(), e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_of_successful_process() {
        let outcome = CliInvoker.invoke("echo", &["hello".to_string()]).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.output, "hello\n");
    }

    #[tokio::test]
    async fn reports_nonzero_exit_as_failure() {
        let outcome = CliInvoker
            .invoke("sh", &["-c".to_string(), "echo oops >&2; exit 3".to_string()])
            .await;
        assert!(!outcome.is_success());
        assert!(outcome.output.contains("oops"));
        assert!(outcome.failure.unwrap().contains('3'));
    }

    #[tokio::test]
    async fn reports_launch_error_for_missing_binary() {
        let outcome = CliInvoker
            .invoke("dockhand-test-no-such-binary", &[])
            .await;
        assert!(!outcome.is_success());
        assert!(outcome.output.is_empty());
        assert!(outcome.failure.is_some());
    }
}
