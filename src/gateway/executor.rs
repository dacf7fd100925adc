use crate::gateway::subcommand::GitSubcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::time::timeout;

/// Maximum characters kept from each captured stream.
pub const MAX_OUTPUT_CHARS: usize = 10_000;

/// Ceiling on a single git invocation; the child is killed on expiry.
pub const EXEC_TIMEOUT: Duration = Duration::from_secs(30);

// Cap on bytes read per stream. A child that overruns this stalls on a full
// pipe and is reaped by the timeout.
const MAX_CAPTURE_BYTES: u64 = 5 * 1024 * 1024;

/// Normalized envelope for a single git invocation.
///
/// Ordinary command failures (non-zero exit, timeout, spawn failure) are
/// reported through `success = false`, never as an `Err`. `command` is a
/// display-only reconstruction and is never re-executed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Truncate output to keep responses bounded.
///
/// Strings over `max_chars` are cut there and a marker stating the omitted
/// character count is appended; shorter strings pass through unmodified.
pub fn truncate_output(output: &str, max_chars: usize) -> String {
    let total = output.chars().count();
    if total <= max_chars {
        return output.to_string();
    }

    let mut truncated: String = output.chars().take(max_chars).collect();
    truncated.push_str(&format!(
        "\n... (truncated, {} more characters)",
        total - max_chars
    ));
    truncated
}

/// Runs validated git subcommands as direct child processes.
#[derive(Debug)]
pub struct GitExecutor {
    root: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given working directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Execute a validated subcommand with untrusted raw args.
    ///
    /// Args are split on whitespace and passed to git as a literal argument
    /// vector; no shell is involved, so shell metacharacters in `args` have
    /// no special meaning and arrive at git as plain argument text.
    pub async fn run(&self, subcommand: GitSubcommand, args: &str) -> ExecutionResult {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let command = if args.is_empty() {
            format!("git {}", subcommand)
        } else {
            format!("git {} {}", subcommand, args)
        };

        let mut child = match Command::new("git")
            .arg(subcommand.as_str())
            .args(&tokens)
            .current_dir(&self.root)
            // Force non-interactive, non-paginated, colorless output so
            // results stay deterministic and machine-parseable
            .env("GIT_PAGER", "")
            .env("FORCE_COLOR", "0")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                return ExecutionResult {
                    success: false,
                    command,
                    exit_code: Some(1),
                    output: String::new(),
                    error: Some(format!("Failed to execute git: {}", e)),
                };
            }
        };

        // Drain both pipes concurrently so a chatty child cannot deadlock
        // against a full pipe before the status wait completes
        let stdout_task = tokio::spawn(read_capped(child.stdout.take()));
        let stderr_task = tokio::spawn(read_capped(child.stderr.take()));

        let wait_result = timeout(EXEC_TIMEOUT, child.wait()).await;
        match wait_result {
            Ok(Ok(status)) => {
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();

                if status.success() {
                    let output = if stdout.is_empty() { stderr } else { stdout };
                    ExecutionResult {
                        success: true,
                        command,
                        exit_code: None,
                        output: truncate_output(&output, MAX_OUTPUT_CHARS),
                        error: None,
                    }
                } else {
                    let exit_code = status.code().unwrap_or(1);
                    let error = if stderr.trim().is_empty() {
                        format!("process exited with code {}", exit_code)
                    } else {
                        stderr
                    };
                    ExecutionResult {
                        success: false,
                        command,
                        exit_code: Some(exit_code),
                        output: truncate_output(&stdout, MAX_OUTPUT_CHARS),
                        error: Some(truncate_output(&error, MAX_OUTPUT_CHARS)),
                    }
                }
            }
            Ok(Err(e)) => {
                let stdout = stdout_task.await.unwrap_or_default();
                ExecutionResult {
                    success: false,
                    command,
                    exit_code: Some(1),
                    output: truncate_output(&stdout, MAX_OUTPUT_CHARS),
                    error: Some(format!("Failed to wait for git: {}", e)),
                }
            }
            Err(_) => {
                // Kill closes the pipes, letting the reader tasks finish with
                // whatever partial output was captured
                let _ = child.kill().await;
                let stdout = stdout_task.await.unwrap_or_default();
                ExecutionResult {
                    success: false,
                    command,
                    exit_code: Some(1),
                    output: truncate_output(&stdout, MAX_OUTPUT_CHARS),
                    error: Some(format!(
                        "Command timed out after {}s",
                        EXEC_TIMEOUT.as_secs()
                    )),
                }
            }
        }
    }

    /// Get the working directory commands execute in
    pub fn root(&self) -> &Path {
        &self.root
    }
}

async fn read_capped<R>(pipe: Option<R>) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(pipe) = pipe else {
        return String::new();
    };

    let mut buf = Vec::new();
    let _ = pipe.take(MAX_CAPTURE_BYTES).read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).into_owned()
}
