use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Utc;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only log of every command the gateway ran or refused to run.
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger with the default log path
    pub fn new() -> std::io::Result<Self> {
        let log_path = Self::default_log_path()?;
        Self::with_path(log_path)
    }

    /// Create an AuditLogger with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        // Ensure directory exists
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Get the default log path: ~/.config/gitgate/history.log
    fn default_log_path() -> std::io::Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("gitgate")
            .join("history.log"))
    }

    /// Log an executed command and its exit code
    pub fn log_command(
        &self,
        command: &str,
        workspace_root: &Path,
        exit_code: i32,
    ) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        let log_entry = format!(
            "[{}] [{}] [{}] [exit:{}] {}\n",
            timestamp,
            user,
            workspace_root.display(),
            exit_code,
            command
        );

        self.append(&log_entry)
    }

    /// Log a request the gateway rejected before spawning anything
    ///
    /// Records blocked danger patterns and disallowed subcommands. This helps
    /// detect attack patterns and agent misbehavior.
    pub fn log_rejected(
        &self,
        command: &str,
        reason: &str,
        workspace_root: &Path,
    ) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        let log_entry = format!(
            "[{}] [{}] [{}] [REJECTED] command=\"{}\" reason=\"{}\"\n",
            timestamp,
            user,
            workspace_root.display(),
            command,
            reason
        );

        self.append(&log_entry)
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(entry.as_bytes())?;
        file.flush()
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            // Rotate: history.log -> history.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
