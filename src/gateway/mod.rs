pub mod confirm;
pub mod executor;
pub mod subcommand;
pub mod validator;

pub use confirm::{ConfirmationRequest, InfoField};
pub use executor::{EXEC_TIMEOUT, ExecutionResult, GitExecutor, MAX_OUTPUT_CHARS, truncate_output};
pub use subcommand::{GitSubcommand, SubcommandRequest};
pub use validator::{DANGEROUS_PATTERNS, find_dangerous_pattern};

use crate::audit::AuditLogger;
use crate::error::{GatewayError, Result};
use crate::workspace::Workspace;

/// Mediates git subcommand requests from an automated agent.
///
/// Three checks run in sequence: subcommand allow-list membership, the
/// danger-pattern blocklist, and the confirmation requirement. Validation and
/// the blocklist run in both [`confirm`](Gateway::confirm) and
/// [`execute`](Gateway::execute), so skipping confirmation bypasses nothing.
///
/// All state is request-scoped; the workspace collaborators are re-read on
/// every call.
pub struct Gateway<W: Workspace> {
    workspace: W,
    audit: Option<AuditLogger>,
}

impl<W: Workspace> Gateway<W> {
    pub fn new(workspace: W) -> Self {
        Self {
            workspace,
            audit: None,
        }
    }

    /// Attach an audit logger recording executed and rejected commands.
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Decide whether a request needs out-of-band human approval.
    ///
    /// Returns `Ok(None)` when execution may proceed without asking (read-only
    /// subcommand, or auto-approve enabled), `Ok(Some(..))` with a payload the
    /// caller must surface to the user, and `Err` when the request is blocked
    /// outright (danger pattern) or malformed (disallowed subcommand).
    ///
    /// Idempotent: no state is mutated and identical input yields identical
    /// output. Approval handling belongs entirely to the caller; execution is
    /// a separate subsequent call.
    pub fn confirm(&self, request: &SubcommandRequest) -> Result<Option<ConfirmationRequest>> {
        // Danger patterns are a hard stop, checked before anything else and
        // independent of the subcommand
        if let Some(pattern) = find_dangerous_pattern(&request.args) {
            let err = GatewayError::DangerousOperation(pattern);
            self.log_rejected(request, &err);
            return Err(err);
        }

        let subcommand = match GitSubcommand::parse(&request.subcommand) {
            Ok(subcommand) => subcommand,
            Err(err) => {
                self.log_rejected(request, &err);
                return Err(err);
            }
        };

        if subcommand.is_read_only() {
            return Ok(None);
        }

        if self.workspace.auto_approve() {
            return Ok(None);
        }

        Ok(Some(ConfirmationRequest::for_command(&request.full_command())))
    }

    /// Execute a request as a direct git child process.
    ///
    /// `Err` only for gateway-level rejection (disallowed subcommand, danger
    /// pattern); the allow-list and blocklist are re-checked here in case the
    /// caller skipped [`confirm`](Gateway::confirm). Ordinary command failure
    /// comes back as `Ok` with `success = false`.
    pub async fn execute(&self, request: &SubcommandRequest) -> Result<ExecutionResult> {
        let subcommand = match GitSubcommand::parse(&request.subcommand) {
            Ok(subcommand) => subcommand,
            Err(err) => {
                self.log_rejected(request, &err);
                return Err(err);
            }
        };

        if let Some(pattern) = find_dangerous_pattern(&request.args) {
            let err = GatewayError::DangerousOperation(pattern);
            self.log_rejected(request, &err);
            return Err(err);
        }

        let root = self.workspace.root();
        let executor = GitExecutor::new(&root);
        let result = executor.run(subcommand, &request.args).await;

        // Best effort: audit failures never fail the command
        if let Some(audit) = &self.audit {
            let _ = audit.log_command(&result.command, &root, result.exit_code.unwrap_or(0));
        }

        Ok(result)
    }

    fn log_rejected(&self, request: &SubcommandRequest, err: &GatewayError) {
        if let Some(audit) = &self.audit {
            let _ = audit.log_rejected(
                &request.full_command(),
                &err.to_string(),
                &self.workspace.root(),
            );
        }
    }
}
