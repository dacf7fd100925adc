use thiserror::Error;

/// Errors representing gateway-level rejection of a request.
///
/// Ordinary command failures (non-zero exit, timeout, spawn failure) are NOT
/// errors at this level; they are encoded in `ExecutionResult` so callers can
/// render them uniformly. A `GatewayError` means no git process was spawned.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid git subcommand: \"{name}\". Allowed commands: {allowed}")]
    InvalidSubcommand { name: String, allowed: String },

    #[error(
        "Dangerous git operation detected: \"{0}\". This operation is blocked \
         for safety. Please use the git CLI directly if you really need this."
    )]
    DangerousOperation(&'static str),
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
