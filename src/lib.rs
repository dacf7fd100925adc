pub mod audit;
pub mod config;
pub mod error;
pub mod gateway;
pub mod workspace;

// Re-export commonly used types for convenience
pub use audit::AuditLogger;
pub use config::Config;
pub use error::{GatewayError, Result};
pub use gateway::{
    ConfirmationRequest, ExecutionResult, Gateway, GitExecutor, GitSubcommand, SubcommandRequest,
};
pub use workspace::{StaticWorkspace, Workspace};
