use std::path::{Path, PathBuf};

/// The two collaborator values the gateway consumes, re-read on every call.
///
/// Modeled as an injected trait rather than ambient process-wide state so the
/// gateway stays unit-testable in isolation.
pub trait Workspace: Send + Sync {
    /// Absolute directory git commands execute in.
    fn root(&self) -> PathBuf;

    /// Whether write subcommands skip the confirmation gate.
    fn auto_approve(&self) -> bool;
}

/// Fixed workspace values, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticWorkspace {
    root: PathBuf,
    auto_approve: bool,
}

impl StaticWorkspace {
    pub fn new<P: AsRef<Path>>(root: P, auto_approve: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            auto_approve,
        }
    }
}

impl Workspace for StaticWorkspace {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn auto_approve(&self) -> bool {
        self.auto_approve
    }
}
