pub mod settings;

pub use settings::{BehaviorSettings, Config, ConfigError, WorkspaceSettings};
