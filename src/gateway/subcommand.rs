use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of git subcommands the gateway will mediate.
///
/// Extending this set requires careful security review; arbitrary commands
/// are explicitly rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitSubcommand {
    Status,
    Diff,
    Log,
    Add,
    Commit,
    Branch,
    Show,
    Stash,
    Checkout,
    Pull,
    Fetch,
}

impl GitSubcommand {
    /// Every allowed subcommand, in the order enumerated in error messages.
    pub const NAMES: &'static [&'static str] = &[
        "status", "diff", "log", "add", "commit", "branch", "show", "stash",
        "checkout", "pull", "fetch",
    ];

    /// Parse an untrusted subcommand string against the allow-list.
    ///
    /// This runs at both confirmation time and execution time: a caller that
    /// skips confirmation still cannot slip a disallowed subcommand through.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "status" => Ok(Self::Status),
            "diff" => Ok(Self::Diff),
            "log" => Ok(Self::Log),
            "add" => Ok(Self::Add),
            "commit" => Ok(Self::Commit),
            "branch" => Ok(Self::Branch),
            "show" => Ok(Self::Show),
            "stash" => Ok(Self::Stash),
            "checkout" => Ok(Self::Checkout),
            "pull" => Ok(Self::Pull),
            "fetch" => Ok(Self::Fetch),
            _ => Err(GatewayError::InvalidSubcommand {
                name: name.to_string(),
                allowed: Self::NAMES.join(", "),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Diff => "diff",
            Self::Log => "log",
            Self::Add => "add",
            Self::Commit => "commit",
            Self::Branch => "branch",
            Self::Show => "show",
            Self::Stash => "stash",
            Self::Checkout => "checkout",
            Self::Pull => "pull",
            Self::Fetch => "fetch",
        }
    }

    /// Whether this subcommand is guaranteed not to mutate repository state.
    /// Read-only subcommands never require confirmation.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::Status | Self::Diff | Self::Log | Self::Branch | Self::Show | Self::Stash
        )
    }
}

impl fmt::Display for GitSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured request from the calling agent.
///
/// `subcommand` arrives as an untrusted string and is validated against the
/// allow-list; `args` is untrusted free text, scanned for danger patterns and
/// split into a literal argument vector at execution time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubcommandRequest {
    pub subcommand: String,
    #[serde(default)]
    pub args: String,
}

impl SubcommandRequest {
    pub fn new<S: Into<String>, A: Into<String>>(subcommand: S, args: A) -> Self {
        Self {
            subcommand: subcommand.into(),
            args: args.into(),
        }
    }

    /// Human-readable reconstruction of the full command.
    ///
    /// For display only; the reconstructed string is never re-parsed or
    /// executed.
    pub fn full_command(&self) -> String {
        if self.args.is_empty() {
            format!("git {}", self.subcommand)
        } else {
            format!("git {} {}", self.subcommand, self.args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_allowed() {
        for name in GitSubcommand::NAMES {
            let result = GitSubcommand::parse(name);
            assert!(result.is_ok(), "Subcommand should parse: {}", name);
            assert_eq!(result.unwrap().as_str(), *name);
        }
    }

    #[test]
    fn test_parse_disallowed() {
        for name in ["rm", "rebase", "reset", "clean", "push", "gc", "daemon", ""] {
            let result = GitSubcommand::parse(name);
            assert!(result.is_err(), "Subcommand should be rejected: {}", name);
            assert!(matches!(
                result.unwrap_err(),
                GatewayError::InvalidSubcommand { .. }
            ));
        }
    }

    #[test]
    fn test_invalid_subcommand_enumerates_allowed_set() {
        let err = GitSubcommand::parse("rebase").unwrap_err();
        let message = err.to_string();
        for name in GitSubcommand::NAMES {
            assert!(message.contains(name), "Error should list: {}", name);
        }
    }

    #[test]
    fn test_read_only_classification() {
        let read_only = ["status", "diff", "log", "branch", "show", "stash"];
        let write = ["add", "commit", "checkout", "pull", "fetch"];

        for name in read_only {
            assert!(GitSubcommand::parse(name).unwrap().is_read_only());
        }
        for name in write {
            assert!(!GitSubcommand::parse(name).unwrap().is_read_only());
        }
    }

    #[test]
    fn test_full_command_reconstruction() {
        let request = SubcommandRequest::new("status", "");
        assert_eq!(request.full_command(), "git status");

        let request = SubcommandRequest::new("commit", "-m \"fix\"");
        assert_eq!(request.full_command(), "git commit -m \"fix\"");
    }

    #[test]
    fn test_deserialize_request() {
        let request: SubcommandRequest =
            serde_json::from_str(r#"{"subcommand":"log","args":"--oneline -5"}"#).unwrap();
        assert_eq!(request.subcommand, "log");
        assert_eq!(request.args, "--oneline -5");
    }

    #[test]
    fn test_deserialize_request_args_default_empty() {
        let request: SubcommandRequest =
            serde_json::from_str(r#"{"subcommand":"status"}"#).unwrap();
        assert_eq!(request.args, "");
    }
}
