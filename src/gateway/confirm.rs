use serde::Serialize;

/// One labeled value shown to the user alongside a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoField {
    pub name: String,
    pub value: String,
}

/// Payload asking the user to approve a write operation out-of-band.
///
/// Produced before execution, never after. The gateway does not wait for an
/// answer; the caller executes in a separate call only if approval was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmationRequest {
    pub message: String,
    pub info: Vec<InfoField>,
}

impl ConfirmationRequest {
    /// Build the standard payload for a reconstructed git command.
    pub fn for_command(full_command: &str) -> Self {
        Self {
            message: "Execute git command?".to_string(),
            info: vec![InfoField {
                name: "Command".to_string(),
                value: full_command.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_command_payload() {
        let request = ConfirmationRequest::for_command("git commit -m \"fix\"");
        assert_eq!(request.message, "Execute git command?");
        assert_eq!(request.info.len(), 1);
        assert_eq!(request.info[0].name, "Command");
        assert_eq!(request.info[0].value, "git commit -m \"fix\"");
    }

    #[test]
    fn test_serializes_to_json() {
        let request = ConfirmationRequest::for_command("git add .");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"message\":\"Execute git command?\""));
        assert!(json.contains("\"value\":\"git add .\""));
    }
}
