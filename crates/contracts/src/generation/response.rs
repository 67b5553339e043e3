use serde::{Deserialize, Serialize};

/// Response of `POST /generate/`.
///
/// Only `project_id` is contractual; the backend also sends a human-readable
/// `message`, and any further fields are opaque and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProjectResponse {
    /// Opaque identifier used to build preview and download URLs
    pub project_id: String,

    /// Informational status text, not shown in the UI
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_project_id_and_message() {
        let response: GenerateProjectResponse = serde_json::from_str(
            r#"{"project_id": "abc123", "message": "Project generated successfully"}"#,
        )
        .unwrap();
        assert_eq!(response.project_id, "abc123");
        assert_eq!(
            response.message.as_deref(),
            Some("Project generated successfully")
        );
    }

    #[test]
    fn response_tolerates_missing_message_and_unknown_fields() {
        let response: GenerateProjectResponse =
            serde_json::from_str(r#"{"project_id": "42", "took_ms": 1500, "pages": 5}"#).unwrap();
        assert_eq!(response.project_id, "42");
        assert!(response.message.is_none());
    }
}
