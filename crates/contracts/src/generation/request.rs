use serde::{Deserialize, Serialize};

/// Body of `POST /generate/`.
///
/// The description is sent verbatim; trimming and the empty-input guard
/// happen in the UI before a request is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProjectRequest {
    /// Free-form natural-language description of the project to generate
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_single_description_field() {
        let request = GenerateProjectRequest {
            description: "Task app".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "description": "Task app" }));
    }
}
