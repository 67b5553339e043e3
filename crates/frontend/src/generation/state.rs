use contracts::generation::GenerateProjectResponse;

/// Message shown when a generation attempt fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating project. Check backend logs.";

/// State of the app shell, from idle through a request to its outcome.
///
/// One tagged value instead of independent loading/error/id fields, so
/// combinations like "loading and already successful" cannot be represented.
/// Setting `Loading` is what clears the previous outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Loading,
    Success { project_id: String },
    Failed { message: String },
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading)
    }

    pub fn project_id(&self) -> Option<&str> {
        match self {
            GenerationState::Success { project_id } => Some(project_id),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Fold the API result into the next state.
    ///
    /// The underlying error stays out of the UI: it goes to the console log
    /// and the user sees the fixed warning text.
    pub fn from_result(result: Result<GenerateProjectResponse, String>) -> Self {
        match result {
            Ok(response) => {
                if let Some(message) = &response.message {
                    log::debug!("generation service: {}", message);
                }
                GenerationState::Success {
                    project_id: response.project_id,
                }
            }
            Err(err) => {
                log::error!("project generation failed: {}", err);
                GenerationState::Failed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}

/// Guard for the generate action: only a description with non-whitespace
/// content may be submitted. The text itself is sent as typed.
pub fn is_submittable(description: &str) -> bool {
    !description.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_descriptions_are_not_submittable() {
        assert!(!is_submittable(""));
        assert!(!is_submittable("  "));
        assert!(!is_submittable("\n\t "));
    }

    #[test]
    fn descriptions_with_content_are_submittable() {
        assert!(is_submittable("Task app"));
        assert!(is_submittable("  padded  "));
    }

    #[test]
    fn loading_carries_no_previous_outcome() {
        let state = GenerationState::Loading;
        assert!(state.is_loading());
        assert!(state.project_id().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn successful_result_stores_the_project_id() {
        let state = GenerationState::from_result(Ok(GenerateProjectResponse {
            project_id: "abc123".to_string(),
            message: Some("Project generated successfully".to_string()),
        }));
        assert_eq!(state.project_id(), Some("abc123"));
        assert!(state.error_message().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_result_uses_the_fixed_warning_text() {
        let state = GenerationState::from_result(Err("connection refused".to_string()));
        assert_eq!(state.error_message(), Some(GENERATION_FAILED_MESSAGE));
        assert!(state.project_id().is_none());
        assert!(!state.is_loading());
    }
}
