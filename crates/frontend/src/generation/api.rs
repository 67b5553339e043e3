use contracts::generation::{GenerateProjectRequest, GenerateProjectResponse};
use gloo_net::http::Request;

/// Client for the generation service.
///
/// The base address is injected once at construction and never changes;
/// everything else in the app builds its URLs through this client.
#[derive(Debug, Clone)]
pub struct GenerationApi {
    base: String,
}

/// The one network operation of the app, behind a seam so state-machine code
/// can be exercised against a fake without a transport.
#[allow(async_fn_in_trait)]
pub trait GenerateService {
    async fn generate_project(
        &self,
        description: &str,
    ) -> Result<GenerateProjectResponse, String>;
}

impl GenerationApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// URL of the embeddable preview page for a generated project.
    ///
    /// Plain concatenation; the identifier is used verbatim, no escaping.
    pub fn preview_url(&self, project_id: &str) -> String {
        format!(
            "{}/generated_projects/{}/index_preview.html",
            self.base, project_id
        )
    }

    /// URL of the downloadable project archive. Same contract as
    /// [`Self::preview_url`], different path suffix.
    pub fn download_url(&self, project_id: &str) -> String {
        format!("{}/download/{}.zip", self.base, project_id)
    }
}

impl GenerateService for GenerationApi {
    async fn generate_project(
        &self,
        description: &str,
    ) -> Result<GenerateProjectResponse, String> {
        let body = GenerateProjectRequest {
            description: description.to_string(),
        };

        let response = Request::post(&format!("{}/generate/", self.base))
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to generate project: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> GenerationApi {
        GenerationApi::new("http://127.0.0.1:8000")
    }

    #[test]
    fn preview_url_points_at_generated_preview_page() {
        assert_eq!(
            api().preview_url("abc123"),
            "http://127.0.0.1:8000/generated_projects/abc123/index_preview.html"
        );
    }

    #[test]
    fn download_url_points_at_project_archive() {
        assert_eq!(
            api().download_url("abc123"),
            "http://127.0.0.1:8000/download/abc123.zip"
        );
    }

    #[test]
    fn url_builders_pass_identifiers_through_verbatim() {
        // No escaping is performed, by contract.
        assert_eq!(
            api().preview_url("a b/c?"),
            "http://127.0.0.1:8000/generated_projects/a b/c?/index_preview.html"
        );
        assert_eq!(
            api().download_url("a b/c?"),
            "http://127.0.0.1:8000/download/a b/c?.zip"
        );
    }
}
