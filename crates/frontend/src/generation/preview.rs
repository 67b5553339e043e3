use crate::generation::api::GenerationApi;
use leptos::prelude::*;

/// Preview panel for a generated project.
///
/// Pure function of the identifier: renders nothing when it is absent,
/// otherwise two outbound links and an embedded preview frame. Broken URLs
/// are not detected here; a dead link or an empty frame is the failure mode.
#[component]
pub fn ProjectPreview(project_id: Option<String>) -> impl IntoView {
    let api = expect_context::<GenerationApi>();

    project_id.map(|project_id| {
        let preview_url = api.preview_url(&project_id);
        let download_url = api.download_url(&project_id);

        view! {
            <div class="preview">
                <h2 class="preview__title">"Project ID: " {project_id}</h2>
                <div class="preview__actions">
                    <a
                        href=download_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button button--download"
                    >
                        "Download ZIP"
                    </a>
                    <a
                        href=preview_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button button--open"
                    >
                        "Open preview"
                    </a>
                </div>
                <iframe title="Project preview" src=preview_url class="preview__frame"></iframe>
            </div>
        }
    })
}
