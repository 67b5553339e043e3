use crate::generation::api::{GenerateService, GenerationApi};
use crate::generation::preview::ProjectPreview;
use crate::generation::state::{is_submittable, GenerationState};
use crate::shared::api_utils::api_base;
use crate::shared::components::ui::{Button, Textarea};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole app; the preview panel builds its URLs from
    // the same injected base address.
    let api = GenerationApi::new(api_base());
    provide_context(api.clone());

    let (description, set_description) = signal(String::new());
    let (state, set_state) = signal(GenerationState::Idle);

    let on_generate = move |_| {
        let input = description.get();
        if !is_submittable(&input) {
            return;
        }
        let api = api.clone();

        // Entering Loading drops any previous project id or error message.
        set_state.set(GenerationState::Loading);
        spawn_local(async move {
            let result = api.generate_project(&input).await;
            set_state.set(GenerationState::from_result(result));
        });
    };

    view! {
        <div class="app">
            <div class="app__panel app__panel--form">
                <h1 class="app__title">"AI Project Orchestrator"</h1>
                <div class="form">
                    <Textarea
                        value=description
                        rows=6
                        placeholder="Describe your project idea (e.g. task management app with login and sharing)"
                        on_input=Callback::new(move |value| set_description.set(value))
                    />
                    <Button
                        class="form__submit"
                        disabled=Signal::derive(move || state.get().is_loading())
                        on_click=Callback::new(on_generate)
                    >
                        {move || {
                            if state.get().is_loading() { "Generating..." } else { "Generate project" }
                        }}
                    </Button>
                    {move || {
                        let state = state.get();
                        state.error_message().map(|message| {
                            let message = message.to_string();
                            view! { <p class="form__error">{message}</p> }
                        })
                    }}
                </div>
            </div>
            <div class="app__panel app__panel--preview">
                {move || match state.get() {
                    GenerationState::Success { project_id } => {
                        view! { <ProjectPreview project_id=Some(project_id) /> }.into_any()
                    }
                    _ => {
                        view! {
                            <div class="app__placeholder">
                                <p>"Your project preview will appear here once generated."</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
