use leptos::prelude::*;

/// Multi-line text input.
#[component]
pub fn Textarea(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new value
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <textarea
            class="form__textarea"
            placeholder=textarea_placeholder
            rows=rows
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            {move || value.get()}
        </textarea>
    }
}
