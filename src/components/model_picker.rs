//! Model dropdown for text inference sessions.

use leptos::prelude::*;

#[cfg(test)]
#[path = "model_picker_test.rs"]
mod model_picker_test;

#[derive(Clone, Copy)]
struct ModelOption {
    id: &'static str,
    label: &'static str,
}

// The empty id selects the server's per-type default model.
const MODELS: &[ModelOption] = &[
    ModelOption { id: "", label: "Default (Mistral-7B)" },
    ModelOption { id: "mistralai/Mistral-7B-Instruct-v0.1", label: "Mistral-7B Instruct" },
    ModelOption { id: "mistralai/Mixtral-8x7B-Instruct-v0.1", label: "Mixtral 8x7B Instruct" },
    ModelOption { id: "meta-llama/Llama-3-8B-Instruct", label: "Llama 3 8B Instruct" },
];

/// Dropdown bound to the caller's model selection.
#[component]
pub fn ModelPicker(
    /// Current model id; empty selects the default option.
    #[prop(into)]
    model: Signal<String>,
    on_set_model: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="model-picker"
            prop:value=move || model.get()
            on:change=move |ev| on_set_model.run(event_target_value(&ev))
        >
            {MODELS
                .iter()
                .map(|option| {
                    let id = option.id;
                    view! {
                        <option value=id selected=move || model.get() == id>
                            {option.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
