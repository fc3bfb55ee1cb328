//! Toolbar for the session-creation page.
//!
//! ARCHITECTURE
//! ============
//! Which controls appear is a pure function of the session config, the app
//! binding, the `app_id` query parameter, and auth state. `toolbar_visibility`
//! computes it so the rules stay unit-testable without a renderer.
//! The viewport class only picks between presentation variants of the same
//! control; it never changes what a control does.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::model_picker::ModelPicker;
use crate::components::session_mode_control::{SessionModeControl, variant_for};
use crate::net::types::App;
use crate::state::auth::AuthState;
use crate::state::session::{SessionMode, SessionType};
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "create_toolbar_test.rs"]
mod create_toolbar_test;

/// Which toolbar controls are visible for the current inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ToolbarVisibility {
    model_picker: bool,
    settings: bool,
    mode_selector: bool,
    login: bool,
}

fn toolbar_visibility(
    mode: SessionMode,
    session_type: SessionType,
    app_bound: bool,
    query_app_id: &str,
    authenticated: bool,
) -> ToolbarVisibility {
    let unbound = !app_bound;
    ToolbarVisibility {
        model_picker: unbound
            && query_app_id.is_empty()
            && mode == SessionMode::Inference
            && session_type == SessionType::Text,
        // The settings trigger is hidden in inference mode since there are no
        // global tools there; in learn mode it controls rag and finetune
        // settings.
        settings: unbound && mode != SessionMode::Inference,
        mode_selector: unbound,
        login: !authenticated,
    }
}

/// Top toolbar for the create page: model picker, settings trigger, mode
/// selector, and login affordance.
#[component]
pub fn CreateToolbar(
    #[prop(into)] mode: Signal<SessionMode>,
    #[prop(into)] session_type: Signal<SessionType>,
    /// Current model id; empty means the per-type default model.
    #[prop(into)]
    model: Signal<String>,
    /// App binding, if the session is attached to a predefined app.
    #[prop(into)]
    app: Signal<Option<App>>,
    on_open_config: Callback<()>,
    on_set_mode: Callback<SessionMode>,
    on_set_model: Callback<String>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    let visibility = Signal::derive(move || {
        toolbar_visibility(
            mode.get(),
            session_type.get(),
            app.get().is_some(),
            &query.get().get("app_id").unwrap_or_default(),
            auth.get().is_authenticated(),
        )
    });

    let on_config_click = move |_| on_open_config.run(());
    let on_login_click = move |_| crate::net::api::login();

    view! {
        <div class="create-toolbar">
            <div class="create-toolbar__cell">
                <Show when=move || visibility.get().model_picker>
                    <ModelPicker model=model on_set_model=on_set_model/>
                </Show>
            </div>

            <span class="create-toolbar__spacer"></span>

            <Show when=move || visibility.get().settings>
                <div class="create-toolbar__cell">
                    <button
                        class="btn create-toolbar__settings"
                        on:click=on_config_click
                        title="Session settings"
                    >
                        "⚙"
                    </button>
                </div>
            </Show>

            <Show when=move || visibility.get().mode_selector>
                <div class="create-toolbar__cell">
                    <SessionModeControl
                        mode=mode
                        on_set_mode=on_set_mode
                        variant=Signal::derive(move || variant_for(ui.get().big_screen))
                    />
                </div>
            </Show>

            <Show when=move || visibility.get().login>
                <div class="create-toolbar__cell">
                    {move || {
                        if ui.get().big_screen {
                            view! {
                                <button class="btn btn--primary create-toolbar__login" on:click=on_login_click>
                                    "Login / Register"
                                    <span class="create-toolbar__login-icon">"→"</span>
                                </button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button
                                    class="btn create-toolbar__login create-toolbar__login--icon"
                                    on:click=on_login_click
                                    title="Login / Register"
                                >
                                    "→"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
