//! Session-creation page owning the draft session config.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the single owner of the mutable create-session state (mode,
//! type, model, app binding). The toolbar and dialogs receive read-only
//! signals plus callbacks, so every mutation funnels back through here.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::create_toolbar::CreateToolbar;
use crate::components::json_window::JsonWindow;
use crate::net::types::App;
use crate::state::auth::AuthState;
use crate::state::session::{SessionMode, SessionType};
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

/// Draft request body for the pending session, as the server expects it.
/// An empty model means "use the per-type default" and is omitted.
fn session_request_payload(
    mode: SessionMode,
    session_type: SessionType,
    model: &str,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("mode".to_owned(), serde_json::json!(mode.as_str()));
    payload.insert("type".to_owned(), serde_json::json!(session_type.as_str()));
    if !model.is_empty() {
        payload.insert("model_name".to_owned(), serde_json::json!(model));
    }
    serde_json::Value::Object(payload)
}

/// Create page: session toolbar plus the settings inspector dialog.
#[component]
pub fn CreatePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    // Draft session config, owned here.
    let mode = RwSignal::new(SessionMode::default());
    let session_type = RwSignal::new(SessionType::default());
    let model = RwSignal::new(String::new());
    let app = RwSignal::new(None::<App>);
    let show_settings = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        ui.update(|u| u.big_screen = crate::util::viewport::is_big_screen());

        leptos::task::spawn_local(async move {
            auth.update(|a| a.loading = true);
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });

        // Resolve the app binding when the page was opened with ?app_id=...
        let app_id = query.get_untracked().get("app_id").unwrap_or_default();
        if !app_id.is_empty() {
            leptos::task::spawn_local(async move {
                if let Some(found) = crate::net::api::fetch_app(&app_id).await {
                    app.set(Some(found));
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, ui, query);

    let on_open_config = Callback::new(move |()| show_settings.set(true));
    let on_settings_close = Callback::new(move |()| show_settings.set(false));
    let on_set_mode = Callback::new(move |next: SessionMode| mode.set(next));
    let on_set_model = Callback::new(move |next: String| model.set(next));

    view! {
        <div class="create-page">
            <CreateToolbar
                mode=mode
                session_type=session_type
                model=model
                app=app
                on_open_config=on_open_config
                on_set_mode=on_set_mode
                on_set_model=on_set_model
            />

            <Show when=move || app.get().is_some()>
                <div class="create-page__app-banner">
                    {move || app.get().map(|a| a.name).unwrap_or_default()}
                </div>
            </Show>

            <div class="create-page__body">
                <p class="create-page__hint">
                    "Choose a mode and model, then start a new session."
                </p>
            </div>

            <Show when=move || show_settings.get()>
                {move || {
                    view! {
                        <JsonWindow
                            data=session_request_payload(
                                mode.get(),
                                session_type.get(),
                                &model.get(),
                            )
                            on_close=on_settings_close
                        />
                    }
                }}
            </Show>
        </div>
    }
}
