//! Modal dialog displaying a JSON payload with a copy-to-clipboard action.

use leptos::prelude::*;

use crate::components::json_view::JsonView;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::{clipboard, json_text};

#[cfg(test)]
#[path = "json_window_test.rs"]
mod json_window_test;

const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard";
const COPY_FAILURE_MESSAGE: &str = "Copy to clipboard failed";

/// Maximum width class of the dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WindowSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "dialog--small",
            Self::Medium => "dialog--medium",
            Self::Large => "dialog--large",
        }
    }
}

/// Dialog shown over the page while mounted; closes only through `on_close`.
#[component]
pub fn JsonWindow(
    data: serde_json::Value,
    #[prop(default = true)] copy_to_clipboard: bool,
    #[prop(optional)] size: WindowSize,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Serialize once up front; an unserializable payload disables the copy
    // action instead of failing at click time.
    let copy_text = match json_text::to_pretty(&data) {
        Ok(text) => Some(text),
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("payload cannot be serialized for copy: {err}");
            #[cfg(not(feature = "hydrate"))]
            let _ = err;
            None
        }
    };
    let copy_disabled = copy_text.is_none();

    let on_copy = move |_| {
        let Some(text) = copy_text.clone() else {
            return;
        };
        clipboard::copy_text(
            text,
            Callback::new(move |ok: bool| {
                if ok {
                    notify(toasts, COPY_SUCCESS_MESSAGE, ToastKind::Success);
                } else {
                    notify(toasts, COPY_FAILURE_MESSAGE, ToastKind::Error);
                }
            }),
        );
    };

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class=format!("dialog dialog--json {}", size.class())
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__body">
                    <JsonView data=data/>
                </div>
                <div class="dialog__actions dialog__actions--split">
                    {copy_to_clipboard
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--secondary dialog__copy"
                                    disabled=copy_disabled
                                    on:click=on_copy
                                >
                                    "Copy to clipboard"
                                </button>
                            }
                        })}
                    <span class="dialog__actions-spacer"></span>
                    <button class="btn btn--primary" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
