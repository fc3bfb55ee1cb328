//! Fixed-position tray rendering queued toast notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Notification tray anchored to the viewport corner.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class=toast_class(toast.kind)>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(&id))
                                    title="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
