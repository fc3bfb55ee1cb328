//! Transient notification queue surfaced by the toast tray.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component can push a success/error message through the shared
//! `RwSignal<ToastState>` context; entries auto-dismiss after a short
//! lifetime or when the user closes them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_LIFETIME_MS: u64 = 4_000;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique handle used for dismissal (UUID string).
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
}

/// Queue of visible notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a notification and return its dismissal handle.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove the notification with the given handle, if still queued.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Push a notification onto the shared queue and schedule its auto-dismiss.
pub fn notify(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let mut id = String::new();
    toasts.update(|state| id = state.push(message, kind));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
            toasts.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
