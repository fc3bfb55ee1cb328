//! Async clipboard writes with completion feedback.
//!
//! The browser clipboard API resolves a promise after the write lands; the
//! helper awaits it and reports the outcome through a callback so callers can
//! surface success or failure to the user. Requires a browser environment;
//! SSR paths do not invoke the callback.

use leptos::prelude::*;

/// Write `text` to the system clipboard, then invoke `on_result` with
/// whether the clipboard provider reported success.
pub fn copy_text(text: String, on_result: Callback<bool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let ok = write_to_clipboard(&text).await;
            if !ok {
                log::warn!("clipboard write failed");
            }
            on_result.run(ok);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, on_result);
    }
}

#[cfg(feature = "hydrate")]
async fn write_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}
