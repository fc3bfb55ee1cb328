//! REST API helpers for the auth and app endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so auth/app fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{App, User};

/// Path the login control redirects to; the server runs the auth flow and
/// returns the browser to the page it left.
const LOGIN_PATH: &str = "/auth/login";

#[cfg(any(test, feature = "hydrate"))]
fn app_endpoint(app_id: &str) -> String {
    format!("/api/apps/{app_id}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a predefined app binding from `/api/apps/{app_id}`.
/// Returns `None` if the app is unknown or on the server.
pub async fn fetch_app(app_id: &str) -> Option<App> {
    #[cfg(feature = "hydrate")]
    {
        let url = app_endpoint(app_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            log::warn!("app {app_id} could not be loaded: {}", resp.status());
            return None;
        }
        resp.json::<App>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = app_id;
        None
    }
}

/// Send the browser to the login flow. No-op on the server.
pub fn login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}
