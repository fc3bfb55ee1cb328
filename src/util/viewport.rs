//! Viewport size classification.
//!
//! Samples a `min-width` media query to decide between the large and compact
//! presentation variants of toolbar controls. Requires a browser environment;
//! SSR reports compact to keep server rendering deterministic.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
const BIG_SCREEN_QUERY: &str = "(min-width: 900px)";

/// Whether the viewport currently matches the large-screen media query.
pub fn is_big_screen() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(BIG_SCREEN_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
