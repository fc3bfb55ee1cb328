//! Local UI chrome state (viewport class).
//!
//! DESIGN
//! ======
//! Keeps the responsive-layout classification out of domain state so controls
//! that fork on screen size read one shared signal instead of re-querying the
//! browser. Defaults to compact so SSR output stays deterministic.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for viewport-dependent control variants.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the viewport matches the large-screen media query.
    pub big_screen: bool,
}
