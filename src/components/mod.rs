//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the create-session chrome while reading shared auth and
//! viewport state from Leptos context providers. Mutation authority stays
//! with the owning page; components only forward events through callbacks.

pub mod create_toolbar;
pub mod json_view;
pub mod json_window;
pub mod model_picker;
pub mod session_mode_control;
pub mod toast_tray;
