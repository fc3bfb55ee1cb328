//! Shared client state provided through Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs hold plain fields behind `RwSignal` contexts so components
//! stay stateless and derive everything from the current values.

pub mod auth;
pub mod session;
pub mod toast;
pub mod ui;
