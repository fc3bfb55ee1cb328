//! Networking modules for the HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the login redirect, `types` defines the
//! shared wire schema for users and app bindings.

pub mod api;
pub mod types;
