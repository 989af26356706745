//! Shared application state provided via Leptos contexts.

pub mod status;
