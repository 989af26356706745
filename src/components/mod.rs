//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render activity cards and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod activity_card;
pub mod signup_form;
pub mod status_message;
