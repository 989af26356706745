//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and error mapping, `types` defines the shared
//! wire schema.

pub mod api;
pub mod types;
