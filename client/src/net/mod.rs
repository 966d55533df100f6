//! Networking modules for the card REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema that
//! the server also serves.

pub mod api;
pub mod types;
