//! Networking modules for the community REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and `types` defines the shared wire schema.
//! The server owning these endpoints is out of scope for this crate.

pub mod api;
pub mod types;
