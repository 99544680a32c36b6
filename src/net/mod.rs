//! Networking modules for the console's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls against the same-origin backend, and `types`
//! defines the payload schema shared by the session store and the pages.

pub mod api;
pub mod types;
