//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the upstream auth client and the in-memory toast
//! store so route handlers stay focused on protocol translation and cookie
//! plumbing.

pub mod auth;
pub mod toast;
