//! address-front — server-side front door for the address_module web app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three pieces: a login proxy that forwards credentials to the backend
//! auth service and sets the session cookie, a session hook that runs
//! before every request, and an in-memory toast store consumed by UI views.

pub mod config;
pub mod routes;
pub mod services;
pub mod state;
