//! HTTP client and API communication layer for PrismHR.
//!
//! This module handles all HTTP communication with PrismHR's REST API,
//! including session authentication, request construction, and response handling.

mod client;
mod session;

// Re-export client's public API
pub use client::{SERVICES_PREFIX, SESSION_HEADER, build_client, prism_get, service_url};
pub use session::{LOGIN_PATH, SessionManager, authenticate};
