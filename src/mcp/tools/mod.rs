//! MCP tools for interacting with the PrismHR API.
//!
//! - `relay`: the generic routine behind every catalog endpoint
//! - `connection`: `test_connection`, an authentication check
//!
//! Both use the shared HTTP client and error handling.

pub mod connection;
pub mod relay;
