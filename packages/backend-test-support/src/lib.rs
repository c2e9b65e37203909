//! Backend test support utilities
//!
//! Shared by the backend's integration test binaries: one-time logging
//! initialization and assertions over RFC 7807 problem responses.

pub mod logging;
pub mod problem_details;
