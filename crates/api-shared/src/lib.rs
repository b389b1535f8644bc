//! # API Shared
//!
//! Shared definitions for the Oheng front ends.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `oheng-api-rest` for its handlers and by `oheng-cli` for `--json` output.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
