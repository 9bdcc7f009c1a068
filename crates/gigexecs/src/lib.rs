//! GigExecs profile progression service library.
//!
//! Houses the pure completeness/status engine for marketplace profiles
//! plus the scaffolding (configuration, telemetry, error types, HTTP
//! router) shared with the `gigexecs-api` binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
