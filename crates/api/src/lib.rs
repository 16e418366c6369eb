//! HTTP API: configuration, command handling, and request/response mapping.

pub mod app;
pub mod config;
