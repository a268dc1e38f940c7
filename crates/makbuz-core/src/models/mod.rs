//! Data models: extracted records, per-file results, configuration.

pub mod config;
pub mod receipt;
