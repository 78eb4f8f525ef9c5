//! CLI library components for the frame-shop migration.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
