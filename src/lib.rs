//! Terminal contact form: validation, transient alerts, and a simulated
//! submission flow over a ratatui surface.
//!
//! The binary in `main.rs` is a thin shell; everything with behavior lives
//! here so it can be driven from tests without a live terminal.

pub mod config;
pub mod logging;
pub mod ui;
pub mod validate;
