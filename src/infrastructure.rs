//! Infrastructure layer
//!
//! This module handles everything outside the component tree:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
