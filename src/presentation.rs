//! Presentation layer
//!
//! This module contains everything that turns state into pixels:
//! - Shared components (`Button`, `Input`)
//! - Views composed of those components
//! - Widgets that draw element trees with ratatui
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod views;
pub mod widgets;
