//! Infrastructure layer
//!
//! This module handles external integrations:
//! - CLI argument processing
//! - Configuration files
//! - Slide file loading
//! - TUI foundation

pub mod cli;
pub mod config;
pub mod slide_source;
pub mod tui;
