//! Presentation layer
//!
//! - Components: stateless views over `AppState`
//! - Widgets: ratatui widgets for slides and progress
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
