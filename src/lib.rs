//! # Swipedeck - terminal slide deck
//!
//! Presents an ordered deck of text slides in the terminal. Dragging with
//! the left mouse button moves between slides: drag up for the next slide,
//! down for the previous one. While dragging, the leaving and entering
//! slides follow the pointer; releasing past the commit threshold changes
//! slides, anything shorter snaps back.
//!
//! ## Architecture Overview
//!
//! - **Model** (`model`): slides, the gesture state machine and the deck controller
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions returning commands
//! - **Command** (`core::cmd`): side effects executed by the runner
//! - **View** (`presentation`): stateless ratatui components
//!
//! ## Example Usage
//!
//! ```rust
//! use swipedeck::model::{deck::Message, Deck, GestureSettings, Slide};
//!
//! let slides = vec![Slide::default(), Slide::default(), Slide::default()];
//! let mut deck = Deck::new(slides, None, GestureSettings::default()).unwrap();
//!
//! deck.update(Message::GestureStarted { y: 500.0 });
//! deck.update(Message::GestureMoved { y: 350.0 });
//! deck.update(Message::GestureEnded);
//!
//! assert_eq!(deck.current_index(), 1);
//! assert_eq!(deck.progress().label(), "2/3 66.7%");
//! ```

pub mod core;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{msg::Msg, state::AppState, translator::translate_event, update::update};
pub use integration::AppRunner;
pub use model::Deck;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
