//! Stateless components
//!
//! Components receive the whole `AppState` at render time and hold no
//! state of their own.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod deck;

pub use deck::DeckComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub deck: DeckComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            deck: DeckComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.deck.view(state, frame, area);
    }
}
