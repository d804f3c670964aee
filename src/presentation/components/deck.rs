//! Deck screen: slides, progress bar and a hint line

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::{DeckWidget, HintWidget, ProgressBarWidget},
};

#[derive(Debug, Clone, Default)]
pub struct DeckComponent;

impl DeckComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Slides
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Hint
            ])
            .split(area);

        let styles = &state.config.styles;
        frame.render_widget(
            DeckWidget::new(&state.deck, styles, state.config.gesture.row_height),
            layout[0],
        );
        frame.render_widget(
            ProgressBarWidget::new(state.deck.progress(), styles.get_or_default("progress")),
            layout[1],
        );
        frame.render_widget(HintWidget::new(styles.get_or_default("hint")), layout[2]);
    }
}
