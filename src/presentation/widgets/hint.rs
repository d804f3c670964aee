use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

const HINT: &str = "drag up: next  drag down: previous  j/k: step  q: quit";
const SHORT_HINT: &str = "drag to navigate  q: quit";

/// Dimmed usage line under the progress bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintWidget {
    style: Style,
}

impl HintWidget {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    fn text_for(width: u16) -> &'static str {
        if HINT.width() <= usize::from(width) {
            HINT
        } else {
            SHORT_HINT
        }
    }
}

impl Widget for HintWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let text = Self::text_for(area.width);
        Paragraph::new(Line::from(Span::styled(text, self.style)).centered()).render(area, buf);
    }
}
