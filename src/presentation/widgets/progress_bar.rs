use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Widget};

use crate::model::progress::Progress;

/// One-row gauge filled to the deck's progress fraction
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarWidget {
    progress: Progress,
    style: Style,
}

impl ProgressBarWidget {
    pub fn new(progress: Progress, style: Style) -> Self {
        Self { progress, style }
    }
}

impl Widget for ProgressBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Gauge::default()
            .gauge_style(self.style)
            .ratio(self.progress.fraction().clamp(0.0, 1.0))
            .label(self.progress.label())
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label() {
        let widget = ProgressBarWidget::new(Progress::new(1, 3), Style::default());
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("2/3 66.7%"));
    }

    #[test]
    fn test_first_slide_label() {
        let widget = ProgressBarWidget::new(Progress::new(0, 5), Style::default().fg(Color::Cyan));
        let area = Rect::new(0, 0, 20, 1);
        let mut buffer = Buffer::empty(area);

        widget.render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("1/5 20.0%"));
    }
}
