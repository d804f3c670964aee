use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::model::slide::Slide;
use crate::presentation::config::Styles;

/// One slide in a bordered box, title on the border
pub struct SlideWidget<'a> {
    slide: &'a Slide,
    styles: &'a Styles,
}

impl<'a> SlideWidget<'a> {
    pub fn new(slide: &'a Slide, styles: &'a Styles) -> Self {
        Self { slide, styles }
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.slide.is_active() {
            self.styles.get_or_default("slide.active")
        } else {
            self.styles.get_or_default("slide.border")
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.slide.title() {
            let title_style = self.styles.get_or_default("slide.title");
            block = block.title(Line::from(Span::styled(format!(" {title} "), title_style)));
        }

        let lines: Vec<Line> = self
            .slide
            .body()
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect();
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_title_and_body() {
        let slide = Slide::new(Some("Intro".to_owned()), vec!["hello deck".to_owned()]);
        let styles = Styles::default();
        let area = Rect::new(0, 0, 30, 5);
        let mut buffer = Buffer::empty(area);

        SlideWidget::new(&slide, &styles).render(area, &mut buffer);

        let content = text(&buffer);
        assert!(content.contains(" Intro "));
        assert!(content.contains("hello deck"));
    }

    #[test]
    fn test_render_without_title() {
        let slide = Slide::new(None, vec!["only body".to_owned()]);
        let styles = Styles::default();
        let area = Rect::new(0, 0, 30, 5);
        let mut buffer = Buffer::empty(area);

        SlideWidget::new(&slide, &styles).render(area, &mut buffer);
        assert!(text(&buffer).contains("only body"));
    }
}
