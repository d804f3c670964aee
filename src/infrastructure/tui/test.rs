use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// In-memory terminal for tests, backed by ratatui's `TestBackend`.
///
/// `next()` pops scripted events and yields `None` when they run out, which
/// the runner treats as the end of input.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let term = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as text, one line per row
    pub fn screen_text(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.events.pop_front()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn test_draw_counts_and_captures() {
        let mut tui = TestTui::new(10, 2).expect("test tui");
        tui.draw(&mut |f: &mut Frame<'_>| {
            f.render_widget(Paragraph::new("hello"), f.area());
        })
        .expect("draw");

        assert_eq!(tui.draw_count(), 1);
        assert!(tui.screen_text().starts_with("hello"));
    }

    #[tokio::test]
    async fn test_scripted_events() {
        let mut tui = TestTui::with_events(10, 2, [Event::Init]).expect("test tui");
        tui.enqueue_event(Event::Quit);
        assert_eq!(tui.next().await, Some(Event::Init));
        assert_eq!(tui.next().await, Some(Event::Quit));
        assert_eq!(tui.next().await, None);
    }

    #[test]
    fn test_enter_and_exit() {
        let mut tui = TestTui::new(10, 2).expect("test tui");
        tui.enter().expect("enter");
        assert!(tui.is_entered());
        tui.exit().expect("exit");
        assert!(!tui.is_entered());
    }
}
