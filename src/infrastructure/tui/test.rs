use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit only record that they were called.
/// - next() pops queued events and returns `None` once the queue is empty.
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
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

    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Rendered screen as lines, trailing spaces trimmed
    pub fn screen_lines(&self) -> Vec<String> {
        let buf = self.buffer();
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_owned()
            })
            .collect()
    }

    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
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
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn test_draw_counts_and_captures() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        })?;

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines(), vec!["hello".to_owned(), String::new()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_events_drain_then_none() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick])?;
        tui.enqueue_event(Event::Quit);

        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Quit));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.resize(Rect::new(0, 0, 20, 4))?;
        assert_eq!(tui.buffer().area, Rect::new(0, 0, 20, 4));
        Ok(())
    }
}
