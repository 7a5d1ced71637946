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
/// - enter/exit are no-ops (no raw mode / alternate screen).
/// - next() returns events from an internal queue and `None` once it is empty.
/// - draw() increments an internal counter for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
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

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn screen.
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn screen as lines of text with trailing blanks trimmed.
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                let line: String = (area.left()..area.right())
                    .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()))
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
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

    fn size(&self) -> Result<Rect> {
        let size = self.term.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_drain_then_none() {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Render]).unwrap();
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Render));
        assert_eq!(tui.next().await, None);
    }

    #[test]
    fn test_draw_and_screen_lines() {
        let mut tui = TestTui::new(8, 2).unwrap();
        tui.draw(&mut |f: &mut Frame<'_>| f.render_widget(Paragraph::new("hi"), f.area()))
            .unwrap();
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines(), vec!["hi".to_string(), String::new()]);
    }

    #[test]
    fn test_resize_changes_size() {
        let mut tui = TestTui::new(8, 2).unwrap();
        tui.resize(Rect::new(0, 0, 20, 6)).unwrap();
        assert_eq!(tui.size().unwrap(), Rect::new(0, 0, 20, 6));
    }
}
