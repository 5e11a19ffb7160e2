use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream,
        KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend as Backend;
use ratatui::prelude::*;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::{io, Event, Frame, TuiLike, IO};

/// Crossterm-backed terminal with a background event task.
///
/// The task merges terminal input with tick and render intervals into one
/// channel of [`Event`]s.
pub struct Tui {
    terminal: Terminal<Backend<IO>>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(Backend::new(io()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate: 30.0,
            tick_rate: 4.0,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    fn start(&mut self) {
        let tick_delay = period(self.tick_rate);
        let render_delay = period(self.frame_rate);
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let token = self.cancellation_token.clone();
        let event_tx = self.event_tx.clone();

        self.task = Some(tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);
            let _ = event_tx.send(Event::Init);
            loop {
                let tick_delay = tick_interval.tick();
                let render_delay = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                let event = tokio::select! {
                    _ = token.cancelled() => break,
                    maybe_event = crossterm_event => match maybe_event {
                        Some(Ok(evt)) => match evt {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            CrosstermEvent::Key(_) => continue,
                            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                            CrosstermEvent::Resize(x, y) => Event::Resize(x, y),
                            CrosstermEvent::FocusLost => Event::FocusLost,
                            CrosstermEvent::FocusGained => Event::FocusGained,
                            CrosstermEvent::Paste(s) => Event::Paste(s),
                        },
                        Some(Err(e)) => {
                            tracing::error!("terminal event error: {e}");
                            Event::Error
                        }
                        None => Event::Closed,
                    },
                    _ = tick_delay => Event::Tick,
                    _ = render_delay => Event::Render,
                };
                let closed = event == Event::Closed;
                if event_tx.send(event).is_err() || closed {
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl TuiLike for Tui {
    fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io(), EnterAlternateScreen, cursor::Hide, EnableBracketedPaste)?;
        self.start();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.cancel();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            crossterm::execute!(io(), DisableBracketedPaste)?;
            restore_terminal()?;
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        self.event_rx.recv().boxed()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = TuiLike::exit(self) {
            tracing::error!("failed to restore terminal: {e:?}");
        }
    }
}

const MIN_PERIOD: Duration = Duration::from_millis(1);
const MAX_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Interval for `rate` events per second, kept between 1ms and a day
fn period(rate: f64) -> Duration {
    if rate.is_nan() || rate <= 0.0 {
        return MAX_PERIOD;
    }
    Duration::try_from_secs_f64(1.0 / rate)
        .map_or(MAX_PERIOD, |period| period.clamp(MIN_PERIOD, MAX_PERIOD))
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
pub fn restore_terminal() -> Result<()> {
    crossterm::execute!(io(), LeaveAlternateScreen, cursor::Show)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(4.0, Duration::from_millis(250))]
    #[case(1000.0, Duration::from_millis(1))]
    #[case(1e9, MIN_PERIOD)]
    #[case(f64::INFINITY, MIN_PERIOD)]
    fn test_period_is_at_least_one_millisecond(#[case] rate: f64, #[case] expected: Duration) {
        assert_eq!(period(rate), expected);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(1e-320)]
    fn test_period_for_degenerate_rates(#[case] rate: f64) {
        assert_eq!(period(rate), MAX_PERIOD);
    }
}
