//! Slider controller: slide state, page rendering and the auto-advance timer.

use menu_observability::StructuredLogger;

use crate::config::WidgetConfig;
use crate::error::MenuError;
use crate::slider::SliderState;

/// The slides and their indicator dots.
pub trait SlideDeck {
    /// Number of slides on the page.
    fn slide_count(&self) -> usize;

    /// Mark slide `index` and its dot active, clear every other one.
    fn show(&self, index: usize);
}

/// A recurring timer that calls back into [`SliderController::tick`].
pub trait Ticker {
    /// Arm the timer with the given period.
    fn start(&mut self, interval_ms: u32);

    /// Cancel the timer. Cancelling an idle timer is a no-op.
    fn stop(&mut self);

    /// Whether an interval is currently armed.
    fn is_running(&self) -> bool;
}

/// Drives a [`SlideDeck`] from timer ticks and user controls.
///
/// At most one interval is ever armed: arming always cancels first. Manual
/// transitions restart the cadence unless the pointer is over the slider,
/// in which case the timer stays suspended until [`resume`](Self::resume).
pub struct SliderController<D, T> {
    state: SliderState,
    deck: D,
    ticker: T,
    interval_ms: u32,
    hovered: bool,
    logger: StructuredLogger,
}

impl<D, T> SliderController<D, T>
where
    D: SlideDeck,
    T: Ticker,
{
    /// Create a controller over the slides currently in `deck`.
    pub fn new(deck: D, ticker: T, config: &WidgetConfig, logger: StructuredLogger) -> Self {
        Self {
            state: SliderState::new(deck.slide_count()),
            deck,
            ticker,
            interval_ms: config.slide_interval_ms,
            hovered: false,
            logger: logger.for_component("slider"),
        }
    }

    /// Show the current slide and arm the timer.
    pub fn start(&mut self) {
        if self.state.is_empty() {
            self.logger.debug("no slides, slider idle");
            return;
        }
        self.deck.show(self.state.index());
        self.arm();
    }

    /// Timer callback: advance without touching the timer.
    pub fn tick(&mut self) {
        if let Some(index) = self.state.next() {
            self.deck.show(index);
        }
    }

    /// User "next" control.
    pub fn next(&mut self) -> Option<usize> {
        self.change(1)
    }

    /// User "previous" control.
    pub fn prev(&mut self) -> Option<usize> {
        self.change(-1)
    }

    /// Move `direction` slides from the current one.
    pub fn change(&mut self, direction: isize) -> Option<usize> {
        let result = self.state.step(direction);
        self.manual(result)
    }

    /// Jump to slide `index` (a dot click).
    pub fn goto(&mut self, index: isize) -> Option<usize> {
        let result = self.state.goto(index);
        self.manual(result)
    }

    /// Pointer entered the slider: pause auto-advance.
    pub fn suspend(&mut self) {
        self.hovered = true;
        self.ticker.stop();
    }

    /// Pointer left the slider: restart auto-advance.
    pub fn resume(&mut self) {
        self.hovered = false;
        if !self.state.is_empty() {
            self.arm();
        }
    }

    fn manual(&mut self, result: Result<usize, MenuError>) -> Option<usize> {
        match result {
            Ok(index) => {
                self.deck.show(index);
                if !self.hovered {
                    self.arm();
                }
                Some(index)
            }
            Err(e) => {
                self.logger.debug(&e.to_string());
                None
            }
        }
    }

    fn arm(&mut self) {
        self.ticker.stop();
        self.ticker.start(self.interval_ms);
    }
}
