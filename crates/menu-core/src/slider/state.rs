//! Slide index state machine.

use crate::error::MenuError;

/// Current slide over a fixed number of slides.
///
/// Every transition wraps: stepping past the last slide lands on the first
/// and stepping before the first lands on the last. With zero slides there
/// is no valid index and every transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    index: usize,
    count: usize,
}

impl SliderState {
    /// Start at the first of `count` slides.
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if there are no slides.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Advance by one, wrapping to the first slide.
    pub fn next(&mut self) -> Option<usize> {
        self.step(1).ok()
    }

    /// Go back by one, wrapping to the last slide.
    pub fn prev(&mut self) -> Option<usize> {
        self.step(-1).ok()
    }

    /// Move relative to the current slide.
    pub fn step(&mut self, direction: isize) -> Result<usize, MenuError> {
        let target = isize::try_from(self.index)
            .unwrap_or(isize::MAX)
            .saturating_add(direction);
        self.goto(target)
    }

    /// Jump to `index`.
    ///
    /// Out-of-range targets do not clamp: anything at or past the end goes
    /// to the first slide and anything negative goes to the last.
    pub fn goto(&mut self, index: isize) -> Result<usize, MenuError> {
        if self.count == 0 {
            return Err(MenuError::SlideNotFound(index));
        }

        self.index = match usize::try_from(index) {
            Ok(i) if i < self.count => i,
            Ok(_) => 0,
            Err(_) => self.count - 1,
        };
        Ok(self.index)
    }
}
