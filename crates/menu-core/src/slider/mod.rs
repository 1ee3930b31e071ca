//! Hero slider: a wrapping slide index driven by a timer and user controls.

mod controller;
mod state;

pub use controller::{SlideDeck, SliderController, Ticker};
pub use state::SliderState;
