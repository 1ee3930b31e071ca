//! Hero slides, indicator dots and the auto-advance interval.

use menu_core::slider::{SlideDeck, Ticker};
use menu_core::MenuError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::config::Selectors;
use crate::dom::find_all;

/// Slide and dot elements, matched by position.
pub struct DomSlideDeck {
    slides: Vec<Element>,
    dots: Vec<Element>,
    active_class: String,
}

impl DomSlideDeck {
    pub fn find(document: &Document, selectors: &Selectors) -> Result<Self, MenuError> {
        Ok(Self {
            slides: find_all(document, &selectors.slides)?,
            dots: find_all(document, &selectors.dots)?,
            active_class: selectors.active_slide_class.clone(),
        })
    }
}

impl SlideDeck for DomSlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn show(&self, index: usize) {
        // A page may have fewer dots than slides; extra slides just have no dot.
        for elements in [&self.slides, &self.dots] {
            for (i, element) in elements.iter().enumerate() {
                let _ = element
                    .class_list()
                    .toggle_with_force(&self.active_class, i == index);
            }
        }
    }
}

/// `setInterval` wrapper owning its callback.
///
/// The callback lives as long as the timer, so a cleared handle can never
/// fire into freed memory. Dropping the timer clears it.
pub struct IntervalTimer {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new(window: &Window, callback: impl FnMut() + 'static) -> Self {
        Self {
            window: window.clone(),
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl Ticker for IntervalTimer {
    fn start(&mut self, interval_ms: u32) {
        self.stop();
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        self.handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                timeout,
            )
            .ok();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
