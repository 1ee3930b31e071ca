//! Traits through which the cart reaches the page.

use crate::cart::CartPanel;
use crate::error::MenuError;

/// Where the cart is drawn.
///
/// Either target may be absent on a given page; implementations report that
/// with [`MenuError::MissingTarget`] and the store skips the step.
pub trait CartSurface {
    /// Show the total number of units.
    fn render_badge(&self, count: u64) -> Result<(), MenuError>;

    /// Replace the panel contents with `panel`.
    fn render_panel(&self, panel: &CartPanel) -> Result<(), MenuError>;
}

/// Page navigation.
pub trait Navigator {
    /// Send the browser to `url`.
    fn navigate(&self, url: &str);
}
