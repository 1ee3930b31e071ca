//! Widget configuration.

use menu_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Behaviour knobs shared by every widget component.
///
/// Every field has a default matching the restaurant's existing markup, so an
/// empty JSON object is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Durable storage slot holding the cart.
    pub storage_key: String,
    /// Where checkout sends the shopper.
    pub landing_url: String,
    /// Auto-advance period of the hero slider.
    pub slide_interval_ms: u32,
    /// Category shown after everything else in the "All" view.
    pub trailing_category: String,
    /// Cards per visual row for the spacing pass.
    pub cards_per_row: usize,
    /// Trailing gap applied to every card that does not end a row.
    pub card_gap: String,
    /// Label printed before amounts.
    pub currency_label: String,
    /// Panel text when the cart has no items.
    pub empty_cart_message: String,
    /// Minimum log level.
    pub log_level: LogLevel,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "cart".to_string(),
            landing_url: "index.html".to_string(),
            slide_interval_ms: 5000,
            trailing_category: "Drinks".to_string(),
            cards_per_row: 3,
            card_gap: "1%".to_string(),
            currency_label: "Rs".to_string(),
            empty_cart_message: "Your cart is empty".to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Human,
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(text: &str) -> Result<Self, MenuError> {
        let config: WidgetConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widget cannot work with.
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.storage_key.trim().is_empty() {
            return Err(MenuError::Config("storage_key must not be empty".to_string()));
        }
        if self.cards_per_row == 0 {
            return Err(MenuError::Config("cards_per_row must be at least 1".to_string()));
        }
        if self.slide_interval_ms == 0 {
            return Err(MenuError::Config(
                "slide_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
