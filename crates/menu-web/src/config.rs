//! Page configuration: widget behaviour plus the selectors that find it.

use menu_core::{MenuError, WidgetConfig};
use serde::{Deserialize, Serialize};

/// Attribute on `<body>` holding the JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-menu-config";

/// How the widget finds its page regions.
///
/// Defaults match the restaurant's existing markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Product grid container.
    pub products: String,
    /// Product cards inside the grid.
    pub cards: String,
    /// Card attribute naming its category.
    pub category_attribute: String,
    /// Title element inside a card.
    pub card_title: String,
    /// Category selector buttons.
    pub category_buttons: String,
    /// Class marking the highlighted category button.
    pub active_category_class: String,
    /// Search input.
    pub search_input: String,
    /// Class marking the search input as expanded.
    pub search_open_class: String,
    /// Cart panel row container.
    pub cart_items: String,
    /// Cart total line.
    pub cart_total: String,
    /// Cart item count badge.
    pub cart_badge: String,
    /// Marker element whose presence enables the slider.
    pub hero_slider: String,
    /// Region whose hover pauses the slider.
    pub slider_container: String,
    /// Slide elements.
    pub slides: String,
    /// Indicator dots.
    pub dots: String,
    /// Class marking the current slide and dot.
    pub active_slide_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            products: ".products".to_string(),
            cards: ".products .card".to_string(),
            category_attribute: "data-category".to_string(),
            card_title: "h3".to_string(),
            category_buttons: ".category-buttons button".to_string(),
            active_category_class: "active-cat".to_string(),
            search_input: "#searchInput".to_string(),
            search_open_class: "show-search".to_string(),
            cart_items: "#cartItems".to_string(),
            cart_total: "#total".to_string(),
            cart_badge: ".cart-badge".to_string(),
            hero_slider: ".menu-hero-slider".to_string(),
            slider_container: ".slider-container".to_string(),
            slides: ".hero-slide".to_string(),
            dots: ".dot".to_string(),
            active_slide_class: "active".to_string(),
        }
    }
}

impl Selectors {
    fn validate(&self) -> Result<(), MenuError> {
        let required = [
            ("products", &self.products),
            ("cards", &self.cards),
            ("category_attribute", &self.category_attribute),
            ("card_title", &self.card_title),
            ("category_buttons", &self.category_buttons),
            ("search_input", &self.search_input),
            ("cart_items", &self.cart_items),
            ("cart_badge", &self.cart_badge),
            ("hero_slider", &self.hero_slider),
            ("slides", &self.slides),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MenuError::Config(format!("selector {} must not be empty", name)));
            }
        }
        Ok(())
    }
}

/// Everything the page can configure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Widget behaviour.
    #[serde(flatten)]
    pub widget: WidgetConfig,
    /// Page selectors.
    pub selectors: Selectors,
}

impl PageConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(text: &str) -> Result<Self, MenuError> {
        let config: PageConfig = serde_json::from_str(text)?;
        config.widget.validate()?;
        config.selectors.validate()?;
        Ok(config)
    }

    /// Resolve the configuration attribute's value.
    ///
    /// A missing or blank attribute gives the defaults. An invalid one also
    /// gives the defaults, together with the reason so the caller can log it.
    pub fn resolve(attribute: Option<&str>) -> (Self, Option<MenuError>) {
        match attribute.map(str::trim) {
            None | Some("") => (Self::default(), None),
            Some(text) => match Self::from_json(text) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}
