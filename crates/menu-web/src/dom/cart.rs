//! Cart badge, cart panel and navigation.

use std::rc::Rc;

use menu_core::cart::{CartPanel, CartSurface, Navigator, PanelRow};
use menu_core::MenuError;
use menu_observability::StructuredLogger;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::config::Selectors;
use crate::dom::{dom_error, find};

const ACTION_ATTRIBUTE: &str = "data-cart-action";
const NAME_ATTRIBUTE: &str = "data-cart-name";

/// What a panel control asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Increment,
    Decrement,
    Remove,
}

impl CartAction {
    fn as_str(self) -> &'static str {
        match self {
            CartAction::Increment => "inc",
            CartAction::Decrement => "dec",
            CartAction::Remove => "remove",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "inc" => Some(CartAction::Increment),
            "dec" => Some(CartAction::Decrement),
            "remove" => Some(CartAction::Remove),
            _ => None,
        }
    }
}

/// Decode a click inside the panel into an action on a named item.
///
/// Rows carry their item name in a data attribute rather than in inline
/// handler source, so names with quotes need no escaping.
pub fn cart_action(event: &Event) -> Option<(CartAction, String)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target
        .closest(&format!("[{}]", ACTION_ATTRIBUTE))
        .ok()
        .flatten()?;
    let action = CartAction::parse(&control.get_attribute(ACTION_ATTRIBUTE)?)?;
    let name = control.get_attribute(NAME_ATTRIBUTE)?;
    Some((action, name))
}

/// Draws the cart into the badge, panel and total elements.
pub struct DomCartSurface {
    document: Document,
    selectors: Rc<Selectors>,
}

impl DomCartSurface {
    pub fn new(document: &Document, selectors: Rc<Selectors>) -> Self {
        Self {
            document: document.clone(),
            selectors,
        }
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, MenuError> {
        let element = self
            .document
            .create_element(tag)
            .map_err(|e| dom_error("create element", e))?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        Ok(element)
    }

    fn text(&self, tag: &str, class: &str, text: &str) -> Result<Element, MenuError> {
        let element = self.element(tag, class)?;
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn control(
        &self,
        class: &str,
        action: CartAction,
        name: &str,
    ) -> Result<Element, MenuError> {
        let button = self.element("button", class)?;
        button
            .set_attribute(ACTION_ATTRIBUTE, action.as_str())
            .and_then(|_| button.set_attribute(NAME_ATTRIBUTE, name))
            .map_err(|e| dom_error("set attribute", e))?;
        Ok(button)
    }

    fn row(&self, row: &PanelRow) -> Result<Element, MenuError> {
        let info = self.element("div", "cart-info")?;
        append(&info, &self.text("span", "cart-item-name", &row.name)?)?;
        append(&info, &self.text("span", "cart-item-price", &row.unit_price)?)?;

        let controls = self.element("div", "cart-controls")?;
        let minus = self.control("qty-btn", CartAction::Decrement, &row.name)?;
        minus.set_text_content(Some("-"));
        let plus = self.control("qty-btn", CartAction::Increment, &row.name)?;
        plus.set_text_content(Some("+"));
        append(&controls, &minus)?;
        append(&controls, &self.text("span", "qty-value", &row.quantity.to_string())?)?;
        append(&controls, &plus)?;

        let trash = self.control("trash-btn", CartAction::Remove, &row.name)?;
        append(&trash, &self.element("i", "fas fa-trash")?)?;

        let div = self.element("div", "cart-row")?;
        append(&div, &info)?;
        append(&div, &controls)?;
        append(&div, &self.text("div", "cart-total-item", &row.line_total)?)?;
        append(&div, &trash)?;
        Ok(div)
    }
}

impl CartSurface for DomCartSurface {
    fn render_badge(&self, count: u64) -> Result<(), MenuError> {
        let badge = find(&self.document, &self.selectors.cart_badge)?
            .ok_or(MenuError::MissingTarget("cart badge"))?;
        badge.set_text_content(Some(&count.to_string()));
        Ok(())
    }

    fn render_panel(&self, panel: &CartPanel) -> Result<(), MenuError> {
        let container = find(&self.document, &self.selectors.cart_items)?
            .ok_or(MenuError::MissingTarget("cart panel"))?;
        container.set_inner_html("");

        if panel.is_empty() {
            let empty = self.text("p", "", &panel.empty_message)?;
            empty
                .set_attribute("style", "color:white; text-align:center;")
                .map_err(|e| dom_error("set attribute", e))?;
            append(&container, &empty)?;
        } else {
            for row in &panel.rows {
                append(&container, &self.row(row)?)?;
            }
        }

        if let Some(total) = find(&self.document, &self.selectors.cart_total)? {
            total.set_text_content(Some(&panel.total_text()));
        }
        Ok(())
    }
}

fn append(parent: &Element, child: &Element) -> Result<(), MenuError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| dom_error("append", e))
}

/// Navigates by assigning `window.location.href`.
pub struct LocationNavigator {
    window: Window,
    logger: StructuredLogger,
}

impl LocationNavigator {
    pub fn new(window: &Window, logger: &StructuredLogger) -> Self {
        Self {
            window: window.clone(),
            logger: logger.for_component("navigation"),
        }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            self.logger
                .warn_builder("navigation refused")
                .field("url", url)
                .field("error", format!("{:?}", e))
                .emit();
        }
    }
}
