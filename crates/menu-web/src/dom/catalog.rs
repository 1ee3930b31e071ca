//! Product grid, category buttons and search input.

use std::rc::Rc;

use menu_core::catalog::{CardContainer, CategoryButton, Extent, ProductCard, SearchBox};
use menu_core::MenuError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::Selectors;
use crate::dom::{find, find_all};

/// A product card element.
#[derive(Clone)]
pub struct DomCard {
    element: HtmlElement,
    selectors: Rc<Selectors>,
}

impl ProductCard for DomCard {
    fn category(&self) -> String {
        self.element
            .get_attribute(&self.selectors.category_attribute)
            .unwrap_or_default()
    }

    fn title(&self) -> String {
        self.element
            .query_selector(&self.selectors.card_title)
            .ok()
            .flatten()
            .and_then(|title| title.dyn_into::<HtmlElement>().ok())
            .map(|title| title.inner_text())
            .unwrap_or_default()
    }

    fn is_shown(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true)
    }

    fn set_shown(&self, shown: bool) {
        let display = if shown { "block" } else { "none" };
        // Inline style is never read-only on an attached element.
        let _ = self.element.style().set_property("display", display);
    }

    fn set_trailing_gap(&self, gap: &str) {
        let _ = self.element.style().set_property("margin-right", gap);
    }

    fn extent(&self) -> Extent {
        Extent::new(
            f64::from(self.element.offset_top()),
            f64::from(self.element.offset_height()),
        )
    }
}

/// The product grid container.
pub struct DomGrid {
    document: Document,
    container: HtmlElement,
    selectors: Rc<Selectors>,
}

impl DomGrid {
    /// Locate the grid; `None` on pages without one.
    pub fn find(document: &Document, selectors: Rc<Selectors>) -> Result<Option<Self>, MenuError> {
        let container = find(document, &selectors.products)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Ok(container.map(|container| Self {
            document: document.clone(),
            container,
            selectors,
        }))
    }
}

impl CardContainer for DomGrid {
    type Card = DomCard;

    fn cards(&self) -> Vec<DomCard> {
        find_all(&self.document, &self.selectors.cards)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| DomCard {
                element,
                selectors: self.selectors.clone(),
            })
            .collect()
    }

    fn append(&self, card: &DomCard) {
        let _ = self.container.append_child(&card.element);
    }
}

/// A category selector button.
#[derive(Clone)]
pub struct DomButton {
    element: HtmlElement,
    selectors: Rc<Selectors>,
}

impl DomButton {
    /// Every category button on the page, in page order.
    pub fn all(document: &Document, selectors: Rc<Selectors>) -> Result<Vec<Self>, MenuError> {
        Ok(find_all(document, &selectors.category_buttons)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| Self {
                element,
                selectors: selectors.clone(),
            })
            .collect())
    }

    /// The button element, for attaching listeners.
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl CategoryButton for DomButton {
    fn label(&self) -> String {
        self.element.inner_text()
    }

    fn set_active(&self, active: bool) {
        let _ = self
            .element
            .class_list()
            .toggle_with_force(&self.selectors.active_category_class, active);
    }
}

/// The collapsible search input.
pub struct DomSearchBox {
    input: HtmlInputElement,
    selectors: Rc<Selectors>,
}

impl DomSearchBox {
    /// Locate the input; `None` on pages without one.
    pub fn find(document: &Document, selectors: Rc<Selectors>) -> Result<Option<Self>, MenuError> {
        let input = find(document, &selectors.search_input)?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        Ok(input.map(|input| Self { input, selectors }))
    }
}

impl SearchBox for DomSearchBox {
    fn query(&self) -> String {
        self.input.value()
    }

    fn clear(&self) {
        self.input.set_value("");
    }

    fn is_open(&self) -> bool {
        self.input
            .class_list()
            .contains(&self.selectors.search_open_class)
    }

    fn set_open(&self, open: bool) {
        let _ = self
            .input
            .class_list()
            .toggle_with_force(&self.selectors.search_open_class, open);
    }

    fn focus(&self) {
        let _ = self.input.focus();
    }
}
