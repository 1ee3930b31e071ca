//! `web-sys` adapters implementing the core page traits.

mod cart;
mod catalog;
mod slider;

pub use cart::{cart_action, CartAction, DomCartSurface, LocationNavigator};
pub use catalog::{DomButton, DomGrid, DomSearchBox};
pub use slider::{DomSlideDeck, IntervalTimer};

use menu_core::MenuError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// First element matching `selector` in the document.
pub(crate) fn find(document: &Document, selector: &str) -> Result<Option<Element>, MenuError> {
    document
        .query_selector(selector)
        .map_err(|e| dom_error(&format!("bad selector {}", selector), e))
}

/// Every element matching `selector` in the document, in document order.
pub(crate) fn find_all(document: &Document, selector: &str) -> Result<Vec<Element>, MenuError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| dom_error(&format!("bad selector {}", selector), e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn dom_error(what: &str, value: JsValue) -> MenuError {
    MenuError::Dom(format!("{}: {:?}", what, value))
}
