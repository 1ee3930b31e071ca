//! What the cart panel shows, rebuilt from the cart on every render.

use crate::cart::Cart;
use crate::money::Money;

/// One row of the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Product name; also the key the row's controls act on.
    pub name: String,
    /// Formatted unit price, e.g. `Rs 50`.
    pub unit_price: String,
    /// Units in the cart.
    pub quantity: u32,
    /// Formatted line total, e.g. `Rs 100`.
    pub line_total: String,
}

/// Full contents of the cart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPanel {
    /// Rows in cart order; empty when the cart is empty.
    pub rows: Vec<PanelRow>,
    /// Cart total, recomputed from the rows' items.
    pub total: Money,
    /// Text shown instead of rows when the cart is empty.
    pub empty_message: String,
    currency_label: String,
}

impl CartPanel {
    /// Project `cart` into panel rows.
    pub fn from_cart(cart: &Cart, currency_label: &str, empty_message: &str) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| PanelRow {
                name: item.name.clone(),
                unit_price: item.unit_price.display(currency_label),
                quantity: item.quantity,
                line_total: item.line_total().display(currency_label),
            })
            .collect();

        Self {
            rows,
            total: cart.total(),
            empty_message: empty_message.to_string(),
            currency_label: currency_label.to_string(),
        }
    }

    /// Check if there is nothing to list.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total line, e.g. `Total: Rs 250`.
    pub fn total_text(&self) -> String {
        format!("Total: {}", self.total.display(&self.currency_label))
    }
}
