//! Cart line items.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One cart entry, keyed by product name.
///
/// Serialized as `{"name": .., "price": .., "qty": ..}`, the record shape
/// kept in durable storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product name; unique within a cart.
    pub name: String,
    /// Price of one unit, fixed by the first add.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// Units in the cart; at least 1 while the item is present.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
