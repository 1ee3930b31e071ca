//! The in-memory cart.

use crate::cart::LineItem;
use crate::error::MenuError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered list of line items, at most one per name.
///
/// Order is insertion order: the first add of a name fixes its position and
/// later quantity changes never move it. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored records, restoring the cart invariants.
    ///
    /// Records with a zero quantity are dropped and repeated names are
    /// folded into their first occurrence (quantities summed, first price
    /// kept).
    pub fn from_records(records: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for record in records {
            if record.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|i| i.name == record.name) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(record.quantity);
                }
                None => cart.items.push(record),
            }
        }
        cart
    }

    /// Add one unit of `name`.
    ///
    /// A repeat add bumps the quantity and ignores `unit_price`; the first
    /// price wins. Returns the item's new quantity.
    pub fn add_item(&mut self, name: &str, unit_price: Money) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.name == name) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::new(name, unit_price));
        1
    }

    /// Adjust the quantity of `name` by `delta`.
    ///
    /// Returns the new quantity, or `None` when the quantity fell below 1
    /// and the item was removed.
    pub fn change_quantity(&mut self, name: &str, delta: i64) -> Result<Option<u32>, MenuError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| MenuError::ItemNotInCart(name.to_string()))?;

        let quantity = i64::from(item.quantity).saturating_add(delta);
        if quantity < 1 {
            self.remove_item(name);
            return Ok(None);
        }

        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(Some(item.quantity))
    }

    /// Remove the item named `name`. Returns whether anything was removed.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.name != name);
        self.items.len() < len_before
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity, computed fresh on every call.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total units across all items (what the badge shows).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by name.
    pub fn get_item(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_same_item_twice() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("Tea", Money::whole(50)), 1);
        assert_eq!(cart.add_item("Tea", Money::whole(50)), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(
            cart.get_item("Tea"),
            Some(&LineItem {
                name: "Tea".to_string(),
                unit_price: Money::whole(50),
                quantity: 2,
            })
        );
    }

    #[test]
    fn test_first_price_wins() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Tea", Money::whole(80));
        assert_eq!(cart.get_item("Tea").unwrap().unit_price, Money::whole(50));
    }

    #[test]
    fn test_updates_do_not_reorder() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Zinger", Money::whole(450));
        cart.add_item("Tea", Money::whole(50));
        cart.change_quantity("Tea", 3).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Zinger"]);
    }

    #[test]
    fn test_change_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Tea", Money::whole(50));

        assert_eq!(cart.change_quantity("Tea", -2).unwrap(), None);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_change_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        assert_eq!(cart.change_quantity("Tea", -5).unwrap(), None);
        assert!(cart.get_item("Tea").is_none());
    }

    #[test]
    fn test_change_quantity_unknown_item() {
        let mut cart = Cart::new();
        let result = cart.change_quantity("Ghost", 1);
        assert!(matches!(result, Err(MenuError::ItemNotInCart(name)) if name == "Ghost"));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        assert_eq!(cart.change_quantity("Tea", i64::MAX).unwrap(), Some(u32::MAX));
        assert_eq!(cart.add_item("Tea", Money::whole(50)), u32::MAX);
    }

    #[test]
    fn test_remove_by_name() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Coffee", Money::whole(120));

        assert!(cart.remove_item("Tea"));
        assert!(!cart.remove_item("Tea"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_total_and_count() {
        let cart = Cart::from_records(vec![
            LineItem {
                name: "Biryani".to_string(),
                unit_price: Money::whole(100),
                quantity: 2,
            },
            LineItem::new("Tea", Money::whole(50)),
        ]);

        assert_eq!(cart.total(), Money::whole(250));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_from_records_normalizes() {
        let cart = Cart::from_records(vec![
            LineItem::new("Tea", Money::whole(50)),
            LineItem {
                name: "Ghost".to_string(),
                unit_price: Money::whole(10),
                quantity: 0,
            },
            LineItem {
                name: "Tea".to_string(),
                unit_price: Money::whole(70),
                quantity: 2,
            },
        ]);

        assert_eq!(cart.items().len(), 1);
        let tea = cart.get_item("Tea").unwrap();
        assert_eq!(tea.quantity, 3);
        assert_eq!(tea.unit_price, Money::whole(50));
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut cart = Cart::new();
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Tea", Money::whole(50));
        cart.add_item("Samosa", Money::from_major(35.5));

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Tea","price":50,"qty":2},{"name":"Samosa","price":35.5,"qty":1}]"#
        );

        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
