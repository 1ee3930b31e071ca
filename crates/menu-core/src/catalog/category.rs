//! Categories and category button highlighting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard category label.
pub const ALL: &str = "All";

/// A display group of product cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Every card, in the shuffled default order.
    All,
    /// Cards whose category attribute equals this exact value.
    Named(String),
}

impl Category {
    /// Parse a category label. Only the exact string `All` is the wildcard.
    pub fn parse(label: &str) -> Self {
        if label == ALL {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    /// The label as written on buttons and card attributes.
    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL,
            Category::Named(name) => name,
        }
    }

    /// Whether a card tagged `card_category` belongs to this category.
    pub fn matches(&self, card_category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == card_category,
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::parse(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::parse(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category selector button.
pub trait CategoryButton {
    /// Visible label text.
    fn label(&self) -> String;

    /// Mark or clear the active highlight.
    fn set_active(&self, active: bool);
}

/// Activate every button whose label contains `name`, clear the rest.
///
/// Returns how many buttons ended up active. Zero is fine: a category with
/// no button simply leaves every button cleared.
pub fn highlight_matching<B: CategoryButton>(buttons: &[B], name: &str) -> usize {
    let mut active = 0;
    for button in buttons {
        let matched = button.label().contains(name);
        button.set_active(matched);
        if matched {
            active += 1;
        }
    }
    active
}

/// Activate exactly the button at `index`, clear the rest.
pub fn highlight_only<B: CategoryButton>(buttons: &[B], index: usize) {
    for (i, button) in buttons.iter().enumerate() {
        button.set_active(i == index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeButton;

    #[test]
    fn test_parse() {
        assert_eq!(Category::parse("All"), Category::All);
        assert_eq!(Category::parse("all"), Category::Named("all".to_string()));
        assert_eq!(Category::from("Drinks").as_str(), "Drinks");
    }

    #[test]
    fn test_matches() {
        assert!(Category::All.matches("Drinks"));
        assert!(Category::parse("Drinks").matches("Drinks"));
        assert!(!Category::parse("Drinks").matches("drinks"));
    }

    #[test]
    fn test_highlight_matching_uses_contains() {
        let buttons = FakeButton::row(&["All", "Burgers", "Cold Drinks", "Pizza"]);

        assert_eq!(highlight_matching(&buttons, "Drinks"), 1);
        assert_eq!(FakeButton::active_labels(&buttons), vec!["Cold Drinks"]);

        assert_eq!(highlight_matching(&buttons, "Desserts"), 0);
        assert!(FakeButton::active_labels(&buttons).is_empty());
    }

    #[test]
    fn test_highlight_only() {
        let buttons = FakeButton::row(&["All", "Burgers", "Pizza"]);
        highlight_matching(&buttons, "All");
        highlight_only(&buttons, 2);
        assert_eq!(FakeButton::active_labels(&buttons), vec!["Pizza"]);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Category::All).unwrap();
        assert_eq!(json, "\"All\"");
        let parsed: Category = serde_json::from_str("\"Pizza\"").unwrap();
        assert_eq!(parsed, Category::parse("Pizza"));
    }
}
