//! Traits through which the catalog reads and writes the product grid.
//!
//! Page elements are shared handles with interior mutability, so every
//! method takes `&self`.

/// Vertical placement of a card in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Offset of the top edge from the top of the document.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl Extent {
    /// Create an extent.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Offset of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether `y` lies on or between the edges.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// One product card in the grid.
pub trait ProductCard: Clone {
    /// Category attribute; empty when the card has none.
    fn category(&self) -> String;

    /// Title text; empty when the card has no title element.
    fn title(&self) -> String;

    /// Whether the card is currently displayed.
    fn is_shown(&self) -> bool;

    /// Show or hide the card.
    fn set_shown(&self, shown: bool);

    /// Set the horizontal gap after the card (a CSS length).
    fn set_trailing_gap(&self, gap: &str);

    /// Current vertical placement.
    fn extent(&self) -> Extent;
}

/// The element holding the product cards.
pub trait CardContainer {
    /// Card handle type.
    type Card: ProductCard;

    /// All cards in current display order.
    fn cards(&self) -> Vec<Self::Card>;

    /// Move `card` to the end of the container.
    fn append(&self, card: &Self::Card);
}

/// The collapsible search input.
pub trait SearchBox {
    /// Current query text.
    fn query(&self) -> String;

    /// Empty the input.
    fn clear(&self);

    /// Whether the input is currently expanded.
    fn is_open(&self) -> bool;

    /// Expand or collapse the input.
    fn set_open(&self, open: bool);

    /// Move keyboard focus into the input.
    fn focus(&self);
}
