//! Scroll-driven category detection.

use crate::catalog::surface::ProductCard;

/// Scroll position and size of the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
    /// Height of the visible area.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// Document offset of the viewport's vertical midpoint.
    pub fn reference(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }
}

/// Category of the visible card under `reference`.
///
/// Cards are scanned in document order and the last visible card whose
/// extent contains the point wins. Hidden cards never match.
pub fn active_category_at<C: ProductCard>(cards: &[C], reference: f64) -> Option<String> {
    cards
        .iter()
        .rev()
        .find(|card| card.extent().contains(reference) && card.is_shown())
        .map(|card| card.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::surface::Extent;
    use crate::testing::FakeGrid;

    fn stacked() -> FakeGrid {
        let grid = FakeGrid::new(&[("Pizza", "A"), ("Burgers", "B"), ("Drinks", "C")]);
        grid.card("A").place(Extent::new(0.0, 100.0));
        grid.card("B").place(Extent::new(100.0, 100.0));
        grid.card("C").place(Extent::new(200.0, 100.0));
        grid
    }

    #[test]
    fn test_reference_is_viewport_midpoint() {
        assert_eq!(Viewport::new(300.0, 800.0).reference(), 700.0);
    }

    #[test]
    fn test_card_under_reference() {
        let grid = stacked();
        let cards = grid.cards_snapshot();
        assert_eq!(active_category_at(&cards, 150.0).as_deref(), Some("Burgers"));
        assert_eq!(active_category_at(&cards, 999.0), None);
    }

    #[test]
    fn test_boundary_goes_to_later_card() {
        let grid = stacked();
        let cards = grid.cards_snapshot();
        assert_eq!(active_category_at(&cards, 100.0).as_deref(), Some("Burgers"));
    }

    #[test]
    fn test_hidden_cards_ignored() {
        let grid = stacked();
        grid.card("B").set_shown(false);
        let cards = grid.cards_snapshot();
        assert_eq!(active_category_at(&cards, 150.0), None);
        assert_eq!(active_category_at(&cards, 100.0).as_deref(), Some("Pizza"));
    }
}
