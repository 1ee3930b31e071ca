//! Spacing pass over the visible cards.

use crate::catalog::surface::{CardContainer, ProductCard};

/// Gap written to the last card of a visual row.
pub const NO_GAP: &str = "0";

/// "N cards per visual row" gap rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingRule {
    per_row: usize,
    gap: String,
}

impl SpacingRule {
    /// Create a rule. A row size of zero is treated as one.
    pub fn new(per_row: usize, gap: impl Into<String>) -> Self {
        Self {
            per_row: per_row.max(1),
            gap: gap.into(),
        }
    }

    /// Gap for the visible card at zero-based position `index`.
    pub fn gap_for(&self, index: usize) -> &str {
        if index % self.per_row == self.per_row - 1 {
            NO_GAP
        } else {
            &self.gap
        }
    }

    /// Re-derive every visible card's gap from its current display position.
    ///
    /// Must run after any change to card visibility or order. Hidden cards
    /// are skipped and keep whatever gap they had. Returns the visible count.
    pub fn apply<C: CardContainer>(&self, container: &C) -> usize {
        let mut visible = 0;
        for card in container.cards().iter().filter(|c| c.is_shown()) {
            card.set_trailing_gap(self.gap_for(visible));
            visible += 1;
        }
        visible
    }
}

impl Default for SpacingRule {
    fn default() -> Self {
        Self::new(3, "1%")
    }
}
