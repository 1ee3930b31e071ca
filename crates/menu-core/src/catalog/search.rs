//! Free-text search over card titles.

use crate::catalog::surface::{CardContainer, ProductCard};

/// Case-insensitive substring match. An empty query matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_uppercase().contains(&query.to_uppercase())
}

/// Show the cards whose title contains `query`, hide the rest.
///
/// Cards keep their current order. Does not run the spacing pass. Returns
/// the number of cards left visible.
pub fn apply_search<C: CardContainer>(container: &C, query: &str) -> usize {
    let mut shown = 0;
    for card in container.cards() {
        let matched = title_matches(&card.title(), query);
        card.set_shown(matched);
        if matched {
            shown += 1;
        }
    }
    shown
}
