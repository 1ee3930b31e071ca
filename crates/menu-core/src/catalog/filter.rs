//! Category filtering and the shuffled "All" view.

use rand::Rng;

use crate::catalog::category::Category;
use crate::catalog::surface::{CardContainer, ProductCard};

/// Uniform in-place Fisher-Yates shuffle.
///
/// For each index `i` from the last down to 1, swap with an index drawn
/// uniformly from `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Show and reorder the cards for `category`.
///
/// - `All`: every card shown; cards outside `trailing` are shuffled and
///   placed first, then the `trailing` cards in their existing order.
/// - a named category: matching cards shown, everything else hidden, and
///   the shown cards moved to the end in ascending title order.
///
/// Does not run the spacing pass; callers follow up with it. Returns the
/// number of cards left visible.
pub fn apply_filter<C, R>(container: &C, category: &Category, trailing: &str, rng: &mut R) -> usize
where
    C: CardContainer,
    R: Rng + ?Sized,
{
    let cards = container.cards();

    match category {
        Category::All => {
            let (trailing_cards, mut others): (Vec<_>, Vec<_>) =
                cards.into_iter().partition(|c| c.category() == trailing);

            shuffle(&mut others, rng);

            let total = others.len() + trailing_cards.len();
            for card in others.iter().chain(trailing_cards.iter()) {
                card.set_shown(true);
                container.append(card);
            }
            total
        }
        Category::Named(_) => {
            let mut shown = Vec::new();
            for card in cards {
                let matched = category.matches(&card.category());
                card.set_shown(matched);
                if matched {
                    shown.push((card.title(), card));
                }
            }

            // Stable, so equal titles keep their relative order.
            shown.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (_, card) in &shown {
                container.append(card);
            }
            shown.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGrid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn menu() -> FakeGrid {
        FakeGrid::new(&[
            ("Drinks", "Tea"),
            ("Pizza", "Pepperoni"),
            ("Burgers", "Zinger"),
            ("Drinks", "Coffee"),
            ("Pizza", "Fajita"),
            ("Burgers", "Beef"),
            ("Pizza", "Margherita"),
        ])
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_named_category_shows_matches_in_title_order() {
        let grid = menu();
        let mut rng = StdRng::seed_from_u64(3);

        let shown = apply_filter(&grid, &Category::parse("Pizza"), "Drinks", &mut rng);

        assert_eq!(shown, 3);
        assert_eq!(grid.shown_titles(), vec!["Fajita", "Margherita", "Pepperoni"]);
        assert!(grid.shown_categories().iter().all(|c| c == "Pizza"));
    }

    #[test]
    fn test_named_category_without_matches() {
        let grid = menu();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(apply_filter(&grid, &Category::parse("Desserts"), "Drinks", &mut rng), 0);
        assert!(grid.shown_titles().is_empty());
    }

    #[test]
    fn test_title_sort_is_case_sensitive() {
        let grid = FakeGrid::new(&[("Pizza", "apple"), ("Pizza", "Zebra"), ("Pizza", "Banana")]);
        let mut rng = StdRng::seed_from_u64(3);

        apply_filter(&grid, &Category::parse("Pizza"), "Drinks", &mut rng);
        assert_eq!(grid.shown_titles(), vec!["Banana", "Zebra", "apple"]);
    }

    #[test]
    fn test_all_shows_everything_with_drinks_last() {
        let grid = menu();
        apply_filter(&grid, &Category::parse("Pizza"), "Drinks", &mut StdRng::seed_from_u64(1));

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shown = apply_filter(&grid, &Category::All, "Drinks", &mut rng);
            assert_eq!(shown, 7);

            let categories = grid.shown_categories();
            assert_eq!(categories.len(), 7);
            assert!(categories[..5].iter().all(|c| c != "Drinks"));
            assert_eq!(&categories[5..], &["Drinks", "Drinks"]);

            let mut others: Vec<String> = grid.shown_titles()[..5].to_vec();
            others.sort();
            assert_eq!(others, vec!["Beef", "Fajita", "Margherita", "Pepperoni", "Zinger"]);
        }
    }

    #[test]
    fn test_all_keeps_drinks_relative_order() {
        let grid = menu();
        let mut rng = StdRng::seed_from_u64(11);

        apply_filter(&grid, &Category::All, "Drinks", &mut rng);
        let titles = grid.shown_titles();
        assert_eq!(&titles[5..], &["Tea", "Coffee"]);
    }

    #[test]
    fn test_all_produces_varied_orders() {
        let grid = menu();
        let mut orders = std::collections::HashSet::new();
        for seed in 0..20 {
            apply_filter(&grid, &Category::All, "Drinks", &mut StdRng::seed_from_u64(seed));
            orders.insert(grid.shown_titles());
        }
        assert!(orders.len() > 1);
    }
}
