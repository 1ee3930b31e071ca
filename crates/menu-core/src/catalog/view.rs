//! The catalog view: filter, search, and highlight over one product grid.

use menu_observability::StructuredLogger;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::category::{highlight_matching, highlight_only, Category, CategoryButton, ALL};
use crate::catalog::filter::apply_filter;
use crate::catalog::layout::SpacingRule;
use crate::catalog::scroll::{active_category_at, Viewport};
use crate::catalog::search::apply_search;
use crate::catalog::surface::{CardContainer, SearchBox};
use crate::config::WidgetConfig;

/// Owns the product grid and category buttons of one page.
///
/// Every operation that changes card visibility or order finishes with the
/// spacing pass, so gaps always reflect the current display order.
pub struct CatalogView<G, B, R = StdRng> {
    grid: G,
    buttons: Vec<B>,
    spacing: SpacingRule,
    trailing_category: String,
    rng: R,
    logger: StructuredLogger,
}

impl<G, B> CatalogView<G, B, StdRng>
where
    G: CardContainer,
    B: CategoryButton,
{
    /// Create a view shuffling with an entropy-seeded generator.
    pub fn new(grid: G, buttons: Vec<B>, config: &WidgetConfig, logger: StructuredLogger) -> Self {
        Self::with_rng(grid, buttons, config, logger, StdRng::from_entropy())
    }
}

impl<G, B, R> CatalogView<G, B, R>
where
    G: CardContainer,
    B: CategoryButton,
    R: Rng,
{
    /// Create a view with an explicit random source.
    pub fn with_rng(
        grid: G,
        buttons: Vec<B>,
        config: &WidgetConfig,
        logger: StructuredLogger,
        rng: R,
    ) -> Self {
        Self {
            grid,
            buttons,
            spacing: SpacingRule::new(config.cards_per_row, config.card_gap.clone()),
            trailing_category: config.trailing_category.clone(),
            rng,
            logger: logger.for_component("catalog"),
        }
    }

    /// Show the cards of `category` and highlight its button.
    ///
    /// Returns the number of visible cards.
    pub fn filter(&mut self, category: &Category) -> usize {
        let shown = apply_filter(&self.grid, category, &self.trailing_category, &mut self.rng);
        self.spacing.apply(&self.grid);

        let highlighted = highlight_matching(&self.buttons, category.as_str());
        self.logger
            .debug_builder("filtered")
            .field("category", category.as_str())
            .field_i64("shown", shown as i64)
            .field_i64("highlighted", highlighted as i64)
            .emit();
        shown
    }

    /// Show only the cards whose title contains `query`.
    ///
    /// Returns the number of visible cards.
    pub fn search(&self, query: &str) -> usize {
        let shown = apply_search(&self.grid, query);
        self.spacing.apply(&self.grid);
        self.logger
            .debug_builder("searched")
            .field("query", query)
            .field_i64("shown", shown as i64)
            .emit();
        shown
    }

    /// Open or close the search input.
    ///
    /// Either way the previous query is cleared and the default `All` view
    /// restored. Opening also focuses the input. Returns the new open state.
    pub fn toggle_search<S: SearchBox>(&mut self, search: &S) -> bool {
        let open = !search.is_open();
        search.set_open(open);
        search.clear();
        self.filter(&Category::All);
        if open {
            search.focus();
        }
        open
    }

    /// Highlight the category under the viewport midpoint.
    ///
    /// Highlighting is left alone when no visible card sits under the
    /// midpoint. Returns the category that was highlighted, if any.
    pub fn on_scroll(&self, viewport: Viewport) -> Option<String> {
        let cards = self.grid.cards();
        let category = active_category_at(&cards, viewport.reference())?;
        if category.is_empty() || category == ALL {
            return None;
        }
        highlight_matching(&self.buttons, &category);
        Some(category)
    }

    /// Highlight exactly the clicked button.
    pub fn select_button(&self, index: usize) {
        highlight_only(&self.buttons, index);
    }
}
