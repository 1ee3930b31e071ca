//! Write-through cart store.

use menu_observability::StructuredLogger;
use menu_store::{Cache, KeyValueStore};

use crate::cart::{Cart, CartPanel, CartSurface, LineItem, Navigator};
use crate::config::WidgetConfig;
use crate::error::MenuError;
use crate::money::Money;

/// The cart plus its durable mirror and render targets.
///
/// Every mutation persists the whole cart and then re-renders the badge and
/// panel. Nothing is cached between renders: counts and totals are derived
/// from the line items each time.
pub struct CartStore<S, V, N> {
    cart: Cart,
    cache: Cache<S>,
    key: String,
    surface: V,
    navigator: N,
    landing_url: String,
    currency_label: String,
    empty_message: String,
    logger: StructuredLogger,
}

impl<S, V, N> CartStore<S, V, N>
where
    S: KeyValueStore,
    V: CartSurface,
    N: Navigator,
{
    /// Load the cart from `store` and draw it.
    ///
    /// A missing or unreadable snapshot starts an empty cart.
    pub fn init(
        store: S,
        surface: V,
        navigator: N,
        config: &WidgetConfig,
        logger: StructuredLogger,
    ) -> Self {
        let logger = logger.for_component("cart");
        let cache = Cache::new(store);
        let cart = load(&cache, &config.storage_key, &logger);

        let store = Self {
            cart,
            cache,
            key: config.storage_key.clone(),
            surface,
            navigator,
            landing_url: config.landing_url.clone(),
            currency_label: config.currency_label.clone(),
            empty_message: config.empty_cart_message.clone(),
            logger,
        };
        store.refresh();
        store
    }

    /// Drop in-memory state, reload from storage and redraw.
    pub fn reset(&mut self) {
        self.cart = load(&self.cache, &self.key, &self.logger);
        self.refresh();
    }

    /// Add one unit of `name` at `unit_price` (ignored on repeat adds).
    pub fn add_item(&mut self, name: &str, unit_price: Money) {
        let quantity = self.cart.add_item(name, unit_price);
        self.logger
            .debug_builder("item added")
            .field("name", name)
            .field_i64("qty", i64::from(quantity))
            .emit();
        self.commit();
    }

    /// Adjust the quantity of `name`; below 1 removes it. Unknown names are ignored.
    pub fn change_quantity(&mut self, name: &str, delta: i64) {
        match self.cart.change_quantity(name, delta) {
            Ok(Some(_)) => self.commit(),
            Ok(None) => {
                // Already gone from the model; remove_item does the bookkeeping.
                self.remove_item(name);
            }
            Err(e) => self.logger.debug(&e.to_string()),
        }
    }

    /// Remove the item named `name`.
    pub fn remove_item(&mut self, name: &str) {
        self.cart.remove_item(name);
        self.commit();
    }

    /// Empty the cart and leave for the landing page.
    ///
    /// Does nothing at all when the cart is already empty. Returns whether
    /// a checkout happened.
    pub fn checkout(&mut self) -> bool {
        if self.cart.is_empty() {
            return false;
        }

        self.cart.clear();
        self.commit();
        self.logger.info("checked out");
        self.navigator.navigate(&self.landing_url);
        true
    }

    /// Current total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Current badge count.
    pub fn badge_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Current line items.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The cart model.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Panel projection of the current cart.
    pub fn panel(&self) -> CartPanel {
        CartPanel::from_cart(&self.cart, &self.currency_label, &self.empty_message)
    }

    /// Redraw the badge and the panel.
    pub fn refresh(&self) {
        self.render_badge();
        self.render_panel();
    }

    /// Redraw the badge, skipping pages without one.
    pub fn render_badge(&self) {
        let result = self.surface.render_badge(self.badge_count());
        self.note_render("badge", result);
    }

    /// Rebuild the panel, skipping pages without one.
    pub fn render_panel(&self) {
        let result = self.surface.render_panel(&self.panel());
        self.note_render("panel", result);
    }

    /// The render surface.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    fn commit(&self) {
        self.persist();
        self.refresh();
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            self.logger
                .warn_builder("cart not saved")
                .field("key", self.key.as_str())
                .field("error", e.to_string())
                .emit();
        }
    }

    fn note_render(&self, target: &str, result: Result<(), MenuError>) {
        match result {
            Ok(()) => {}
            Err(e) if e.is_missing_target() => {
                self.logger.debug_builder("render skipped").field("target", target).emit();
            }
            Err(e) => {
                self.logger
                    .warn_builder("render failed")
                    .field("target", target)
                    .field("error", e.to_string())
                    .emit();
            }
        }
    }
}

fn load<S: KeyValueStore>(cache: &Cache<S>, key: &str, logger: &StructuredLogger) -> Cart {
    match cache.get::<Vec<LineItem>>(key) {
        Ok(Some(records)) => Cart::from_records(records),
        Ok(None) => Cart::new(),
        Err(e) => {
            logger
                .warn_builder("stored cart unreadable, starting empty")
                .field("key", key)
                .field("error", e.to_string())
                .emit();
            Cart::new()
        }
    }
}
