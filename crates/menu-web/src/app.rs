//! Page-wide widget state and its lifecycle.

use std::cell::RefCell;

use menu_core::prelude::*;
use menu_observability::StructuredLogger;
use menu_store::{KeyValueStore, LocalStorage, MemoryStore, StoreError};

use crate::dom::{
    DomButton, DomCartSurface, DomGrid, DomSearchBox, DomSlideDeck, IntervalTimer,
    LocationNavigator,
};

pub type Catalog = CatalogView<DomGrid, DomButton>;
pub type Slider = SliderController<DomSlideDeck, IntervalTimer>;
pub type Store = CartStore<PageStore, DomCartSurface, LocationNavigator>;

thread_local! {
    static APP: RefCell<Option<MenuApp>> = const { RefCell::new(None) };
}

/// Install `app` as the page's widget, replacing (and stopping) any previous one.
pub fn init(app: MenuApp) {
    APP.with(|slot| {
        let previous = slot.borrow_mut().replace(app);
        drop(previous);
    });
}

/// Tear the widget down. Its timer is cleared; later calls become no-ops.
pub fn reset() {
    APP.with(|slot| {
        let previous = slot.borrow_mut().take();
        drop(previous);
    });
}

/// Run `f` against the installed widget.
///
/// Returns `None` when nothing is installed yet or when the widget is
/// already borrowed further up the stack.
pub fn with_app<R>(f: impl FnOnce(&mut MenuApp) -> R) -> Option<R> {
    APP.with(|slot| match slot.try_borrow_mut() {
        Ok(mut app) => app.as_mut().map(f),
        Err(_) => None,
    })
}

/// `localStorage` when the browser allows it, otherwise a page-lifetime map.
pub enum PageStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open(logger: &StructuredLogger) -> Self {
        match LocalStorage::open() {
            Ok(storage) => PageStore::Local(storage),
            Err(e) => {
                logger
                    .warn_builder("localStorage unavailable, cart will not survive reloads")
                    .field("error", e.to_string())
                    .emit();
                PageStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            PageStore::Local(store) => store.get_raw(key),
            PageStore::Memory(store) => store.get_raw(key),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            PageStore::Local(store) => store.set_raw(key, value),
            PageStore::Memory(store) => store.set_raw(key, value),
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self {
            PageStore::Local(store) => store.delete(key),
            PageStore::Memory(store) => store.delete(key),
        }
    }
}

/// Everything the widget owns on one page.
///
/// The catalog, search box and slider are optional: pages without a product
/// grid or hero slider simply leave them out. The cart is always present.
pub struct MenuApp {
    logger: StructuredLogger,
    catalog: Option<Catalog>,
    search: Option<DomSearchBox>,
    cart: Store,
    slider: Option<Slider>,
}

impl MenuApp {
    pub fn new(
        logger: StructuredLogger,
        catalog: Option<Catalog>,
        search: Option<DomSearchBox>,
        cart: Store,
        slider: Option<Slider>,
    ) -> Self {
        Self {
            logger: logger.for_component("page"),
            catalog,
            search,
            cart,
            slider,
        }
    }

    /// Initial page pass: default catalog view and slider auto-advance.
    pub fn start(&mut self) {
        if let Some(catalog) = self.catalog.as_mut() {
            catalog.filter(&Category::All);
        }
        if let Some(slider) = self.slider.as_mut() {
            slider.start();
        }
        self.logger
            .info_builder("menu widget ready")
            .field_bool("catalog", self.catalog.is_some())
            .field_bool("slider", self.slider.is_some())
            .field_i64("cart_items", i64::try_from(self.cart.badge_count()).unwrap_or(i64::MAX))
            .emit();
    }

    pub fn filter(&mut self, label: &str) {
        if let Some(catalog) = self.catalog.as_mut() {
            catalog.filter(&Category::parse(label));
        }
    }

    pub fn toggle_search(&mut self) {
        if let (Some(catalog), Some(search)) = (self.catalog.as_mut(), self.search.as_ref()) {
            catalog.toggle_search(search);
        }
    }

    pub fn search(&mut self) {
        if let (Some(catalog), Some(search)) = (self.catalog.as_ref(), self.search.as_ref()) {
            catalog.search(&search.query());
        }
    }

    pub fn select_button(&mut self, index: usize) {
        if let Some(catalog) = self.catalog.as_ref() {
            catalog.select_button(index);
        }
    }

    pub fn scrolled(&mut self, viewport: Viewport) {
        if let Some(catalog) = self.catalog.as_ref() {
            catalog.on_scroll(viewport);
        }
    }

    pub fn add_to_cart(&mut self, name: &str, price: f64) {
        if !price.is_finite() {
            self.logger
                .warn_builder("ignoring add with unusable price")
                .field("name", name)
                .field("price", price.to_string())
                .emit();
            return;
        }
        self.cart.add_item(name, Money::from_major(price));
    }

    pub fn update_quantity(&mut self, name: &str, delta: i64) {
        self.cart.change_quantity(name, delta);
    }

    pub fn remove_from_cart(&mut self, name: &str) {
        self.cart.remove_item(name);
    }

    pub fn checkout(&mut self) {
        self.cart.checkout();
    }

    /// Another tab changed the stored cart.
    pub fn reload_cart(&mut self) {
        self.logger.debug("stored cart changed elsewhere, reloading");
        self.cart.reset();
    }

    pub fn change_slide(&mut self, direction: isize) {
        if let Some(slider) = self.slider.as_mut() {
            slider.change(direction);
        }
    }

    pub fn goto_slide(&mut self, index: isize) {
        if let Some(slider) = self.slider.as_mut() {
            slider.goto(index);
        }
    }

    pub fn tick_slider(&mut self) {
        if let Some(slider) = self.slider.as_mut() {
            slider.tick();
        }
    }

    pub fn hover_slider(&mut self, hovered: bool) {
        if let Some(slider) = self.slider.as_mut() {
            if hovered {
                slider.suspend();
            } else {
                slider.resume();
            }
        }
    }
}
