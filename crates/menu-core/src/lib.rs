//! Domain logic for the restaurant menu widget.
//!
//! Everything here is independent of the browser. The page is reached only
//! through small traits, so the same code runs under `cargo test` with
//! in-memory fakes and in the wasm module with `web-sys` adapters.
//!
//! - **Catalog**: category filter, title search, the spacing pass, and
//!   scroll-driven button highlighting
//! - **Cart**: line items mirrored to durable storage and redrawn on change
//! - **Slider**: wrapping slide index with a suspendable auto-advance timer
//!
//! # Example
//!
//! ```rust
//! use menu_core::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Biryani", Money::whole(100));
//! cart.add_item("Biryani", Money::whole(100));
//! cart.add_item("Tea", Money::whole(50));
//!
//! assert_eq!(cart.total(), Money::whole(250));
//! assert_eq!(cart.item_count(), 3);
//! ```

pub mod config;
pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod slider;

#[cfg(test)]
mod testing;

pub use config::WidgetConfig;
pub use error::MenuError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::WidgetConfig;
    pub use crate::error::MenuError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        CardContainer, CatalogView, Category, CategoryButton, Extent, ProductCard, SearchBox,
        SpacingRule, Viewport,
    };

    // Cart
    pub use crate::cart::{Cart, CartPanel, CartStore, CartSurface, LineItem, Navigator, PanelRow};

    // Slider
    pub use crate::slider::{SlideDeck, SliderController, SliderState, Ticker};
}
