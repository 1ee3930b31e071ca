//! Browser entry point for the restaurant menu widget.
//!
//! On wasm32 this crate boots the widget when the page has loaded:
//!
//! - reads an optional JSON configuration from `<body data-menu-config>`
//! - builds the catalog, cart and slider over `web-sys` adapters
//! - installs the page's event listeners
//! - exposes `filterMenu`, `addToCart` and the other operations both as
//!   module exports and on `window` for inline markup handlers
//!
//! Configuration parsing is target-independent and tested natively.

pub mod config;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod exports;

pub use config::{PageConfig, Selectors, CONFIG_ATTRIBUTE};

#[cfg(target_arch = "wasm32")]
pub use exports::{
    add_to_cart, change_slide, checkout, current_slide, filter_menu, remove_from_cart,
    search_menu, toggle_search, update_qty,
};
