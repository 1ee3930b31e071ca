//! Shopping cart module.
//!
//! Contains the line item model, the panel projection, the surface traits
//! the cart renders through, and the write-through store.

mod cart;
mod item;
mod panel;
mod store;
mod surface;

pub use cart::Cart;
pub use item::LineItem;
pub use panel::{CartPanel, PanelRow};
pub use store::CartStore;
pub use surface::{CartSurface, Navigator};
