//! Product catalog module.
//!
//! Contains the card surface traits, category filtering, free-text search,
//! the spacing pass, and scroll-driven category highlighting.

mod category;
mod filter;
mod layout;
mod scroll;
mod search;
mod surface;
mod view;

pub use category::{highlight_matching, highlight_only, Category, CategoryButton, ALL};
pub use filter::{apply_filter, shuffle};
pub use layout::{SpacingRule, NO_GAP};
pub use scroll::{active_category_at, Viewport};
pub use search::{apply_search, title_matches};
pub use surface::{CardContainer, Extent, ProductCard, SearchBox};
pub use view::CatalogView;
