//! Widget error types.
//!
//! None of these reach the shopper. Each caller decides how to degrade:
//! skip a render step, fall back to an empty cart, or ignore the request.

use thiserror::Error;

/// Errors that can occur in menu widget operations.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A page region the operation renders into is not on this page.
    #[error("Missing page target: {0}")]
    MissingTarget(&'static str),

    /// Line item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Slide index does not exist.
    #[error("No slide at index {0}")]
    SlideNotFound(isize),

    /// Durable storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] menu_store::StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The page rejected a DOM call (bad selector, failed insert).
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Invalid widget configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MenuError {
    /// Whether this error only means "nothing to render into".
    pub fn is_missing_target(&self) -> bool {
        matches!(self, MenuError::MissingTarget(_))
    }
}
