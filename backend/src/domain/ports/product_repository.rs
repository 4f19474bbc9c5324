//! Driven port for inventory products.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::billing::{Product, ProductDraft};

/// Store of inventory products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in insertion order.
    async fn list(&self) -> Result<Vec<Product>, Error>;

    /// Create a product from a draft.
    async fn create(&self, draft: ProductDraft) -> Result<Product, Error>;
}
