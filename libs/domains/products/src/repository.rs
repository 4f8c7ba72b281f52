use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductFilter};

/// Storage gateway for products
///
/// The use case only talks to this trait; the MongoDB implementation lives in
/// [`crate::mongodb`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Get a product by ID, `None` when it does not exist
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// List products matching a filter
    async fn get_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Persist a new product and return it with its assigned id
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Replace the product stored under `id`
    async fn update(&self, id: &str, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID; `false` when nothing was removed
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}
