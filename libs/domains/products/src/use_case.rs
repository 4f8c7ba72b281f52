//! Product business rules
//!
//! Every operation receives the gateway explicitly. Writes validate the price
//! first; update and delete confirm the product exists before touching storage.

use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter};
use crate::repository::ProductGateway;

pub struct ProductUseCase;

impl ProductUseCase {
    #[instrument(skip(gateway))]
    pub async fn get_product_by_id<G>(id: &str, gateway: &G) -> ProductResult<Product>
    where
        G: ProductGateway + ?Sized,
    {
        gateway
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(gateway))]
    pub async fn get_all_products<G>(filter: ProductFilter, gateway: &G) -> ProductResult<Vec<Product>>
    where
        G: ProductGateway + ?Sized,
    {
        gateway.get_all(filter).await
    }

    #[instrument(skip(product, gateway), fields(product_name = %product.name))]
    pub async fn create_product<G>(product: Product, gateway: &G) -> ProductResult<Product>
    where
        G: ProductGateway + ?Sized,
    {
        product.price.validate()?;
        gateway.create(product).await
    }

    /// Returns the product as supplied, not the stored copy.
    #[instrument(skip(product, gateway))]
    pub async fn update_product<G>(id: &str, product: Product, gateway: &G) -> ProductResult<Product>
    where
        G: ProductGateway + ?Sized,
    {
        product.price.validate()?;
        Self::get_product_by_id(id, gateway).await?;
        gateway.update(id, product.clone()).await?;
        Ok(product)
    }

    #[instrument(skip(gateway))]
    pub async fn delete_product<G>(id: &str, gateway: &G) -> ProductResult<bool>
    where
        G: ProductGateway + ?Sized,
    {
        Self::get_product_by_id(id, gateway).await?;
        gateway.delete(id).await
    }
}
