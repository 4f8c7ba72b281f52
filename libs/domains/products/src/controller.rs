use std::sync::Arc;

use tracing::instrument;

use crate::adapter::ProductAdapter;
use crate::error::ProductResult;
use crate::models::{ProductDto, ProductFilter};
use crate::repository::ProductGateway;
use crate::use_case::ProductUseCase;

/// Translates between transport DTOs and the use case
pub struct ProductController<G: ProductGateway> {
    gateway: Arc<G>,
}

impl<G: ProductGateway> Clone for ProductController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: ProductGateway> ProductController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<ProductDto> {
        let product = ProductUseCase::get_product_by_id(id, self.gateway.as_ref()).await?;
        Ok(ProductAdapter::to_dto(&product))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<ProductDto>> {
        let products = ProductUseCase::get_all_products(filter, self.gateway.as_ref()).await?;
        Ok(ProductAdapter::to_dto_list(&products))
    }

    /// Any `id` in the request is discarded; storage assigns one.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> ProductResult<ProductDto> {
        let mut product = ProductAdapter::to_domain(dto);
        product.id = None;
        let created = ProductUseCase::create_product(product, self.gateway.as_ref()).await?;
        Ok(ProductAdapter::to_dto(&created))
    }

    #[instrument(skip(self, dto))]
    pub async fn update_product(&self, id: &str, dto: ProductDto) -> ProductResult<ProductDto> {
        let product = ProductAdapter::to_domain(dto);
        let updated = ProductUseCase::update_product(id, product, self.gateway.as_ref()).await?;
        Ok(ProductAdapter::to_dto(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<bool> {
        ProductUseCase::delete_product(id, self.gateway.as_ref()).await
    }
}
