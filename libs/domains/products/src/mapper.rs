//! Conversion between the stored document and the domain entity

use uuid::Uuid;

use crate::models::{Product, ProductEntity};
use crate::money::Money;

pub struct ProductMapper;

impl ProductMapper {
    pub fn to_domain(entity: ProductEntity) -> Product {
        Product {
            id: Some(entity.id),
            name: entity.name,
            description: entity.description,
            price: Money::create(entity.price),
            category: entity.category,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }

    pub fn to_domain_list(entities: Vec<ProductEntity>) -> Vec<Product> {
        entities.into_iter().map(Self::to_domain).collect()
    }

    /// Products without an id get a fresh UUID v7.
    pub fn to_entity(product: &Product) -> ProductEntity {
        let id = product
            .id
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        ProductEntity {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.value(),
            category: product.category,
            image_url: product.image_url.clone(),
            created_at: product.created_at,
        }
    }
}
