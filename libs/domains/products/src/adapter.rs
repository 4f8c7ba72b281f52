//! Conversion between the HTTP representation and the domain entity

use crate::models::{Product, ProductDto};
use crate::money::Money;

pub struct ProductAdapter;

impl ProductAdapter {
    /// The price is wrapped but not validated; that happens in the use case.
    pub fn to_domain(dto: ProductDto) -> Product {
        Product {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            price: Money::create(dto.price),
            category: dto.category,
            image_url: dto.image_url,
            created_at: dto.created_at,
        }
    }

    pub fn to_dto(product: &Product) -> ProductDto {
        ProductDto {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.value(),
            category: product.category,
            image_url: product.image_url.clone(),
            created_at: product.created_at,
        }
    }

    pub fn to_dto_list(products: &[Product]) -> Vec<ProductDto> {
        products.iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductCategory;
    use chrono::Utc;

    fn product(id: Option<&str>, name: &str) -> Product {
        Product {
            id: id.map(str::to_string),
            name: name.to_string(),
            description: "Fried cassava".to_string(),
            price: Money::create(14.9),
            category: ProductCategory::Garnish,
            image_url: "https://cdn.example.com/mandioca.png".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_round_trip_through_dto() {
        let original = product(Some("p-1"), "Mandioca");
        assert_eq!(ProductAdapter::to_domain(ProductAdapter::to_dto(&original)), original);

        let unsaved = product(None, "Mandioca");
        assert_eq!(ProductAdapter::to_domain(ProductAdapter::to_dto(&unsaved)), unsaved);
    }

    #[test]
    fn test_to_dto_unwraps_price() {
        let dto = ProductAdapter::to_dto(&product(Some("p-1"), "Mandioca"));
        assert_eq!(dto.price, 14.9);
        assert_eq!(dto.id.as_deref(), Some("p-1"));
    }

    #[test]
    fn test_to_domain_keeps_invalid_price() {
        let mut dto = ProductAdapter::to_dto(&product(None, "Mandioca"));
        dto.price = -3.0;

        let domain = ProductAdapter::to_domain(dto);
        assert_eq!(domain.price.value(), -3.0);
    }

    #[test]
    fn test_to_dto_list_empty() {
        assert!(ProductAdapter::to_dto_list(&[]).is_empty());
    }

    #[test]
    fn test_to_dto_list_preserves_order() {
        let products = vec![
            product(Some("1"), "Pastel"),
            product(Some("2"), "Brigadeiro"),
            product(Some("3"), "Caldo de cana"),
        ];

        let dtos = ProductAdapter::to_dto_list(&products);
        let names: Vec<_> = dtos.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Pastel", "Brigadeiro", "Caldo de cana"]);
    }
}
