use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::money::Money;

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    Snack,
    Garnish,
    Drink,
    Dessert,
}

/// Product domain entity
///
/// `id` stays `None` until the product has been persisted once.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: ProductCategory,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Product as exchanged over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Assigned by storage; omit when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// Price in BRL
    #[serde(deserialize_with = "deserialize_amount")]
    #[schema(value_type = f64, example = 12.5)]
    pub price: f64,
    pub category: ProductCategory,
    pub image_url: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Product as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: ProductCategory,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Filter by category
    pub category: Option<ProductCategory>,
}

/// Accept any JSON value for a price; anything that is not a number becomes `NaN`
/// and is rejected later by [`Money::validate`].
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dto_json(price: serde_json::Value) -> serde_json::Value {
        json!({
            "name": "Coxinha",
            "description": "Chicken croquette",
            "price": price,
            "category": "snack",
            "imageUrl": "https://cdn.example.com/coxinha.png",
            "createdAt": "2024-03-01T12:00:00Z"
        })
    }

    #[test]
    fn test_category_serializes_snake_case() {
        assert_eq!(serde_json::to_value(ProductCategory::Dessert).unwrap(), json!("dessert"));
        assert_eq!(ProductCategory::from_str("garnish").unwrap(), ProductCategory::Garnish);
        assert!(ProductCategory::from_str("pizza").is_err());
    }

    #[test]
    fn test_dto_reads_camel_case_fields() {
        let dto: ProductDto = serde_json::from_value(dto_json(json!(8.5))).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.price, 8.5);
        assert_eq!(dto.category, ProductCategory::Snack);
        assert_eq!(dto.image_url, "https://cdn.example.com/coxinha.png");
        assert_eq!(dto.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_dto_non_numeric_price_becomes_nan() {
        let dto: ProductDto = serde_json::from_value(dto_json(json!("abc"))).unwrap();
        assert!(dto.price.is_nan());
        assert!(Money::create(dto.price).validate().is_err());
    }

    #[test]
    fn test_dto_created_at_defaults_to_now() {
        let mut body = dto_json(json!(3));
        body.as_object_mut().unwrap().remove("createdAt");

        let before = Utc::now();
        let dto: ProductDto = serde_json::from_value(body).unwrap();
        assert!(dto.created_at >= before);
    }

    #[test]
    fn test_dto_rejects_unknown_category() {
        let mut body = dto_json(json!(3));
        body["category"] = json!("pizza");
        assert!(serde_json::from_value::<ProductDto>(body).is_err());
    }

    #[test]
    fn test_entity_stores_id_as_underscore_id() {
        let entity = ProductEntity {
            id: "abc".to_string(),
            name: "Guaraná".to_string(),
            description: "Soda".to_string(),
            price: 6.0,
            category: ProductCategory::Drink,
            image_url: String::new(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["_id"], "abc");
        assert!(value.get("id").is_none());
        assert!(value.get("imageUrl").is_some());
    }
}
