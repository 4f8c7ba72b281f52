//! MongoDB implementation of ProductGateway

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_document, Document},
    options::{FindOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::mapper::ProductMapper;
use crate::models::{Product, ProductEntity, ProductFilter};
use crate::repository::ProductGateway;

pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductGateway
pub struct MongoProductGateway {
    collection: Collection<ProductEntity>,
}

impl MongoProductGateway {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductEntity>(collection_name);
        Self { collection }
    }

    /// Create the indexes used by listing
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    fn build_filter(filter: &ProductFilter) -> Document {
        let mut doc = doc! {};

        if let Some(category) = filter.category {
            doc.insert("category", category.to_string());
        }

        doc
    }

    /// `$set` of every stored field except `_id` and `createdAt`; creation time is write-once.
    fn update_document(entity: &ProductEntity) -> ProductResult<Document> {
        let mut fields = to_document(entity)?;
        fields.remove("_id");
        fields.remove("createdAt");
        Ok(doc! { "$set": fields })
    }
}

#[async_trait]
impl ProductGateway for MongoProductGateway {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let entity = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(entity.map(ProductMapper::to_domain))
    }

    #[instrument(skip(self))]
    async fn get_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .with_options(options)
            .await?;
        let entities: Vec<ProductEntity> = cursor.try_collect().await?;

        Ok(ProductMapper::to_domain_list(entities))
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let entity = ProductMapper::to_entity(&product);

        self.collection.insert_one(&entity).await?;

        tracing::info!(product_id = %entity.id, "Product created successfully");
        Ok(ProductMapper::to_domain(entity))
    }

    #[instrument(skip(self, product))]
    async fn update(&self, id: &str, product: Product) -> ProductResult<Product> {
        let mut entity = ProductMapper::to_entity(&product);
        entity.id = id.to_string();

        let stored = self
            .collection
            .find_one_and_update(doc! { "_id": id }, Self::update_document(&entity)?)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(ProductMapper::to_domain(stored))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        let deleted = result.deleted_count > 0;
        if deleted {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(deleted)
    }
}
