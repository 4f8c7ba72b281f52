//! Products Domain
//!
//! Product catalog backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Controller  │  ← ProductDto <-> Product (adapter)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use case   │  ← Price validation, existence checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Gateway   │  ← Storage trait + MongoDB implementation (mapper)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Money, DTO, stored entity
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, MongoProductGateway, ProductController};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let gateway = MongoProductGateway::new(&db);
//! gateway.init_indexes().await?;
//!
//! let router = handlers::router(ProductController::new(gateway));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod money;
pub mod mongodb;
pub mod repository;
pub mod use_case;

pub use adapter::ProductAdapter;
pub use controller::ProductController;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use mapper::ProductMapper;
pub use models::{Product, ProductCategory, ProductDto, ProductEntity, ProductFilter};
pub use money::{Currency, Money};
pub use mongodb::MongoProductGateway;
pub use repository::ProductGateway;
pub use use_case::ProductUseCase;
