//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3003", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
