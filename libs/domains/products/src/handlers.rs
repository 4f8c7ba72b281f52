//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    AppJson, AppQuery,
};
use utoipa::OpenApi;

use crate::controller::ProductController;
use crate::error::{ProductError, ProductResult};
use crate::models::{ProductCategory, ProductDto, ProductFilter};
use crate::money::Currency;
use crate::repository::ProductGateway;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductDto, ProductCategory, Currency),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<G: ProductGateway + 'static>(controller: ProductController<G>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(controller)
}

/// List products, optionally by category
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductDto>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<G: ProductGateway>(
    State(controller): State<ProductController<G>>,
    AppQuery(filter): AppQuery<ProductFilter>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    let products = controller.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<G: ProductGateway>(
    State(controller): State<ProductController<G>>,
    AppJson(input): AppJson<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let product = controller.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<G: ProductGateway>(
    State(controller): State<ProductController<G>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductDto>> {
    let product = controller.get_product(&id).await?;
    Ok(Json(product))
}

/// Replace a product; responds with the submitted representation
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<G: ProductGateway>(
    State(controller): State<ProductController<G>>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = controller.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<G: ProductGateway>(
    State(controller): State<ProductController<G>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    // Lost a race with another delete.
    if !controller.delete_product(&id).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
