use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// `Json<T>` whose rejection is an [`AppError`] instead of axum's plain-text body.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<ProductDto>) -> impl IntoResponse { /* ... */ }
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// `Query<T>` whose rejection is an [`AppError`].
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(AppQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    #[derive(Deserialize)]
    struct Params {
        #[allow(dead_code)]
        limit: u32,
    }

    async fn echo(AppQuery(_params): AppQuery<Params>, AppJson(body): AppJson<Payload>) -> String {
        body.name
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    #[tokio::test]
    async fn test_valid_body_and_query() {
        let request = Request::builder()
            .method("POST")
            .uri("/?limit=5")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"fries"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_as_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/?limit=5")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_bad_query_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/?limit=many")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"fries"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
