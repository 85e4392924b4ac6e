//! Request extractors
//!
//! axum's stock extractors reject with plain-text responses. These wrappers
//! turn every malformed body, path or query into a `400` problem document.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor and responder with problem-details rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameters, e.g. the `{id}` in `/recipes/{id}`.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(rejection) => {
                Err(AppError::bad_request(rejection.body_text()).with_source(rejection))
            }
        }
    }
}

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Query(value)),
            Err(rejection) => {
                Err(AppError::bad_request(rejection.body_text()).with_source(rejection))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(body: &'static str, content_type: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let Json(payload) =
            Json::<Payload>::from_request(request(r#"{"name":"Milk"}"#, Some("application/json")), &())
                .await
                .unwrap();
        assert_eq!(payload.name, "Milk");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let err = Json::<Payload>::from_request(request("{not json", Some("application/json")), &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_query_is_bad_request() {
        #[derive(Debug, Deserialize)]
        struct Search {
            #[allow(dead_code)]
            id: i32,
        }

        let (mut parts, _) = Request::builder()
            .uri("/users?id=abc")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let err = Query::<Search>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let err = Json::<Payload>::from_request(request(r#"{"name":"Milk"}"#, None), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
