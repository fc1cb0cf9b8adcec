//! JSON body extractor that ignores the request's `Content-Type`.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Decodes the request body as JSON regardless of `Content-Type`.
///
/// Unlike `axum::Json`, every failure (unreadable body, syntax error, wrong
/// field types) is rejected with a 400 and the same `Bad request` body, so
/// clients that omit the header or send `text/plain` are treated alike.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<NewThing>) -> String {
///     format!("Creating {}", payload.name)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            AppError::BadRequest("Bad request".to_string())
        })?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
        price: f64,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_decodes_without_content_type() {
        let JsonBody(payload) =
            JsonBody::<Payload>::from_request(request(None, r#"{"name":"a","price":1.5}"#), &())
                .await
                .unwrap();

        assert_eq!(
            payload,
            Payload {
                name: "a".to_string(),
                price: 1.5
            }
        );
    }

    #[tokio::test]
    async fn test_rejects_malformed_json_with_400() {
        let rejection =
            JsonBody::<Payload>::from_request(request(Some("application/json"), "{"), &())
                .await
                .err()
                .unwrap();

        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_type_mismatch_with_400() {
        let rejection = JsonBody::<Payload>::from_request(
            request(None, r#"{"name":"a","price":"cheap"}"#),
            &(),
        )
        .await
        .err()
        .unwrap();

        assert!(matches!(rejection, AppError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn test_rejects_empty_body() {
        let rejection = JsonBody::<Payload>::from_request(request(None, ""), &())
            .await
            .err()
            .unwrap();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
