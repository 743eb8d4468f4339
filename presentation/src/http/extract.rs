//! Request body extraction for the POST routes.
//!
//! Bodies may be JSON or URL-encoded form data. A request without a body
//! yields the default value; a body that cannot be parsed is rejected with
//! its own status code and an `{"error": ...}` message.

use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, async_trait};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// JSON or form body, defaulting when the request has none
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyKind::of(req.headers());

        if kind == BodyKind::Form {
            return Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| Self(value))
                .map_err(|e| reject(e.status(), e.body_text()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| reject(e.status(), e.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match kind {
            BodyKind::Json => Json::<T>::from_bytes(&bytes)
                .map(|Json(value)| Self(value))
                .map_err(|e| {
                    debug!("Rejected request body: {}", e.body_text());
                    reject(e.status(), e.body_text())
                }),
            _ => Err(reject(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected `Content-Type: application/json` or `application/x-www-form-urlencoded`"
                    .to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        else {
            return Self::Other;
        };

        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/x-www-form-urlencoded" {
            Self::Form
        } else if essence == "application/json" || essence.ends_with("+json") {
            Self::Json
        } else {
            Self::Other
        }
    }
}

fn reject(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
