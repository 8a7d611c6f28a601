//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::header,
    Json,
};

use crate::application::dto::request::EnrollRequest;
use crate::shared::error::AppError;

/// Enrollment parameters read from a JSON body, a urlencoded form body, or
/// the query string, chosen by the request's `Content-Type`.
///
/// Form requests also see the query string: query pairs and body pairs are
/// merged, and the first occurrence of a key wins. Any missing parameter is
/// rejected with `AppError::BadRequest`.
#[derive(Debug, Clone)]
pub struct EnrollmentParams(pub EnrollRequest);

impl<S> FromRequest<S> for EnrollmentParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(params) = Json::<EnrollRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(Self(params));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let query = req.uri().query().unwrap_or_default().to_owned();
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return merge_form_params(&query, &body).map(Self);
        }

        let Query(params) = Query::<EnrollRequest>::try_from_uri(req.uri())
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(Self(params))
    }
}

/// Deserialize query pairs followed by body pairs, keeping the first value per key.
fn merge_form_params(query: &str, body: &[u8]) -> Result<EnrollRequest, AppError> {
    let query_pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| AppError::BadRequest(format!("Failed to parse query string: {}", e)))?;
    let body_pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::BadRequest(format!("Failed to parse form body: {}", e)))?;

    let mut params = serde_json::Map::new();
    for (key, value) in query_pairs.into_iter().chain(body_pairs) {
        params
            .entry(key)
            .or_insert(serde_json::Value::String(value));
    }

    serde_json::from_value(serde_json::Value::Object(params)).map_err(|e| {
        AppError::BadRequest(format!("Failed to deserialize form parameters: {}", e))
    })
}
