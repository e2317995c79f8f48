//! Request handlers adapting HTTP queries to the generator.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::ServiceContext;
use crate::error::GenerateError;
use crate::generator::GenerationRequest;
use crate::params::parse_size;

type ApiError = (StatusCode, Json<Value>);

/// Query parameters for `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct QrQuery {
    /// Payload to encode.
    pub data: Option<String>,
    /// Requested size in pixels, unparsed.
    pub size: Option<String>,
}

/// Build a JSON error body.
pub fn err_json(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "status": "error", "error": message })))
}

fn map_generate_error(err: &GenerateError) -> ApiError {
    if err.is_client_error() {
        err_json(StatusCode::BAD_REQUEST, &err.to_string())
    } else {
        err_json(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    }
}

/// GET /health
pub async fn health() -> Json<&'static str> {
    Json("ok")
}

/// GET /?data=..&size=..
pub async fn generate_qr(
    State(ctx): State<ServiceContext>,
    Query(query): Query<QrQuery>,
) -> Result<Response, ApiError> {
    let size = parse_size(query.size.as_deref())
        .map_err(|msg| err_json(StatusCode::BAD_REQUEST, &msg))?;
    let request = GenerationRequest::new(query.data.unwrap_or_default(), size);

    let generator = Arc::clone(&ctx.generator);
    let image = tokio::task::spawn_blocking(move || generator.generate(&request))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "generation task failed");
            err_json(StatusCode::INTERNAL_SERVER_ERROR, "failed to generate image")
        })?
        .map_err(|e| map_generate_error(&e))?;

    Response::builder()
        .header(header::CONTENT_TYPE, image.content_type)
        .body(Body::from(image.bytes))
        .map_err(|e| err_json(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))
}
