//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request itself is at fault. The message is shown to the client.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// A dependency failed. Only `message` reaches the client; `source` is
  /// logged.
  #[error("{message}: {source}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Internal { message, source: Box::new(e) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::Internal { message, source } => {
        tracing::error!(error = %source, "{message}");
        (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
