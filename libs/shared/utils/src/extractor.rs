//! Request extractors whose rejections are reported as `AppError`, so a
//! malformed body or path still gets the `{"error": ...}` response.

use axum::extract::{FromRequest, FromRequestParts};

use shared_models::error::AppError;

/// `axum::Json` with the rejection mapped to `AppError::InvalidInput`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with the rejection mapped to `AppError::InvalidInput`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
