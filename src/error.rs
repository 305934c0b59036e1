//! Application error type
//!
//! Every handler returns `Result<_, AppError>`; the `IntoResponse` impl is
//! the single place errors become HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

use crate::views;

#[derive(Debug)]
pub enum AppError {
    /// Record lookup came back empty
    NotFound(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Database(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, views::error_page(404, &msg)).into_response()
            }
            AppError::Database(msg) => {
                tracing::error!("database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_page(500, "Something went wrong"),
                )
                    .into_response()
            }
        }
    }
}
