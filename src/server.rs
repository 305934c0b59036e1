use axum::Router;
use sea_orm::DatabaseConnection;
use std::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api;

/// Build the application router with its database connection
pub fn build_router(db: DatabaseConnection) -> Router {
    api::router(db).layer(TraceLayer::new_for_http())
}

/// Find an available port starting from the preferred port
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind(("0.0.0.0", preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    ((preferred_port + 1)..(preferred_port + 100))
        .find(|&port| TcpListener::bind(("0.0.0.0", port)).is_ok())
}
