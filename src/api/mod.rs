pub mod author;
pub mod book;
pub mod health;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(book::index))
        // Health check
        .route("/health", get(health::health_check))
        // Authors
        .route("/authors", get(author::author_list))
        .route(
            "/author/create",
            get(author::author_create_get).post(author::author_create_post),
        )
        .route("/author/:id", get(author::author_detail))
        .route(
            "/author/:id/delete",
            get(author::author_delete_get).post(author::author_delete_post),
        )
        .route(
            "/author/:id/update",
            get(author::author_update_get).post(author::author_update_post),
        )
        // Books (stubs)
        .route("/books", get(book::book_list))
        .route(
            "/book/create",
            get(book::book_create_get).post(book::book_create_post),
        )
        .route("/book/:id", get(book::book_detail))
        .route(
            "/book/:id/delete",
            get(book::book_delete_get).post(book::book_delete_post),
        )
        .route(
            "/book/:id/update",
            get(book::book_update_get).post(book::book_update_post),
        )
        .with_state(db)
}
