//! Book handlers - placeholders until the book pages are built

use axum::extract::Path;

pub async fn index() -> &'static str {
    "NOT IMPLEMENTED: Site Home Page"
}

pub async fn book_list() -> &'static str {
    "NOT IMPLEMENTED: Book List"
}

pub async fn book_detail(Path(id): Path<i32>) -> String {
    format!("NOT IMPLEMENTED: Book Detail: {}", id)
}

pub async fn book_create_get() -> &'static str {
    "NOT IMPLEMENTED: Book create GET"
}

pub async fn book_create_post() -> &'static str {
    "NOT IMPLEMENTED: Book create POST"
}

pub async fn book_delete_get(Path(_id): Path<i32>) -> &'static str {
    "NOT IMPLEMENTED: Book delete GET"
}

pub async fn book_delete_post(Path(_id): Path<i32>) -> &'static str {
    "NOT IMPLEMENTED: Book delete POST"
}

pub async fn book_update_get(Path(_id): Path<i32>) -> &'static str {
    "NOT IMPLEMENTED: Book update GET"
}

pub async fn book_update_post(Path(_id): Path<i32>) -> &'static str {
    "NOT IMPLEMENTED: Book update POST"
}
