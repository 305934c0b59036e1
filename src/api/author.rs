use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use sea_orm::*;
use serde::Deserialize;

use crate::error::AppError;
use crate::forms::{self, AuthorForm};
use crate::models::author::{self, Entity as Author};
use crate::models::book::{self, BookBrief, Entity as Book};
use crate::views;

// Display list of all authors
pub async fn author_list(State(db): State<DatabaseConnection>) -> Result<Response, AppError> {
    let authors = Author::find()
        .order_by_asc(author::Column::FamilyName)
        .all(&db)
        .await?;
    Ok(views::author_list_page(&authors).into_response())
}

// Display detail page for a specific author
pub async fn author_detail(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let (author, books) = tokio::try_join!(
        Author::find_by_id(id).one(&db),
        books_by_author_brief(&db, id),
    )?;

    let author = author.ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
    Ok(views::author_detail_page(&author, &books).into_response())
}

// Display author create form on GET
pub async fn author_create_get() -> Response {
    views::author_form_page("Create Author", &AuthorForm::default(), &[]).into_response()
}

// Handle author create on POST
pub async fn author_create_post(
    State(db): State<DatabaseConnection>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, AppError> {
    let input = match forms::validate_author(&form) {
        Ok(input) => input,
        // Render the form again with the submitted values and error messages
        Err(errors) => {
            return Ok(views::author_form_page("Create Author", &form, &errors).into_response());
        }
    };

    let now = chrono::Utc::now().to_rfc3339();
    let created = author::ActiveModel {
        first_name: Set(input.first_name),
        family_name: Set(input.family_name),
        date_of_birth: Set(input.date_of_birth),
        date_of_death: Set(input.date_of_death),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    Ok(Redirect::to(&created.url()).into_response())
}

// Display author delete confirmation on GET
pub async fn author_delete_get(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let (author, books) = tokio::try_join!(
        Author::find_by_id(id).one(&db),
        Book::find().filter(book::Column::AuthorId.eq(id)).all(&db),
    )?;

    // A missing author bounces back to the list here, unlike the detail page
    let Some(author) = author else {
        return Ok(Redirect::to("/authors").into_response());
    };
    Ok(views::author_delete_page(&author, &books).into_response())
}

#[derive(Deserialize)]
pub struct DeleteAuthorForm {
    pub authorid: i32,
}

// Handle author delete on POST
pub async fn author_delete_post(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Form(form): Form<DeleteAuthorForm>,
) -> Result<Response, AppError> {
    let (author, books) = tokio::try_join!(
        Author::find_by_id(id).one(&db),
        Book::find().filter(book::Column::AuthorId.eq(id)).all(&db),
    )?;

    if let Some(author) = author {
        if !books.is_empty() {
            // Author still has books: refuse and show the confirmation again
            return Ok(views::author_delete_page(&author, &books).into_response());
        }
    }

    // The form body, not the route, names the record to remove
    Author::delete_by_id(form.authorid).exec(&db).await?;
    Ok(Redirect::to("/authors").into_response())
}

// Display author update form on GET
pub async fn author_update_get(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let (author, _books) = tokio::try_join!(
        Author::find_by_id(id).one(&db),
        books_by_author_brief(&db, id),
    )?;

    let author = author.ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;
    let values = AuthorForm {
        first_name: author.first_name,
        family_name: author.family_name,
        date_of_birth: author.date_of_birth.unwrap_or_default(),
        date_of_death: author.date_of_death.unwrap_or_default(),
    };
    Ok(views::author_form_page("Update Author", &values, &[]).into_response())
}

// Handle author update on POST
pub async fn author_update_post(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, AppError> {
    let input = match forms::validate_author(&form) {
        Ok(input) => input,
        Err(errors) => {
            return Ok(views::author_form_page("Update Author", &form, &errors).into_response());
        }
    };

    // Full replacement at the route id: all four fields are overwritten
    let now = chrono::Utc::now().to_rfc3339();
    let updated = author::ActiveModel {
        id: Set(id),
        first_name: Set(input.first_name),
        family_name: Set(input.family_name),
        date_of_birth: Set(input.date_of_birth),
        date_of_death: Set(input.date_of_death),
        created_at: NotSet,
        updated_at: Set(now),
    }
    .update(&db)
    .await?;

    Ok(Redirect::to(&updated.url()).into_response())
}

async fn books_by_author_brief(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<Vec<BookBrief>, DbErr> {
    Book::find()
        .filter(book::Column::AuthorId.eq(author_id))
        .select_only()
        .column(book::Column::Id)
        .column(book::Column::Title)
        .column(book::Column::Summary)
        .into_model::<BookBrief>()
        .all(db)
        .await
}
