//! HTML views
//!
//! One function per page, each returning a full document. Values are escaped
//! here at interpolation time; re-rendered forms receive the user's raw
//! submission, not the sanitized copy.

use axum::response::Html;

use crate::forms::{escape, AuthorForm, FieldError};
use crate::models::{author, book};
use crate::models::book::BookBrief;

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav><a href="/">Home</a> | <a href="/authors">All authors</a> | <a href="/books">All books</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    ))
}

pub fn author_list_page(authors: &[author::Model]) -> Html<String> {
    let mut items = String::new();
    for a in authors {
        items.push_str(&format!(
            r#"<li><a href="{url}">{name}</a> ({lifespan})</li>"#,
            url = a.url(),
            name = escape(&a.name()),
            lifespan = escape(&a.lifespan()),
        ));
    }
    let body = if items.is_empty() {
        "<p>There are no authors.</p>".to_string()
    } else {
        format!("<ul>{}</ul>", items)
    };
    page("Author List", &body)
}

pub fn author_detail_page(author: &author::Model, books: &[BookBrief]) -> Html<String> {
    let mut body = format!(
        "<h2>{name}</h2>\n<p>{lifespan}</p>\n<h3>Books</h3>\n",
        name = escape(&author.name()),
        lifespan = escape(&author.lifespan()),
    );
    if books.is_empty() {
        body.push_str("<p>This author has no books.</p>");
    } else {
        body.push_str("<dl>");
        for b in books {
            body.push_str(&format!(
                "<dt><a href=\"/book/{id}\">{title}</a></dt><dd>{summary}</dd>",
                id = b.id,
                title = escape(&b.title),
                summary = escape(b.summary.as_deref().unwrap_or("")),
            ));
        }
        body.push_str("</dl>");
    }
    page("Author Detail", &body)
}

/// Create and update share this form; `values` carries either blanks, the
/// stored record, or the raw rejected submission.
pub fn author_form_page(title: &str, values: &AuthorForm, errors: &[FieldError]) -> Html<String> {
    let mut body = String::new();
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">");
        for e in errors {
            body.push_str(&format!("<li>{}</li>", escape(&e.message)));
        }
        body.push_str("</ul>");
    }
    body.push_str(&format!(
        r#"<form method="post">
<label>First name: <input name="first_name" value="{first_name}"></label>
<label>Family name: <input name="family_name" value="{family_name}"></label>
<label>Date of birth: <input type="date" name="date_of_birth" value="{date_of_birth}"></label>
<label>Date of death: <input type="date" name="date_of_death" value="{date_of_death}"></label>
<button type="submit">Submit</button>
</form>"#,
        first_name = escape(&values.first_name),
        family_name = escape(&values.family_name),
        date_of_birth = escape(&values.date_of_birth),
        date_of_death = escape(&values.date_of_death),
    ));
    page(title, &body)
}

/// Delete confirmation. With dependents listed the form is withheld and the
/// page doubles as the refusal notice.
pub fn author_delete_page(author: &author::Model, books: &[book::Model]) -> Html<String> {
    let mut body = format!("<h2>{}</h2>\n", escape(&author.name()));
    if books.is_empty() {
        body.push_str(&format!(
            r#"<p>Do you really want to delete this author?</p>
<form method="post">
<input type="hidden" name="authorid" value="{id}">
<button type="submit">Delete</button>
</form>"#,
            id = author.id,
        ));
    } else {
        body.push_str(
            "<p>Delete the following books before trying to delete this author.</p><ul>",
        );
        for b in books {
            body.push_str(&format!(
                "<li><a href=\"{url}\">{title}</a></li>",
                url = b.url(),
                title = escape(&b.title),
            ));
        }
        body.push_str("</ul>");
    }
    page("Delete Author", &body)
}

pub fn error_page(status: u16, message: &str) -> Html<String> {
    page(
        "Error",
        &format!("<p>{} - {}</p>", status, escape(message)),
    )
}
