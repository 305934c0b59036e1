use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use shelfmark::models::{author, book, book_instance};

fn sample_author(
    date_of_birth: Option<&str>,
    date_of_death: Option<&str>,
) -> author::Model {
    author::Model {
        id: 7,
        first_name: "Jane".to_string(),
        family_name: "Austen".to_string(),
        date_of_birth: date_of_birth.map(str::to_string),
        date_of_death: date_of_death.map(str::to_string),
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        updated_at: "2024-01-01T00:00:00+00:00".to_string(),
    }
}

#[test]
fn author_name_is_family_first() {
    assert_eq!(sample_author(None, None).name(), "Austen, Jane");
}

#[test]
fn author_url_is_derived_from_id() {
    assert_eq!(sample_author(None, None).url(), "/author/7");
}

#[test]
fn author_lifespan_formats_both_dates() {
    let author = sample_author(Some("1775-12-16"), Some("1817-07-18"));
    assert_eq!(author.lifespan(), "December 16, 1775 - July 18, 1817");
}

#[test]
fn author_lifespan_leaves_missing_dates_blank() {
    let author = sample_author(Some("1775-12-16"), None);
    assert_eq!(author.lifespan(), "December 16, 1775 - ");
    assert_eq!(sample_author(None, None).lifespan(), " - ");
}

#[test]
fn book_instance_formats_due_back() {
    let instance = book_instance::Model {
        id: 3,
        book_id: 1,
        imprint: "London: T. Egerton, 1813.".to_string(),
        status: book_instance::DEFAULT_STATUS.to_string(),
        due_back: "2024-05-03".to_string(),
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        updated_at: "2024-01-01T00:00:00+00:00".to_string(),
    };
    assert_eq!(instance.due_back_formatted(), "May 3, 2024");
    assert_eq!(instance.url(), "/bookinstance/3");
    assert!(book_instance::STATUSES.contains(&instance.status.as_str()));
}

#[tokio::test]
async fn seed_populates_the_catalog_once() {
    let db = shelfmark::db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");

    shelfmark::seed::seed_demo_data(&db).await.expect("seed failed");

    let authors = author::Entity::find().count(&db).await.unwrap();
    let books = book::Entity::find().count(&db).await.unwrap();
    let instances = book_instance::Entity::find().count(&db).await.unwrap();
    assert!(authors > 0);
    assert!(books > 0);
    assert_eq!(books, instances);

    // Every seeded copy carries a valid status
    for instance in book_instance::Entity::find().all(&db).await.unwrap() {
        assert!(book_instance::STATUSES.contains(&instance.status.as_str()));
    }

    // Seeding again must not duplicate records
    shelfmark::seed::seed_demo_data(&db).await.expect("seed failed");
    assert_eq!(author::Entity::find().count(&db).await.unwrap(), authors);
}

#[tokio::test]
async fn books_reference_their_author_by_id() {
    let db = shelfmark::db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    shelfmark::seed::seed_demo_data(&db).await.expect("seed failed");

    let austen = author::Entity::find()
        .filter(author::Column::FamilyName.eq("Austen"))
        .one(&db)
        .await
        .unwrap()
        .expect("seeded author missing");

    let austen_books = book::Entity::find()
        .filter(book::Column::AuthorId.eq(austen.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(austen_books.len(), 2);
}
