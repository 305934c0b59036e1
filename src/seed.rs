use sea_orm::*;

use crate::models::{author, book, book_instance};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Skip seeding once the catalog has content
    if author::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();

    let austen = author::ActiveModel {
        first_name: Set("Jane".to_owned()),
        family_name: Set("Austen".to_owned()),
        date_of_birth: Set(Some("1775-12-16".to_owned())),
        date_of_death: Set(Some("1817-07-18".to_owned())),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let rothfuss = author::ActiveModel {
        first_name: Set("Patrick".to_owned()),
        family_name: Set("Rothfuss".to_owned()),
        date_of_birth: Set(Some("1973-06-06".to_owned())),
        date_of_death: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let asimov = author::ActiveModel {
        first_name: Set("Isaac".to_owned()),
        family_name: Set("Asimov".to_owned()),
        date_of_birth: Set(Some("1920-01-02".to_owned())),
        date_of_death: Set(Some("1992-04-06".to_owned())),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let books = [
        (
            austen.id,
            "Pride and Prejudice",
            Some("The romantic clash between the opinionated Elizabeth and her proud beau, Mr. Darcy."),
            "London: T. Egerton, 1813.",
            "Available",
        ),
        (
            austen.id,
            "Emma",
            Some("Emma Woodhouse, handsome, clever, and rich, meddles in the lives of her neighbours."),
            "London: John Murray, 1815.",
            "Loaned",
        ),
        (
            rothfuss.id,
            "The Name of the Wind",
            Some("The tale of the magically gifted young man who grows to be the most notorious wizard his world has ever seen."),
            "New York: DAW Books, 2007.",
            "Available",
        ),
        (
            asimov.id,
            "Foundation",
            Some("The first novel in Asimov's Foundation series, charting the fall of the Galactic Empire."),
            "New York: Gnome Press, 1951.",
            "Maintenance",
        ),
    ];

    for (author_id, title, summary, imprint, status) in books {
        let created = book::ActiveModel {
            title: Set(title.to_owned()),
            summary: Set(summary.map(str::to_owned)),
            author_id: Set(author_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        book_instance::ActiveModel {
            book_id: Set(created.id),
            imprint: Set(imprint.to_owned()),
            status: Set(status.to_owned()),
            due_back: Set(today.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
