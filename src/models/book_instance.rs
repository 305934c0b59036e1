use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::format_date;

/// Allowed `status` values; anything else is rejected by form validation.
pub const STATUSES: [&str; 4] = ["Available", "Maintenance", "Loaned", "Reserved"];

/// Status a new copy starts in.
pub const DEFAULT_STATUS: &str = "Maintenance";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_instances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub book_id: i32,
    pub imprint: String,
    /// One of [`STATUSES`]
    pub status: String,
    /// ISO-8601 date (`YYYY-MM-DD`); defaults to the creation date
    pub due_back: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id"
    )]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn url(&self) -> String {
        format!("/bookinstance/{}", self.id)
    }

    /// `due_back` rendered for humans, e.g. "December 16, 1775"
    pub fn due_back_formatted(&self) -> String {
        format_date(&self.due_back)
    }
}
