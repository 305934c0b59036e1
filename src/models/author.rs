use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::format_date;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    /// ISO-8601 date (`YYYY-MM-DD`), NULL when unknown
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// "Family, First" display name
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Birth and death dates as a range, missing ends left blank
    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            self.date_of_birth.as_deref().map(format_date).unwrap_or_default(),
            self.date_of_death.as_deref().map(format_date).unwrap_or_default(),
        )
    }

    pub fn url(&self) -> String {
        format!("/author/{}", self.id)
    }
}
