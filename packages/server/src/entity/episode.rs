use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "episode")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    /// Server-relative path to the stored audio blob, e.g. `/uploads/<name>`.
    pub file_path: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
