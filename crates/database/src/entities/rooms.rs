use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    // Caller-assigned identity, never allocated by the store.
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: i32,
    pub room_number: i32,
    pub description: String,
    pub seat_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Room {
    fn from(model: Model) -> Self {
        Self {
            room_id: model.room_id,
            room_number: model.room_number,
            description: model.description,
            seat_count: model.seat_count,
        }
    }
}
