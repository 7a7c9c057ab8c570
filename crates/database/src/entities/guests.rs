use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guest_id: i32,
    pub full_name: String,
    pub birthday: String,
    // Relation to rooms by value, not by key: no SQL foreign key, and
    // deleting a room leaves this dangling.
    pub room_number: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Guest {
    fn from(model: Model) -> Self {
        Self {
            guest_id: model.guest_id,
            full_name: model.full_name,
            birthday: model.birthday,
            room_number: model.room_number,
        }
    }
}

impl From<Model> for models::GuestSummary {
    fn from(model: Model) -> Self {
        Self {
            guest_id: model.guest_id,
            full_name: model.full_name,
            birthday: model.birthday,
        }
    }
}
