use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use models::{GuestSummary, HotelError, NewRoom, Room, RoomPatch, RoomWithGuests, seats};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, sea_query::Expr,
};

use super::{RoomRepository, storage_err};
use crate::entities::{guests, rooms};

/// Room store backed by the relational database.
#[derive(Clone)]
pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Occupants of the given room number, projected for room responses.
    async fn occupants<C: ConnectionTrait>(
        conn: &C,
        room_number: i32,
    ) -> Result<Vec<GuestSummary>, HotelError> {
        let guests = guests::Entity::find()
            .filter(guests::Column::RoomNumber.eq(room_number))
            .order_by_asc(guests::Column::GuestId)
            .all(conn)
            .await
            .map_err(storage_err)?;

        Ok(guests.into_iter().map(GuestSummary::from).collect())
    }

    async fn compose(&self, room: rooms::Model) -> Result<RoomWithGuests, HotelError> {
        let guests = Self::occupants(&self.db, room.room_number).await?;
        Ok(RoomWithGuests {
            room: Room::from(room),
            guests,
        })
    }

    /// Conflict unless `room_number` is free or already belongs to
    /// `own_room_id`.
    async fn ensure_number_free(
        &self,
        room_number: i32,
        own_room_id: Option<i32>,
    ) -> Result<(), HotelError> {
        let holder = rooms::Entity::find()
            .filter(rooms::Column::RoomNumber.eq(room_number))
            .one(&self.db)
            .await
            .map_err(storage_err)?;

        match holder {
            Some(room) if Some(room.room_id) != own_room_id => Err(HotelError::Conflict(format!(
                "Room number {room_number} is already in use by room {}",
                room.room_id
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn get(&self, room_id: i32) -> Result<RoomWithGuests, HotelError> {
        let room = rooms::Entity::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::room_not_found(room_id))?;

        self.compose(room).await
    }

    async fn create(&self, room_id: i32, new_room: NewRoom) -> Result<Room, HotelError> {
        if new_room.seat_count < 0 {
            return Err(HotelError::Validation(
                "numberOfSeats must not be negative".to_string(),
            ));
        }

        // Duplicate check against the room store itself.
        if rooms::Entity::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .is_some()
        {
            return Err(HotelError::Conflict(format!(
                "HotelRoom with id {room_id} already exists"
            )));
        }

        self.ensure_number_free(new_room.room_number, None).await?;

        let now = Utc::now().naive_utc();
        let inserted = rooms::ActiveModel {
            room_id: Set(room_id),
            room_number: Set(new_room.room_number),
            description: Set(new_room.description),
            seat_count: Set(new_room.seat_count),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(storage_err)?;

        log::debug!("created room {room_id}");
        Ok(Room::from(inserted))
    }

    async fn update(&self, room_id: i32, patch: RoomPatch) -> Result<RoomWithGuests, HotelError> {
        let current = rooms::Entity::find_by_id(room_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::room_not_found(room_id))?;

        let mut updated = Room::from(current);
        patch.apply(&mut updated);

        if updated.seat_count < 0 {
            return Err(HotelError::Validation(
                "numberOfSeats must not be negative".to_string(),
            ));
        }

        if updated.room_id != room_id
            && rooms::Entity::find_by_id(updated.room_id)
                .one(&self.db)
                .await
                .map_err(storage_err)?
                .is_some()
        {
            return Err(HotelError::Conflict(format!(
                "HotelRoom with id {} already exists",
                updated.room_id
            )));
        }

        self.ensure_number_free(updated.room_number, Some(room_id))
            .await?;

        // Re-validate occupancy on every mutation: the patched room must
        // still hold every guest referencing its (patched) number.
        let occupied = guests::Entity::find()
            .filter(guests::Column::RoomNumber.eq(updated.room_number))
            .count(&self.db)
            .await
            .map_err(storage_err)?;

        if !seats::fits(updated.seat_count, occupied) {
            return Err(HotelError::Capacity(format!(
                "Room number {} holds {occupied} guests and cannot be reduced to {} seats",
                updated.room_number, updated.seat_count
            )));
        }

        let mut query = rooms::Entity::update_many().filter(rooms::Column::RoomId.eq(room_id));
        if let Some(new_id) = patch.room_id {
            query = query.col_expr(rooms::Column::RoomId, Expr::value(new_id));
        }
        if let Some(room_number) = patch.room_number {
            query = query.col_expr(rooms::Column::RoomNumber, Expr::value(room_number));
        }
        if let Some(description) = patch.description {
            query = query.col_expr(rooms::Column::Description, Expr::value(description));
        }
        if let Some(seat_count) = patch.seat_count {
            query = query.col_expr(rooms::Column::SeatCount, Expr::value(seat_count));
        }
        query = query.col_expr(
            rooms::Column::UpdatedAt,
            Expr::value(Utc::now().naive_utc()),
        );
        query.exec(&self.db).await.map_err(storage_err)?;

        let room = rooms::Entity::find_by_id(updated.room_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::room_not_found(updated.room_id))?;

        self.compose(room).await
    }

    async fn delete(&self, room_id: i32) -> Result<(), HotelError> {
        // Idempotent, and deliberately no cascade: guests keep their
        // room number even when it no longer resolves.
        let result = rooms::Entity::delete_by_id(room_id)
            .exec(&self.db)
            .await
            .map_err(storage_err)?;

        if result.rows_affected > 0 {
            log::debug!("deleted room {room_id}");
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RoomWithGuests>, HotelError> {
        let rooms = rooms::Entity::find()
            .order_by_asc(rooms::Column::RoomId)
            .all(&self.db)
            .await
            .map_err(storage_err)?;

        // One guest query for the whole listing, grouped by room number.
        let mut by_number: HashMap<i32, Vec<GuestSummary>> = HashMap::new();
        let guests = guests::Entity::find()
            .order_by_asc(guests::Column::GuestId)
            .all(&self.db)
            .await
            .map_err(storage_err)?;
        for guest in guests {
            by_number
                .entry(guest.room_number)
                .or_default()
                .push(GuestSummary::from(guest));
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let guests = by_number.remove(&room.room_number).unwrap_or_default();
                RoomWithGuests {
                    room: Room::from(room),
                    guests,
                }
            })
            .collect())
    }
}
