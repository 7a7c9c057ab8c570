use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use models::{Guest, GuestPatch, GuestWithRoom, HotelError, NewGuest, Room, seats};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};

use super::{GuestRepository, storage_err};
use crate::entities::{guests, rooms};

/// Guest store backed by the relational database.
#[derive(Clone)]
pub struct SeaOrmGuestRepository {
    db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a guest's room number; a dangling reference surfaces as
    /// NotFound rather than faulting.
    async fn resolve_room<C: ConnectionTrait>(
        conn: &C,
        guest_id: i32,
        room_number: i32,
    ) -> Result<rooms::Model, HotelError> {
        rooms::Entity::find()
            .filter(rooms::Column::RoomNumber.eq(room_number))
            .one(conn)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| {
                HotelError::NotFound(format!(
                    "Guest {guest_id} references room number {room_number}, but no such room exists"
                ))
            })
    }
}

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn get(&self, guest_id: i32) -> Result<GuestWithRoom, HotelError> {
        let guest = guests::Entity::find_by_id(guest_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::guest_not_found(guest_id))?;

        let room = Self::resolve_room(&self.db, guest_id, guest.room_number).await?;

        Ok(GuestWithRoom {
            guest: Guest::from(guest),
            room: Room::from(room),
        })
    }

    async fn create(
        &self,
        guest_id: i32,
        new_guest: NewGuest,
    ) -> Result<GuestWithRoom, HotelError> {
        // Check-then-insert runs inside one transaction so two racing
        // creates cannot both pass the capacity check.
        let txn = self.db.begin().await.map_err(storage_err)?;

        if guests::Entity::find_by_id(guest_id)
            .one(&txn)
            .await
            .map_err(storage_err)?
            .is_some()
        {
            return Err(HotelError::Conflict(format!(
                "Guest with id {guest_id} already exists"
            )));
        }

        // Room existence is checked before capacity: the seat count of an
        // absent room is meaningless, so this must short-circuit.
        let room = rooms::Entity::find()
            .filter(rooms::Column::RoomNumber.eq(new_guest.room_number))
            .one(&txn)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::room_number_not_found(new_guest.room_number))?;

        let occupied = guests::Entity::find()
            .filter(guests::Column::RoomNumber.eq(new_guest.room_number))
            .count(&txn)
            .await
            .map_err(storage_err)?;

        if !seats::has_vacancy(room.seat_count, occupied) {
            log::debug!(
                "rejecting guest {guest_id}: room {} is full ({occupied}/{})",
                new_guest.room_number,
                room.seat_count
            );
            return Err(HotelError::Capacity(format!(
                "All seats in room {} are taken",
                new_guest.room_number
            )));
        }

        let now = Utc::now().naive_utc();
        let inserted = guests::ActiveModel {
            guest_id: Set(guest_id),
            full_name: Set(new_guest.full_name),
            birthday: Set(new_guest.birthday),
            room_number: Set(new_guest.room_number),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(storage_err)?;

        txn.commit().await.map_err(storage_err)?;

        log::debug!("created guest {guest_id} in room {}", inserted.room_number);
        Ok(GuestWithRoom {
            guest: Guest::from(inserted),
            room: Room::from(room),
        })
    }

    async fn update(&self, guest_id: i32, patch: GuestPatch) -> Result<GuestWithRoom, HotelError> {
        let current = guests::Entity::find_by_id(guest_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::guest_not_found(guest_id))?;

        let mut updated = Guest::from(current.clone());
        patch.apply(&mut updated);

        if updated.guest_id != guest_id
            && guests::Entity::find_by_id(updated.guest_id)
                .one(&self.db)
                .await
                .map_err(storage_err)?
                .is_some()
        {
            return Err(HotelError::Conflict(format!(
                "Guest with id {} already exists",
                updated.guest_id
            )));
        }

        // Moving to another room re-runs the create-time checks: the
        // target must exist and have a seat free.
        if updated.room_number != current.room_number {
            let room = rooms::Entity::find()
                .filter(rooms::Column::RoomNumber.eq(updated.room_number))
                .one(&self.db)
                .await
                .map_err(storage_err)?
                .ok_or_else(|| HotelError::room_number_not_found(updated.room_number))?;

            let occupied = guests::Entity::find()
                .filter(guests::Column::RoomNumber.eq(updated.room_number))
                .filter(guests::Column::GuestId.ne(guest_id))
                .count(&self.db)
                .await
                .map_err(storage_err)?;

            if !seats::has_vacancy(room.seat_count, occupied) {
                return Err(HotelError::Capacity(format!(
                    "All seats in room {} are taken",
                    updated.room_number
                )));
            }
        }

        let mut query = guests::Entity::update_many().filter(guests::Column::GuestId.eq(guest_id));
        if let Some(new_id) = patch.guest_id {
            query = query.col_expr(guests::Column::GuestId, Expr::value(new_id));
        }
        if let Some(full_name) = patch.full_name {
            query = query.col_expr(guests::Column::FullName, Expr::value(full_name));
        }
        if let Some(birthday) = patch.birthday {
            query = query.col_expr(guests::Column::Birthday, Expr::value(birthday));
        }
        if let Some(room_number) = patch.room_number {
            query = query.col_expr(guests::Column::RoomNumber, Expr::value(room_number));
        }
        query = query.col_expr(
            guests::Column::UpdatedAt,
            Expr::value(Utc::now().naive_utc()),
        );
        query.exec(&self.db).await.map_err(storage_err)?;

        let guest = guests::Entity::find_by_id(updated.guest_id)
            .one(&self.db)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| HotelError::guest_not_found(updated.guest_id))?;

        let room = Self::resolve_room(&self.db, guest.guest_id, guest.room_number).await?;

        Ok(GuestWithRoom {
            guest: Guest::from(guest),
            room: Room::from(room),
        })
    }

    async fn delete(&self, guest_id: i32) -> Result<(), HotelError> {
        let result = guests::Entity::delete_by_id(guest_id)
            .exec(&self.db)
            .await
            .map_err(storage_err)?;

        if result.rows_affected > 0 {
            log::debug!("deleted guest {guest_id}");
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<GuestWithRoom>, HotelError> {
        let guests = guests::Entity::find()
            .order_by_asc(guests::Column::GuestId)
            .all(&self.db)
            .await
            .map_err(storage_err)?;

        // One room query for the whole listing, keyed by room number.
        let rooms = rooms::Entity::find().all(&self.db).await.map_err(storage_err)?;
        let by_number: HashMap<i32, Room> = rooms
            .into_iter()
            .map(|room| (room.room_number, Room::from(room)))
            .collect();

        guests
            .into_iter()
            .map(|guest| {
                let room = by_number.get(&guest.room_number).cloned().ok_or_else(|| {
                    HotelError::NotFound(format!(
                        "Guest {} references room number {}, but no such room exists",
                        guest.guest_id, guest.room_number
                    ))
                })?;
                Ok(GuestWithRoom {
                    guest: Guest::from(guest),
                    room,
                })
            })
            .collect()
    }
}
