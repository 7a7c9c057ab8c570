//! Storage interface for the two stores.
//!
//! Handlers depend on the `RoomRepository` and `GuestRepository` traits
//! only; the SeaORM-backed implementations below carry every business
//! rule (duplicate checks, room-number uniqueness, the capacity check,
//! patch application, response composition).

mod guest;
mod room;

pub use guest::SeaOrmGuestRepository;
pub use room::SeaOrmRoomRepository;

use async_trait::async_trait;
use models::{
    GuestPatch, GuestWithRoom, HotelError, NewGuest, NewRoom, Room, RoomPatch, RoomWithGuests,
};
use sea_orm::DbErr;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Fetches a room together with its current occupants.
    async fn get(&self, room_id: i32) -> Result<RoomWithGuests, HotelError>;

    /// Inserts a room under a caller-assigned identifier.
    async fn create(&self, room_id: i32, new_room: NewRoom) -> Result<Room, HotelError>;

    /// Applies the present patch fields and returns the updated room with
    /// its occupants.
    async fn update(&self, room_id: i32, patch: RoomPatch) -> Result<RoomWithGuests, HotelError>;

    /// Removes the room if present; absent identifiers are a no-op.
    async fn delete(&self, room_id: i32) -> Result<(), HotelError>;

    /// Every room, each with its occupants, ordered by identifier.
    async fn list(&self) -> Result<Vec<RoomWithGuests>, HotelError>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Fetches a guest together with the room its number resolves to.
    async fn get(&self, guest_id: i32) -> Result<GuestWithRoom, HotelError>;

    /// Inserts a guest under a caller-assigned identifier, gated by the
    /// target room's capacity.
    async fn create(&self, guest_id: i32, new_guest: NewGuest)
    -> Result<GuestWithRoom, HotelError>;

    /// Applies the present patch fields; a changed room number is
    /// re-validated against room existence and capacity.
    async fn update(&self, guest_id: i32, patch: GuestPatch) -> Result<GuestWithRoom, HotelError>;

    /// Removes the guest if present; absent identifiers are a no-op.
    async fn delete(&self, guest_id: i32) -> Result<(), HotelError>;

    /// Every guest, each with its room, ordered by identifier.
    async fn list(&self) -> Result<Vec<GuestWithRoom>, HotelError>;
}

/// Storage failures are fatal to the request; log and surface as such.
pub(crate) fn storage_err(err: DbErr) -> HotelError {
    log::error!("storage failure: {err}");
    HotelError::Database(err.to_string())
}
