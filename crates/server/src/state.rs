use std::sync::Arc;

use database::db::DatabaseConnection;
use database::repos::{
    GuestRepository, RoomRepository, SeaOrmGuestRepository, SeaOrmRoomRepository,
};

/// Shared handler state: the two stores behind their repository traits.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub guests: Arc<dyn GuestRepository>,
}

impl AppState {
    /// Wires both repositories to the same database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: Arc::new(SeaOrmRoomRepository::new(db.clone())),
            guests: Arc::new(SeaOrmGuestRepository::new(db)),
        }
    }
}
