use thiserror::Error;

/// Domain-level failure of a room or guest operation.
///
/// Every variant carries a caller-facing message; the HTTP layer decides
/// the status code per variant.
#[derive(Debug, Error)]
pub enum HotelError {
    /// No record with the given identifier, or a referenced room number
    /// does not name any room.
    #[error("{0}")]
    NotFound(String),

    /// An identifier (or a room number, which must be unique) is already
    /// in use.
    #[error("{0}")]
    Conflict(String),

    /// The target room has no free seat left.
    #[error("{0}")]
    Capacity(String),

    /// A supplied field value is unusable (e.g. a negative seat count).
    #[error("{0}")]
    Validation(String),

    /// Unexpected storage failure; fatal to the request.
    #[error("database error: {0}")]
    Database(String),
}

impl HotelError {
    pub fn room_not_found(room_id: i32) -> Self {
        Self::NotFound(format!("Could not find room with id {room_id}"))
    }

    pub fn guest_not_found(guest_id: i32) -> Self {
        Self::NotFound(format!("Could not find guest with id {guest_id}"))
    }

    pub fn room_number_not_found(room_number: i32) -> Self {
        Self::NotFound(format!(
            "Could not find a hotel room with room number {room_number}"
        ))
    }
}
