use serde::{Deserialize, Serialize};

use crate::guest::GuestSummary;

/// A bookable unit with a seat capacity. `room_id` is caller-assigned;
/// the store never allocates identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i32,
    pub room_number: i32,
    pub description: String,
    pub seat_count: i32,
}

/// Fields required to create a room. The identifier travels separately
/// (it comes from the request path, not the body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub room_number: i32,
    pub description: String,
    pub seat_count: i32,
}

/// Partial update of a room. Presence decides whether a field is
/// applied; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPatch {
    pub room_id: Option<i32>,
    pub room_number: Option<i32>,
    pub description: Option<String>,
    pub seat_count: Option<i32>,
}

impl RoomPatch {
    pub fn is_empty(&self) -> bool {
        self.room_id.is_none()
            && self.room_number.is_none()
            && self.description.is_none()
            && self.seat_count.is_none()
    }

    /// Applies the present fields to `room`.
    pub fn apply(&self, room: &mut Room) {
        if let Some(room_id) = self.room_id {
            room.room_id = room_id;
        }
        if let Some(room_number) = self.room_number {
            room.room_number = room_number;
        }
        if let Some(description) = &self.description {
            room.description = description.clone();
        }
        if let Some(seat_count) = self.seat_count {
            room.seat_count = seat_count;
        }
    }
}

/// A room composed with its current occupants, as returned by room reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomWithGuests {
    pub room: Room,
    pub guests: Vec<GuestSummary>,
}
