use serde::{Deserialize, Serialize};

use crate::room::Room;

/// A person assigned to a room. The assignment is by value: `room_number`
/// references a room's number, not its identifier, and nothing cleans it
/// up when the room is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: i32,
    pub full_name: String,
    pub birthday: String,
    pub room_number: i32,
}

/// Fields required to create a guest; the identifier comes from the
/// request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuest {
    pub full_name: String,
    pub birthday: String,
    pub room_number: i32,
}

/// Partial update of a guest; presence decides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPatch {
    pub guest_id: Option<i32>,
    pub full_name: Option<String>,
    pub birthday: Option<String>,
    pub room_number: Option<i32>,
}

impl GuestPatch {
    pub fn is_empty(&self) -> bool {
        self.guest_id.is_none()
            && self.full_name.is_none()
            && self.birthday.is_none()
            && self.room_number.is_none()
    }

    pub fn apply(&self, guest: &mut Guest) {
        if let Some(guest_id) = self.guest_id {
            guest.guest_id = guest_id;
        }
        if let Some(full_name) = &self.full_name {
            guest.full_name = full_name.clone();
        }
        if let Some(birthday) = &self.birthday {
            guest.birthday = birthday.clone();
        }
        if let Some(room_number) = self.room_number {
            guest.room_number = room_number;
        }
    }
}

/// The occupant projection used inside room responses: no room number,
/// since the enclosing room already carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSummary {
    pub guest_id: i32,
    pub full_name: String,
    pub birthday: String,
}

impl From<Guest> for GuestSummary {
    fn from(guest: Guest) -> Self {
        Self {
            guest_id: guest.guest_id,
            full_name: guest.full_name,
            birthday: guest.birthday,
        }
    }
}

/// A guest composed with the room its `room_number` resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestWithRoom {
    pub guest: Guest,
    pub room: Room,
}
