//! Wire DTOs for the guest endpoints. `FIO` and `hotelRoomNumber` are
//! the historical field names for the guest's full name and room
//! reference.

use models::{GuestPatch, GuestSummary, GuestWithRoom, NewGuest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::room::RoomResponse;

/// Occupant projection embedded in room responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GuestSummaryResponse {
    pub guest_id: i32,
    #[serde(rename = "FIO")]
    pub full_name: String,
    pub birthday: String,
}

impl From<GuestSummary> for GuestSummaryResponse {
    fn from(summary: GuestSummary) -> Self {
        Self {
            guest_id: summary.guest_id,
            full_name: summary.full_name,
            birthday: summary.birthday,
        }
    }
}

/// Guest responses embed the resolved room instead of the raw
/// `hotelRoomNumber`, matching the historical contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GuestWithRoomResponse {
    pub guest_id: i32,
    #[serde(rename = "FIO")]
    pub full_name: String,
    pub birthday: String,
    #[serde(rename = "Room")]
    pub room: RoomResponse,
}

impl From<GuestWithRoom> for GuestWithRoomResponse {
    fn from(composed: GuestWithRoom) -> Self {
        Self {
            guest_id: composed.guest.guest_id,
            full_name: composed.guest.full_name,
            birthday: composed.guest.birthday,
            room: RoomResponse::from(composed.room),
        }
    }
}

/// Body of `POST /guest/{guest_id}`; every field is required.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateGuestRequest {
    #[serde(rename = "FIO")]
    pub full_name: String,
    pub birthday: String,
    #[serde(rename = "hotelRoomNumber")]
    pub room_number: i32,
}

impl From<CreateGuestRequest> for NewGuest {
    fn from(req: CreateGuestRequest) -> Self {
        Self {
            full_name: req.full_name,
            birthday: req.birthday,
            room_number: req.room_number,
        }
    }
}

/// Body of `PUT /guest/{guest_id}`; any subset of fields.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGuestRequest {
    pub guest_id: Option<i32>,
    #[serde(rename = "FIO")]
    pub full_name: Option<String>,
    pub birthday: Option<String>,
    #[serde(rename = "hotelRoomNumber")]
    pub room_number: Option<i32>,
}

impl From<UpdateGuestRequest> for GuestPatch {
    fn from(req: UpdateGuestRequest) -> Self {
        Self {
            guest_id: req.guest_id,
            full_name: req.full_name,
            birthday: req.birthday,
            room_number: req.room_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Guest, Room};
    use serde_json::json;

    #[test]
    fn guest_response_embeds_the_room() {
        let composed = GuestWithRoom {
            guest: Guest {
                guest_id: 1,
                full_name: "Alice".into(),
                birthday: "1990-04-01".into(),
                room_number: 101,
            },
            room: Room {
                room_id: 1,
                room_number: 101,
                description: "Suite".into(),
                seat_count: 2,
            },
        };

        let value = serde_json::to_value(GuestWithRoomResponse::from(composed)).unwrap();
        assert_eq!(
            value,
            json!({
                "guest_id": 1,
                "FIO": "Alice",
                "birthday": "1990-04-01",
                "Room": {
                    "room_id": 1,
                    "roomNumber": 101,
                    "description": "Suite",
                    "numberOfSeats": 2,
                },
            })
        );
    }

    #[test]
    fn create_request_uses_wire_names() {
        let req: CreateGuestRequest = serde_json::from_value(json!({
            "FIO": "Bob",
            "birthday": "1985-12-31",
            "hotelRoomNumber": 101,
        }))
        .unwrap();
        let new_guest = NewGuest::from(req);
        assert_eq!(new_guest.full_name, "Bob");
        assert_eq!(new_guest.room_number, 101);
    }
}
