//! Wire DTOs for the room endpoints. Field names follow the historical
//! JSON contract (`roomNumber`, `numberOfSeats`, `Guests`).

use models::{NewRoom, Room, RoomPatch, RoomWithGuests};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dtos::guest::GuestSummaryResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomResponse {
    pub room_id: i32,
    #[serde(rename = "roomNumber")]
    pub room_number: i32,
    pub description: String,
    #[serde(rename = "numberOfSeats")]
    pub seat_count: i32,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            room_id: room.room_id,
            room_number: room.room_number,
            description: room.description,
            seat_count: room.seat_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomWithGuestsResponse {
    pub room_id: i32,
    #[serde(rename = "roomNumber")]
    pub room_number: i32,
    pub description: String,
    #[serde(rename = "numberOfSeats")]
    pub seat_count: i32,
    #[serde(rename = "Guests")]
    pub guests: Vec<GuestSummaryResponse>,
}

impl From<RoomWithGuests> for RoomWithGuestsResponse {
    fn from(composed: RoomWithGuests) -> Self {
        Self {
            room_id: composed.room.room_id,
            room_number: composed.room.room_number,
            description: composed.room.description,
            seat_count: composed.room.seat_count,
            guests: composed
                .guests
                .into_iter()
                .map(GuestSummaryResponse::from)
                .collect(),
        }
    }
}

/// Body of `POST /hotelroom/{room_id}`; every field is required.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    #[serde(rename = "roomNumber")]
    pub room_number: i32,
    pub description: String,
    #[serde(rename = "numberOfSeats")]
    pub seat_count: i32,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(req: CreateRoomRequest) -> Self {
        Self {
            room_number: req.room_number,
            description: req.description,
            seat_count: req.seat_count,
        }
    }
}

/// Body of `PUT /hotelroom/{room_id}`; any subset of fields, presence
/// decides what is updated.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoomRequest {
    pub room_id: Option<i32>,
    #[serde(rename = "roomNumber")]
    pub room_number: Option<i32>,
    pub description: Option<String>,
    #[serde(rename = "numberOfSeats")]
    pub seat_count: Option<i32>,
}

impl From<UpdateRoomRequest> for RoomPatch {
    fn from(req: UpdateRoomRequest) -> Self {
        Self {
            room_id: req.room_id,
            room_number: req.room_number,
            description: req.description,
            seat_count: req.seat_count,
        }
    }
}
