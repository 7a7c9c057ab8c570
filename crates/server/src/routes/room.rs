use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::dtos::room::{
    CreateRoomRequest, RoomResponse, RoomWithGuestsResponse, UpdateRoomRequest,
};
use crate::error::{ApiResult, ErrorBody};
use crate::state::AppState;

/// Get a room and its current guests
#[utoipa::path(
    get,
    path = "/hotelroom/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room identifier")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomWithGuestsResponse),
        (status = 404, description = "No room with that identifier", body = ErrorBody)
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> ApiResult<Json<RoomWithGuestsResponse>> {
    let composed = state.rooms.get(room_id).await?;
    Ok(Json(composed.into()))
}

/// Create a room under a caller-assigned identifier
#[utoipa::path(
    post,
    path = "/hotelroom/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room identifier")
    ),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Invalid field value", body = ErrorBody),
        (status = 409, description = "Identifier or room number already in use", body = ErrorBody)
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Json(body): Json<CreateRoomRequest>,
) -> ApiResult<(StatusCode, Json<RoomResponse>)> {
    let room = state.rooms.create(room_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

/// Apply a partial update to a room
#[utoipa::path(
    put,
    path = "/hotelroom/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room identifier")
    ),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomWithGuestsResponse),
        (status = 400, description = "Invalid field value", body = ErrorBody),
        (status = 404, description = "No room with that identifier", body = ErrorBody),
        (status = 409, description = "Patched identifier or room number already in use", body = ErrorBody),
        (status = 422, description = "Patch would leave more guests than seats", body = ErrorBody)
    ),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Json(body): Json<UpdateRoomRequest>,
) -> ApiResult<Json<RoomWithGuestsResponse>> {
    let composed = state.rooms.update(room_id, body.into()).await?;
    Ok(Json(composed.into()))
}

/// Delete a room; absent identifiers are a no-op
#[utoipa::path(
    delete,
    path = "/hotelroom/{room_id}",
    params(
        ("room_id" = i32, Path, description = "Room identifier")
    ),
    responses(
        (status = 204, description = "Room removed (or was already absent)")
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.rooms.delete(room_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every room with its current guests
#[utoipa::path(
    get,
    path = "/hotelroomlist",
    responses(
        (status = 200, description = "All rooms", body = [RoomWithGuestsResponse])
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoomWithGuestsResponse>>> {
    let rooms = state.rooms.list().await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}
