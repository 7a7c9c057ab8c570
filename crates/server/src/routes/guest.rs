use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::dtos::guest::{CreateGuestRequest, GuestWithRoomResponse, UpdateGuestRequest};
use crate::error::{ApiResult, ErrorBody};
use crate::state::AppState;

/// Get a guest and the room they are assigned to
#[utoipa::path(
    get,
    path = "/guest/{guest_id}",
    params(
        ("guest_id" = i32, Path, description = "Guest identifier")
    ),
    responses(
        (status = 200, description = "Guest found", body = GuestWithRoomResponse),
        (status = 404, description = "No guest with that identifier, or their room reference no longer resolves", body = ErrorBody)
    ),
    tag = "Guests"
)]
pub async fn get_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i32>,
) -> ApiResult<Json<GuestWithRoomResponse>> {
    let composed = state.guests.get(guest_id).await?;
    Ok(Json(composed.into()))
}

/// Create a guest, gated by the target room's capacity
#[utoipa::path(
    post,
    path = "/guest/{guest_id}",
    params(
        ("guest_id" = i32, Path, description = "Guest identifier")
    ),
    request_body = CreateGuestRequest,
    responses(
        (status = 201, description = "Guest created", body = GuestWithRoomResponse),
        (status = 404, description = "No room has the requested room number", body = ErrorBody),
        (status = 409, description = "Identifier already in use", body = ErrorBody),
        (status = 422, description = "All seats in the room are taken", body = ErrorBody)
    ),
    tag = "Guests"
)]
pub async fn create_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i32>,
    Json(body): Json<CreateGuestRequest>,
) -> ApiResult<(StatusCode, Json<GuestWithRoomResponse>)> {
    let composed = state.guests.create(guest_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(composed.into())))
}

/// Apply a partial update to a guest
#[utoipa::path(
    put,
    path = "/guest/{guest_id}",
    params(
        ("guest_id" = i32, Path, description = "Guest identifier")
    ),
    request_body = UpdateGuestRequest,
    responses(
        (status = 200, description = "Guest updated", body = GuestWithRoomResponse),
        (status = 404, description = "No guest with that identifier, or the patched room number names no room", body = ErrorBody),
        (status = 409, description = "Patched identifier already in use", body = ErrorBody),
        (status = 422, description = "The patched room has no free seat", body = ErrorBody)
    ),
    tag = "Guests"
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i32>,
    Json(body): Json<UpdateGuestRequest>,
) -> ApiResult<Json<GuestWithRoomResponse>> {
    let composed = state.guests.update(guest_id, body.into()).await?;
    Ok(Json(composed.into()))
}

/// Delete a guest; absent identifiers are a no-op
#[utoipa::path(
    delete,
    path = "/guest/{guest_id}",
    params(
        ("guest_id" = i32, Path, description = "Guest identifier")
    ),
    responses(
        (status = 204, description = "Guest removed (or was already absent)")
    ),
    tag = "Guests"
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.guests.delete(guest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every guest with their room
#[utoipa::path(
    get,
    path = "/guestlist",
    responses(
        (status = 200, description = "All guests", body = [GuestWithRoomResponse]),
        (status = 404, description = "A guest's room reference no longer resolves", body = ErrorBody)
    ),
    tag = "Guests"
)]
pub async fn list_guests(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<GuestWithRoomResponse>>> {
    let guests = state.guests.list().await?;
    Ok(Json(guests.into_iter().map(Into::into).collect()))
}
