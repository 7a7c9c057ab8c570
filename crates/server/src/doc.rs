use crate::routes::{guest, health, room, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        room::get_room,
        room::create_room,
        room::update_room,
        room::delete_room,
        room::list_rooms,
        guest::get_guest,
        guest::create_guest,
        guest::update_guest,
        guest::delete_guest,
        guest::list_guests
    ),
    tags(
        (name = "Rooms", description = "Hotel room records"),
        (name = "Guests", description = "Guest records and room assignments"),
        (name = "Health", description = "Liveness probes"),
    ),
    info(
        title = "Hotel API",
        version = "1.0.0",
        description = "Record-keeping service for hotel rooms and guests",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
